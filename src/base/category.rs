/// Free-form category label. The empty category is valid and stands for
/// uncategorized transactions; it is its own group and is never merged with a
/// labeled category.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "String")]
pub struct Category(String);

impl Category {
    /// Display label of the empty category.
    pub const UNCATEGORIZED: &str = "(uncategorized)";

    pub fn str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the category for display purposes, substituting
    /// [`Category::UNCATEGORIZED`] for the empty category.
    pub fn label(&self) -> &str {
        if self.is_empty() {
            Self::UNCATEGORIZED
        } else {
            self.str()
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.str().fmt(f)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.str()
    }
}

impl From<&Category> for Category {
    fn from(value: &Category) -> Self {
        value.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input contains control characters")]
    ControlCharacter,
}

impl std::str::FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(char::is_control) {
            return Err(ParseError::ControlCharacter);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl TryFrom<String> for Category {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
