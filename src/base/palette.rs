/// A display color, either `#rrggbb` or a color name such as `red`. Colors
/// are passed through to renderers verbatim.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn str(&self) -> &str {
        &self.0
    }

    /// Terminal color for this value, if it is a `#rrggbb` hex triplet or a
    /// color name the terminal understands.
    pub fn to_terminal(&self) -> Option<colored::Color> {
        match self.0.strip_prefix('#') {
            Some(hex) => {
                if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(colored::Color::TrueColor {
                    r: channel(0)?,
                    g: channel(2)?,
                    b: channel(4)?,
                })
            }
            None => self.0.parse::<colored::Color>().ok(),
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Ordered, non-empty list of colors assigned to chart wedges by position.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette(Vec<Color>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("palette must contain at least one color")]
pub struct EmptyPaletteError;

impl Palette {
    pub const DEFAULT_COLORS: [&str; 7] = [
        "#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff", "#ff9f40", "#c9cbcf",
    ];

    pub fn new(colors: Vec<Color>) -> Result<Self, EmptyPaletteError> {
        if colors.is_empty() {
            return Err(EmptyPaletteError);
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the color for position `i`, wrapping around once positions
    /// exceed the palette's length.
    pub fn get(&self, i: usize) -> &Color {
        &self.0[i % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(Self::DEFAULT_COLORS.iter().copied().map(Color::from).collect())
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = EmptyPaletteError;

    fn try_from(value: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(value: Palette) -> Self {
        value.0
    }
}
