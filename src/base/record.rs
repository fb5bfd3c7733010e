use crate::base::Category;
use crate::base::Cents;
use crate::base::Date;
use crate::base::Kind;

/// A single income or expense transaction. Amounts are never negative; the
/// direction of the cash flow is carried by [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Unchecked")]
pub struct Record {
    #[serde(rename = "d")]
    date: Date,
    #[serde(rename = "k")]
    kind: Kind,
    #[serde(rename = "c", skip_serializing_if = "Category::is_empty")]
    category: Category,
    #[serde(rename = "a")]
    amount: Cents,
    #[serde(rename = "n", skip_serializing_if = "String::is_empty")]
    note: String,
}

/// Wire form of a [`Record`] before its invariants are checked.
#[derive(serde::Deserialize)]
struct Unchecked {
    #[serde(rename = "d")]
    date: Date,
    #[serde(rename = "k")]
    kind: Kind,
    #[serde(rename = "c", default)]
    category: Category,
    #[serde(rename = "a")]
    amount: Cents,
    #[serde(rename = "n", default)]
    note: String,
}

impl TryFrom<Unchecked> for Record {
    type Error = AmountError;

    fn try_from(u: Unchecked) -> Result<Self, Self::Error> {
        Self::new(u.date, u.kind, u.category, u.amount, u.note)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount {0} is negative")]
    Negative(Cents),
    #[error("amount {0} exceeds the maximum of {max}", max = Record::MAX_AMOUNT)]
    TooLarge(Cents),
}

impl Record {
    /// Largest amount a single transaction may carry, one trillion.
    pub const MAX_AMOUNT: Cents = Cents(100_000_000_000_000);

    pub fn new(
        date: Date,
        kind: Kind,
        category: Category,
        amount: Cents,
        note: String,
    ) -> Result<Self, AmountError> {
        if amount < Cents::ZERO {
            return Err(AmountError::Negative(amount));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(AmountError::TooLarge(amount));
        }
        Ok(Self {
            date,
            kind,
            category,
            amount,
            note,
        })
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn amount(&self) -> Cents {
        self.amount
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
