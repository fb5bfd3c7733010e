/// Direction of a transaction's cash flow.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Sign shown in front of amounts of this kind.
    pub fn sign(self) -> char {
        match self {
            Kind::Income => '+',
            Kind::Expense => '-',
        }
    }
}
