use crate::base::Category;
use crate::base::Kind;

/// A registered category. The same name may be registered once per kind.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Entry {
    pub kind: Kind,
    pub name: Category,
}

/// Registry of known categories, ordered by kind and then by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Categories(std::collections::BTreeSet<Entry>);

impl Categories {
    pub const DEFAULT_INCOME: [&str; 6] = [
        "Salary",
        "Freelance",
        "Contributions",
        "Sales",
        "Gifts",
        "Other",
    ];

    pub const DEFAULT_EXPENSE: [&str; 21] = [
        "Food",
        "Transport",
        "Housing",
        "Health",
        "Groceries",
        "Education",
        "Leisure",
        "Clothing",
        "Family",
        "Pet",
        "Delivery",
        "Bills",
        "Subscriptions and services",
        "Investments",
        "Debts/Loans",
        "Taxes",
        "Bank fees",
        "Leisure and hobbies",
        "Bars and restaurants",
        "Personal care",
        "Other",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in list of income and expense categories.
    pub fn defaults() -> Self {
        let income = Self::DEFAULT_INCOME.iter().map(|&s| (Kind::Income, s));
        let expense = Self::DEFAULT_EXPENSE.iter().map(|&s| (Kind::Expense, s));
        income
            .chain(expense)
            .filter_map(|(kind, s)| {
                let name = s.parse::<Category>().ok()?;
                Some(Entry { kind, name })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, kind: Kind, name: &Category) -> bool {
        self.0.contains(&Entry {
            kind,
            name: name.clone(),
        })
    }

    /// Registers a category. Returns `false` if it was already registered.
    pub fn insert(&mut self, kind: Kind, name: Category) -> bool {
        self.0.insert(Entry { kind, name })
    }

    /// Unregisters a category. Returns `false` if it was not registered.
    pub fn remove(&mut self, kind: Kind, name: &Category) -> bool {
        self.0.remove(&Entry {
            kind,
            name: name.clone(),
        })
    }

    /// Adds every entry of `other` not already registered and returns how many
    /// were added.
    pub fn merge(&mut self, other: Self) -> usize {
        let before = self.len();
        self.0.extend(other.0);
        self.len() - before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.0.iter()
    }

    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = &Category> {
        self.iter().filter(move |e| e.kind == kind).map(|e| &e.name)
    }
}

impl FromIterator<Entry> for Categories {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Categories {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Categories {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Categories {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
