use crate::base::Date;
use crate::base::Datepart;

/// Time range a report is restricted to: one calendar month, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    All,
    /// The calendar month containing the given date.
    Month(Date),
}

impl Window {
    /// Window spanning the calendar month of `dt`.
    pub fn month(dt: Date) -> Self {
        Self::Month(dt.first_of(Datepart::Month))
    }

    pub fn contains(self, dt: Date) -> bool {
        match self {
            Window::All => true,
            Window::Month(m) => dt.year() == m.year() && dt.month() == m.month(),
        }
    }

    /// First date in the window.
    pub fn start(self) -> Date {
        match self {
            Window::All => Date::MIN,
            Window::Month(m) => m.first_of(Datepart::Month),
        }
    }

    /// Last date in the window.
    pub fn end(self) -> Date {
        match self {
            Window::All => Date::MAX,
            Window::Month(m) => m.last_of(Datepart::Month),
        }
    }

    /// Human-readable description, e.g. `March 2015` or `all time`.
    pub fn label(self) -> String {
        match self {
            Window::All => "all time".to_string(),
            Window::Month(m) => format!("{} {}", m.month_name(), m.year()),
        }
    }
}

impl std::fmt::Display for Window {
    /// Writes a string that parses back into the same window.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Window::All => f.write_str("all"),
            Window::Month(m) => write!(f, "{:04}-{:02}", m.year(), m.month()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid month, expected 'yyyy-mm'")]
    Month,
    #[error(transparent)]
    Date(#[from] crate::base::date::ParseError),
}

impl std::str::FromStr for Window {
    type Err = ParseError;

    /// Parses a window from one of:
    /// - `all` or `:`, the unbounded window
    /// - `yyyy-mm`
    /// - any date accepted by [`Date`], which selects that date's month
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") || s == ":" {
            return Ok(Self::All);
        }
        if let Some((y, m)) = s.split_once('-') {
            let is_yyyy_mm = y.len() == 4
                && y.bytes().all(|b| b.is_ascii_digit())
                && !m.is_empty()
                && m.len() <= 2
                && m.bytes().all(|b| b.is_ascii_digit());
            if is_yyyy_mm {
                let year = y.parse::<i32>().map_err(|_| ParseError::Month)?;
                let month = m.parse::<u32>().map_err(|_| ParseError::Month)?;
                return Date::from_ymd(year, month, 1)
                    .map(Self::Month)
                    .ok_or(ParseError::Month);
            }
        }
        Ok(Self::month(s.parse::<Date>()?))
    }
}

impl TryFrom<&str> for Window {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
