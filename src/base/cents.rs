use crate::base::util;

/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Returns `self / total`, or `None` if `total` is not positive.
    pub fn ratio(self, total: Self) -> Option<f64> {
        if total.is_positive() {
            Some(self.as_f64() / total.as_f64())
        } else {
            None
        }
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.abs().0.max(100) as u64;
        let mut len = util::count_digits(n);
        len += (len - 3) / 3; // commas
        len += 1; // decimal point
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }

    /// Returns `cents.charlen()` assuming a non-negative quantity has a
    /// trailing space in its string representation, so that right-aligning is
    /// equivalent to aligning on the decimal point.
    pub fn charlen_for_alignment(self) -> usize {
        self.charlen() + (self >= Self(0)) as usize
    }

    /// String form padded with a trailing space when non-negative. See
    /// [`Cents::charlen_for_alignment`].
    pub fn to_string_for_alignment(self) -> String {
        if self >= Self(0) {
            format!("{} ", self)
        } else {
            self.to_string()
        }
    }
}

// Arithmetic saturates so that totals of many large amounts pin at the
// bounds instead of wrapping around to the opposite sign.
impl std::ops::Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.abs().0;
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = String::from_utf8_lossy(&bytes);
        f.write_str(&s)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.replace(',', "");
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
