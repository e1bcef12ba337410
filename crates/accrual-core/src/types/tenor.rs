//! Tenor types.
//!
//! A [`Tenor`] is the calendar interval between successive dates in a
//! schedule, written the way market conventions quote it: `"3M"`, `"6M"`,
//! `"1Y"`, `"2W"`, `"30D"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AccrualError;

/// Unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Calendar weeks (7 days)
    Weeks,
    /// Calendar months, clamping to month end
    Months,
    /// Calendar years, clamping Feb 29
    Years,
}

impl TenorUnit {
    /// Returns the single-letter market code for the unit.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }
}

/// A signed calendar interval such as six months.
///
/// # Example
///
/// ```rust
/// use accrual_core::types::{Tenor, TenorUnit};
///
/// let tenor: Tenor = "6M".parse().unwrap();
/// assert_eq!(tenor, Tenor::months(6));
/// assert_eq!(tenor.unit(), TenorUnit::Months);
/// assert_eq!(tenor.to_string(), "6M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tenor {
    amount: i32,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor of `amount` units.
    #[must_use]
    pub const fn new(amount: i32, unit: TenorUnit) -> Self {
        Self { amount, unit }
    }

    /// Creates a tenor in days.
    #[must_use]
    pub const fn days(amount: i32) -> Self {
        Self::new(amount, TenorUnit::Days)
    }

    /// Creates a tenor in weeks.
    #[must_use]
    pub const fn weeks(amount: i32) -> Self {
        Self::new(amount, TenorUnit::Weeks)
    }

    /// Creates a tenor in months.
    #[must_use]
    pub const fn months(amount: i32) -> Self {
        Self::new(amount, TenorUnit::Months)
    }

    /// Creates a tenor in years.
    #[must_use]
    pub const fn years(amount: i32) -> Self {
        Self::new(amount, TenorUnit::Years)
    }

    /// Returns the signed number of units.
    #[must_use]
    pub const fn amount(&self) -> i32 {
        self.amount
    }

    /// Returns the unit.
    #[must_use]
    pub const fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Returns true if the tenor moves dates forward.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Returns the tenor pointing the other way, or `None` for `i32::MIN` units.
    #[must_use]
    pub const fn checked_neg(&self) -> Option<Self> {
        match self.amount.checked_neg() {
            Some(amount) => Some(Self::new(amount, self.unit)),
            None => None,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.code())
    }
}

impl FromStr for Tenor {
    type Err = AccrualError;

    /// Parses `"<amount><unit>"` where unit is one of `D`, `W`, `M`, `Y`
    /// (case-insensitive). A leading `-` gives a negative tenor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let unit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('D') => TenorUnit::Days,
            Some('W') => TenorUnit::Weeks,
            Some('M') => TenorUnit::Months,
            Some('Y') => TenorUnit::Years,
            _ => {
                return Err(AccrualError::invalid_tenor(format!(
                    "'{s}' must end with one of D, W, M, Y"
                )))
            }
        };
        let amount = chars
            .as_str()
            .parse::<i32>()
            .map_err(|e| AccrualError::invalid_tenor(format!("'{s}': {e}")))?;
        Ok(Self::new(amount, unit))
    }
}

impl Serialize for Tenor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tenor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("6M".parse::<Tenor>().unwrap(), Tenor::months(6));
        assert_eq!("1y".parse::<Tenor>().unwrap(), Tenor::years(1));
        assert_eq!(" 2W ".parse::<Tenor>().unwrap(), Tenor::weeks(2));
        assert_eq!("-30D".parse::<Tenor>().unwrap(), Tenor::days(-30));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Tenor>().is_err());
        assert!("M".parse::<Tenor>().is_err());
        assert!("6Q".parse::<Tenor>().is_err());
        assert!("sixM".parse::<Tenor>().is_err());
    }

    #[test]
    fn test_display_and_neg() {
        assert_eq!(Tenor::months(6).to_string(), "6M");
        assert_eq!(Tenor::months(6).checked_neg().unwrap().to_string(), "-6M");
        assert!(!Tenor::years(1).checked_neg().unwrap().is_positive());
        assert_eq!(Tenor::months(i32::MIN).checked_neg(), None);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Tenor::months(3)).unwrap();
        assert_eq!(json, "\"3M\"");
        let parsed: Tenor = serde_json::from_str("\"1Y\"").unwrap();
        assert_eq!(parsed, Tenor::years(1));
        assert!(serde_json::from_str::<Tenor>("\"1X\"").is_err());
    }
}
