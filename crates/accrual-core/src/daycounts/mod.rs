//! Day count conventions for accrual calculations.
//!
//! Day count conventions determine how accrued interest is calculated
//! by specifying how to count days between two dates and the year basis.
//!
//! The [`DayCount`] trait is the extension point: any type implementing it
//! can be handed to period year fraction queries. [`Act360`] is the built-in
//! reference convention, and
//! [`DayCountConvention`] selects built-in conventions at runtime (for
//! example from configuration).
//!
//! # Usage
//!
//! ```rust
//! use accrual_core::daycounts::{Act360, DayCount};
//! use accrual_core::types::Date;
//!
//! let dc = Act360;
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 6, 30).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! assert_eq!(dc.year_fraction(start, end), 0.5);
//! ```

mod act360;

pub use act360::Act360;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AccrualError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` returns the fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Ranges are not required to be ordered; reversed ranges give negative
///   results
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// # Arguments
    ///
    /// * `start` - Start date (exclusive for accrual)
    /// * `end` - End date (inclusive for accrual)
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

impl<T: DayCount + ?Sized> DayCount for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        (**self).year_fraction(start, end)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        (**self).day_count(start, end)
    }
}

/// Enumeration of the built-in day count conventions.
///
/// Conventions outside this set are supplied by implementing [`DayCount`]
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DayCountConvention {
    /// Actual/360 - Money market instruments, FRNs, SOFR swaps
    #[default]
    Act360,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
        }
    }

    /// Returns all built-in day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::Act360]
    }
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        DayCountConvention::name(self)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Act360 => Act360.day_count(start, end),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = AccrualError;

    /// Parses a day count convention from a string.
    ///
    /// Supports market names ("ACT/360", "ACTUAL/360") and the Rust variant
    /// name ("Act360").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" | "A360" => Ok(DayCountConvention::Act360),
            _ => Err(AccrualError::day_count(format!(
                "unknown day count convention: '{s}'"
            ))),
        }
    }
}

impl Serialize for DayCountConvention {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DayCountConvention {
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

    struct FixedDayCount;

    impl DayCount for FixedDayCount {
        fn name(&self) -> &'static str {
            "FIXED"
        }

        fn year_fraction(&self, _start: Date, _end: Date) -> f64 {
            -1004.0
        }

        fn day_count(&self, _start: Date, _end: Date) -> i64 {
            0
        }
    }

    #[test]
    fn test_external_implementation_through_box() {
        let dc: Box<dyn DayCount> = Box::new(FixedDayCount);
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 12, 31).unwrap();
        assert_eq!(dc.year_fraction(start, end), -1004.0);
        assert_eq!(dc.name(), "FIXED");
    }

    #[test]
    fn test_convention_delegates() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 6, 30).unwrap();
        for conv in DayCountConvention::all() {
            let boxed = conv.to_day_count();
            assert_eq!(conv.year_fraction(start, end), boxed.year_fraction(start, end));
            assert_eq!(DayCount::name(conv), boxed.name());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "act/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            "Actual/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert!("30/360".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&DayCountConvention::Act360).unwrap();
        assert_eq!(json, "\"ACT/360\"");
        let parsed: DayCountConvention = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DayCountConvention::Act360);
    }
}
