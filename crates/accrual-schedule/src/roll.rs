//! Roll day conventions.
//!
//! When stepping through a sequence of dates with monthly or yearly
//! periodicity, the raw date arithmetic result has to be moved onto the
//! desired day of the month. A [`RollConvention`] does that.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use accrual_core::{Date, Tenor};

use crate::error::{ScheduleError, ScheduleResult};

/// Rule placing unadjusted grid dates on a day of the month.
///
/// Equality is structural: two `DayOfMonth` rolls are equal iff their days
/// match.
///
/// # Example
///
/// ```rust
/// use accrual_core::{Date, Tenor};
/// use accrual_schedule::RollConvention;
///
/// let roll = RollConvention::DayOfMonth(31);
/// let date = Date::from_ymd(2023, 8, 31).unwrap();
///
/// // Clamped to the end of February
/// assert_eq!(
///     roll.next(date, Tenor::months(6)).unwrap(),
///     Date::from_ymd(2024, 2, 29).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollConvention {
    /// Fixed day of the month, clamped to the month's last day.
    DayOfMonth(u32),
    /// Last calendar day of the month.
    EndOfMonth,
    /// First calendar day of the month.
    StartOfMonth,
}

impl RollConvention {
    /// Creates a validated day-of-month roll.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidRollDay` unless `1 <= day <= 31`.
    pub fn day_of_month(day: u32) -> ScheduleResult<Self> {
        if (1..=31).contains(&day) {
            Ok(Self::DayOfMonth(day))
        } else {
            Err(ScheduleError::InvalidRollDay { day })
        }
    }

    /// Selects the roll convention for a regular grid starting at `start`.
    ///
    /// `eom` rolls to month end, `bom` to month start, otherwise the day of
    /// `start` becomes the roll day for every regular period.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::ConflictingRollFlags` if both flags are set.
    pub fn from_flags(start: Date, eom: bool, bom: bool) -> ScheduleResult<Self> {
        match (eom, bom) {
            (true, true) => Err(ScheduleError::ConflictingRollFlags),
            (true, false) => Ok(Self::EndOfMonth),
            (false, true) => Ok(Self::StartOfMonth),
            (false, false) => Ok(Self::DayOfMonth(start.day())),
        }
    }

    /// Moves `date` onto this roll day within the same month.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidRollDay` for a `DayOfMonth(0)` roll.
    pub fn adjust(&self, date: Date) -> ScheduleResult<Date> {
        match *self {
            Self::DayOfMonth(day) => date
                .with_day(day)
                .map_err(|_| ScheduleError::InvalidRollDay { day }),
            Self::EndOfMonth => Ok(date.end_of_month()),
            Self::StartOfMonth => Ok(date.start_of_month()),
        }
    }

    /// Next date in the sequence: `adjust(date + tenor)`.
    pub fn next(&self, date: Date, tenor: Tenor) -> ScheduleResult<Date> {
        self.adjust(date.add_tenor(tenor)?)
    }

    /// Previous date in the sequence: `adjust(date - tenor)`.
    pub fn previous(&self, date: Date, tenor: Tenor) -> ScheduleResult<Date> {
        self.adjust(date.sub_tenor(tenor)?)
    }
}

impl fmt::Display for RollConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayOfMonth(day) => write!(f, "{day}"),
            Self::EndOfMonth => f.write_str("EOM"),
            Self::StartOfMonth => f.write_str("SOM"),
        }
    }
}

impl FromStr for RollConvention {
    type Err = ScheduleError;

    /// Parses `"EOM"`, `"SOM"` (also `"BOM"`) or a day number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EOM" => Ok(Self::EndOfMonth),
            "SOM" | "BOM" => Ok(Self::StartOfMonth),
            other => {
                let day = other
                    .parse::<u32>()
                    .map_err(|_| ScheduleError::config(format!("unknown roll convention '{s}'")))?;
                Self::day_of_month(day)
            }
        }
    }
}

impl Serialize for RollConvention {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RollConvention {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
