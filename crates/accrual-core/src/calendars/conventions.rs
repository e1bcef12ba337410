//! Business day adjustment conventions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::Calendar;
use crate::error::{AccrualError, AccrualResult};
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl BusinessDayConvention {
    /// Returns the canonical lowercase code (`"following"`, `"none"`, ...).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "none",
            BusinessDayConvention::Following => "following",
            BusinessDayConvention::ModifiedFollowing => "modifiedfollowing",
            BusinessDayConvention::Preceding => "preceding",
            BusinessDayConvention::ModifiedPreceding => "modifiedpreceding",
        }
    }

    /// Returns all conventions.
    #[must_use]
    pub fn all() -> &'static [BusinessDayConvention] {
        &[
            BusinessDayConvention::Unadjusted,
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
        ]
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = AccrualError;

    /// Parses a convention name, ignoring case, spaces, `_` and `-`.
    ///
    /// Accepts `following`, `preceding`, `modifiedfollowing`,
    /// `modifiedpreceding`, `none` and the aliases `unadjusted`, `F`, `P`,
    /// `MF`, `MP`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "none" | "unadjusted" => Ok(BusinessDayConvention::Unadjusted),
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            _ => Err(AccrualError::config(format!(
                "unknown business day convention: '{s}'"
            ))),
        }
    }
}

impl Serialize for BusinessDayConvention {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for BusinessDayConvention {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Adjusts a date according to the given business day convention.
///
/// # Errors
///
/// Returns `AccrualError::InvalidDate` if the search for a business day runs
/// past the supported date range.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> AccrualResult<Date> {
    if convention == BusinessDayConvention::Unadjusted || calendar.is_business_day(date) {
        return Ok(date);
    }

    match convention {
        BusinessDayConvention::Unadjusted => Ok(date),

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            // Running off the end of the range also leaves the month
            match following(date, calendar) {
                Ok(adjusted) if adjusted.same_month(&date) => Ok(adjusted),
                _ => preceding(date, calendar),
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),

        BusinessDayConvention::ModifiedPreceding => match preceding(date, calendar) {
            Ok(adjusted) if adjusted.same_month(&date) => Ok(adjusted),
            _ => following(date, calendar),
        },
    }
}

/// Returns the next business day on or after the given date.
fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> AccrualResult<Date> {
    while !calendar.is_business_day(date) {
        date = date.checked_add_days(1)?;
    }
    Ok(date)
}

/// Returns the previous business day on or before the given date.
fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> AccrualResult<Date> {
    while !calendar.is_business_day(date) {
        date = date.checked_add_days(-1)?;
    }
    Ok(date)
}
