//! Weekly business day pattern.

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{AccrualError, AccrualResult};

const WEEKDAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Seven flags, Monday first, marking which weekdays are business days.
///
/// Parses from either a 7-character `0`/`1` string (`"1111100"`) or a
/// whitespace-separated list of weekday abbreviations
/// (`"Mon Tue Wed Thu Fri"`). At least one weekday must be a business day,
/// otherwise no date could ever be adjusted.
///
/// # Example
///
/// ```rust
/// use accrual_core::calendars::Weekmask;
/// use chrono::Weekday;
///
/// let mask: Weekmask = "1111100".parse().unwrap();
/// assert!(mask.is_business_weekday(Weekday::Fri));
/// assert!(!mask.is_business_weekday(Weekday::Sat));
/// assert_eq!(mask, "Mon Tue Wed Thu Fri".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekmask([bool; 7]);

impl Weekmask {
    /// Monday to Friday.
    pub const WEEKDAYS: Weekmask = Weekmask([true, true, true, true, true, false, false]);

    /// Creates a weekmask from Monday-first flags.
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::CalendarError` if no weekday is a business day.
    pub fn new(flags: [bool; 7]) -> AccrualResult<Self> {
        if !flags.iter().any(|&f| f) {
            return Err(AccrualError::calendar(
                "weekmask must mark at least one business day",
            ));
        }
        Ok(Self(flags))
    }

    /// Creates a weekmask from a slice of Monday-first flags.
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::CalendarError` if the slice does not have
    /// exactly seven entries.
    pub fn from_slice(flags: &[bool]) -> AccrualResult<Self> {
        let flags: [bool; 7] = flags.try_into().map_err(|_| {
            AccrualError::calendar(format!(
                "weekmask must have exactly 7 entries, got {}",
                flags.len()
            ))
        })?;
        Self::new(flags)
    }

    /// Returns true if `weekday` is a business day under this mask.
    #[inline]
    #[must_use]
    pub fn is_business_weekday(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_monday() as usize]
    }

    /// Returns the Monday-first flags.
    #[must_use]
    pub fn flags(&self) -> [bool; 7] {
        self.0
    }
}

impl Default for Weekmask {
    fn default() -> Self {
        Self::WEEKDAYS
    }
}

impl fmt::Display for Weekmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.0 {
            f.write_str(if flag { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Weekmask {
    type Err = AccrualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.chars().all(|c| c == '0' || c == '1') {
            let flags: Vec<bool> = trimmed.chars().map(|c| c == '1').collect();
            return Self::from_slice(&flags);
        }

        let mut flags = [false; 7];
        for token in trimmed.split_whitespace() {
            let lower = token.to_ascii_lowercase();
            let idx = WEEKDAY_NAMES
                .iter()
                .position(|name| *name == lower)
                .ok_or_else(|| {
                    AccrualError::calendar(format!("invalid weekmask entry '{token}' in '{s}'"))
                })?;
            flags[idx] = true;
        }
        Self::new(flags)
    }
}

impl Serialize for Weekmask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Weekmask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
