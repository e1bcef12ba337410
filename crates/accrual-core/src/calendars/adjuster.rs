//! Business day adjuster.

use serde::{Deserialize, Serialize};

use super::{BusinessDayCalendar, BusinessDayConvention, Calendar};
use crate::error::AccrualResult;
use crate::types::Date;

/// Pairs a calendar with a business day convention.
///
/// Adjustment is a pure function of the date: repeated calls on the same
/// date return the same business day.
///
/// # Example
///
/// ```rust
/// use accrual_core::calendars::{Adjuster, BusinessDayCalendar, BusinessDayConvention};
/// use accrual_core::types::Date;
///
/// let cal = BusinessDayCalendar::from_strings(["2025-11-27"], "1111100").unwrap();
/// let adjuster = Adjuster::new(cal, BusinessDayConvention::Following);
///
/// let thanksgiving = Date::from_ymd(2025, 11, 27).unwrap();
/// assert_eq!(adjuster.adjust(thanksgiving).unwrap(), Date::from_ymd(2025, 11, 28).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjuster {
    calendar: BusinessDayCalendar,
    convention: BusinessDayConvention,
}

impl Adjuster {
    /// Creates an adjuster.
    #[must_use]
    pub fn new(calendar: BusinessDayCalendar, convention: BusinessDayConvention) -> Self {
        Self {
            calendar,
            convention,
        }
    }

    /// Applies the business day convention to `date`.
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::InvalidDate` if no business day is reachable
    /// within the supported date range.
    pub fn adjust(&self, date: Date) -> AccrualResult<Date> {
        self.calendar.adjust(date, self.convention)
    }

    /// Returns the calendar.
    #[must_use]
    pub fn calendar(&self) -> &BusinessDayCalendar {
        &self.calendar
    }

    /// Returns the business day convention.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }
}
