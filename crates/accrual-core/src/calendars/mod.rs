//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait shared by all calendars
//! - [`BusinessDayCalendar`], a caller-supplied weekmask plus holiday set
//! - Business day adjustment conventions and the [`Adjuster`] that applies them

mod adjuster;
mod business_day;
mod conventions;
mod weekmask;

pub use adjuster::Adjuster;
pub use business_day::{BusinessDayCalendar, CalendarData};
pub use conventions::BusinessDayConvention;
pub use weekmask::Weekmask;

use crate::error::AccrualResult;
use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is not a business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> AccrualResult<Date> {
        conventions::adjust(date, convention, self)
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> AccrualResult<Date> {
        self.adjust(date, BusinessDayConvention::Following)
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> AccrualResult<Date> {
        self.adjust(date, BusinessDayConvention::Preceding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> BusinessDayCalendar {
        BusinessDayCalendar::from_strings(["2025-11-27"], "1111100").unwrap()
    }

    #[test]
    fn test_weekend_calendar() {
        let cal = BusinessDayCalendar::weekends_only();

        // Monday
        assert!(cal.is_business_day(Date::from_ymd(2025, 1, 6).unwrap()));
        // Saturday
        assert!(cal.is_holiday(Date::from_ymd(2025, 1, 4).unwrap()));
        // Sunday
        assert!(cal.is_holiday(Date::from_ymd(2025, 1, 5).unwrap()));
    }

    #[test]
    fn test_next_previous_business_day() {
        let cal = calendar();
        let thanksgiving = Date::from_ymd(2025, 11, 27).unwrap();
        assert_eq!(
            cal.next_business_day(thanksgiving).unwrap(),
            Date::from_ymd(2025, 11, 28).unwrap()
        );
        assert_eq!(
            cal.previous_business_day(thanksgiving).unwrap(),
            Date::from_ymd(2025, 11, 26).unwrap()
        );
    }
}
