//! Schedule period.

use serde::{Deserialize, Serialize};
use std::fmt;

use accrual_core::daycounts::DayCount;
use accrual_core::{Date, Tenor};

use crate::error::ScheduleResult;
use crate::roll::RollConvention;

/// One accrual period of a schedule.
///
/// Holds both the unadjusted boundaries (the roll grid, used for accrual
/// regularity) and the business day adjusted boundaries (used for payment
/// timing and, usually, accrual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: Date,
    end: Date,
    unadj_start: Date,
    unadj_end: Date,
}

impl Period {
    /// Creates a period from its adjusted and unadjusted boundaries.
    #[must_use]
    pub fn new(start: Date, end: Date, unadj_start: Date, unadj_end: Date) -> Self {
        Self {
            start,
            end,
            unadj_start,
            unadj_end,
        }
    }

    /// Adjusted start date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Adjusted end date.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Unadjusted start date.
    #[must_use]
    pub fn unadj_start(&self) -> Date {
        self.unadj_start
    }

    /// Unadjusted end date.
    #[must_use]
    pub fn unadj_end(&self) -> Date {
        self.unadj_end
    }

    /// Number of calendar days between the adjusted boundaries.
    #[must_use]
    pub fn length_in_days(&self) -> i64 {
        self.start.days_between(&self.end)
    }

    /// Number of calendar days between the unadjusted boundaries.
    #[must_use]
    pub fn unadjusted_length_in_days(&self) -> i64 {
        self.unadj_start.days_between(&self.unadj_end)
    }

    /// Year fraction of the period under `daycounter`.
    ///
    /// Uses the adjusted boundaries when `adjusted` is true, the unadjusted
    /// ones otherwise.
    pub fn calc_year_frac<D: DayCount + ?Sized>(&self, daycounter: &D, adjusted: bool) -> f64 {
        if adjusted {
            daycounter.year_fraction(self.start, self.end)
        } else {
            daycounter.year_fraction(self.unadj_start, self.unadj_end)
        }
    }

    /// Returns true if the unadjusted boundaries are exactly one regular
    /// step apart in both directions.
    ///
    /// Both `next(unadj_start) == unadj_end` and
    /// `previous(unadj_end) == unadj_start` must hold, which rules out stubs
    /// where only one side happens to sit on the grid.
    pub fn is_regular(&self, roll_conv: &RollConvention, tenor: Tenor) -> ScheduleResult<bool> {
        Ok(self.unadj_end == roll_conv.next(self.unadj_start, tenor)?
            && self.unadj_start == roll_conv.previous(self.unadj_end, tenor)?)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) (unadj {} .. {})",
            self.start, self.end, self.unadj_start, self.unadj_end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrual_core::daycounts::Act360;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn regular_period() -> Period {
        Period::new(
            date(2025, 2, 17),
            date(2025, 8, 15),
            date(2025, 2, 15),
            date(2025, 8, 15),
        )
    }

    fn long_period() -> Period {
        Period::new(
            date(2024, 12, 2),
            date(2025, 8, 15),
            date(2024, 12, 1),
            date(2025, 8, 15),
        )
    }

    #[test]
    fn test_length_in_days() {
        assert_eq!(regular_period().length_in_days(), 179);
        assert_eq!(regular_period().unadjusted_length_in_days(), 181);
    }

    #[test]
    fn test_year_frac_adjusted() {
        assert_eq!(regular_period().calc_year_frac(&Act360, true), 179.0 / 360.0);
    }

    #[test]
    fn test_year_frac_unadjusted() {
        assert_eq!(regular_period().calc_year_frac(&Act360, false), 181.0 / 360.0);
    }

    #[test]
    fn test_year_frac_with_trait_object() {
        let dc: Box<dyn DayCount> = Box::new(Act360);
        assert_eq!(regular_period().calc_year_frac(dc.as_ref(), true), 179.0 / 360.0);
    }

    #[test]
    fn test_is_regular_regular() {
        let roll = RollConvention::DayOfMonth(15);
        assert!(regular_period().is_regular(&roll, Tenor::months(6)).unwrap());
    }

    #[test]
    fn test_is_regular_stub() {
        let roll = RollConvention::DayOfMonth(15);
        assert!(!long_period().is_regular(&roll, Tenor::months(6)).unwrap());
    }

    #[test]
    fn test_is_regular_requires_both_directions() {
        // Aug 31 + 6M lands on Feb 29, but Feb 29 - 6M lands on Aug 29 on a 29th grid
        let period = Period::new(
            date(2023, 8, 31),
            date(2024, 2, 29),
            date(2023, 8, 31),
            date(2024, 2, 29),
        );
        let roll = RollConvention::DayOfMonth(29);
        assert!(!period.is_regular(&roll, Tenor::months(6)).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            regular_period().to_string(),
            "[2025-02-17, 2025-08-15) (unadj 2025-02-15 .. 2025-08-15)"
        );
    }
}
