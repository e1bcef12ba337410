//! Accrual schedule generation.
//!
//! This module provides schedule generation with support for:
//! - Regular periodic schedules on a day-of-month, end-of-month or
//!   start-of-month roll grid
//! - Front and back stub periods
//! - Business day adjustment of every period boundary
//!
//! # Example
//!
//! ```rust
//! use accrual_core::calendars::{BusinessDayCalendar, BusinessDayConvention};
//! use accrual_core::{Date, Tenor};
//! use accrual_schedule::Schedule;
//!
//! let schedule = Schedule::builder(
//!     Date::from_ymd(2025, 1, 10).unwrap(),
//!     Date::from_ymd(2027, 8, 15).unwrap(),
//!     Tenor::months(6),
//!     BusinessDayCalendar::weekends_only(),
//!     BusinessDayConvention::Following,
//! )
//! .front_stub(Date::from_ymd(2025, 8, 15).unwrap())
//! .build()
//! .unwrap();
//!
//! assert_eq!(schedule.len(), 5);
//! for period in &schedule {
//!     println!("{period}");
//! }
//! ```

use serde::Serialize;

use accrual_core::calendars::{Adjuster, BusinessDayCalendar, BusinessDayConvention};
use accrual_core::daycounts::DayCount;
use accrual_core::{AccrualError, Date, Tenor};

use crate::error::{ScheduleError, ScheduleResult};
use crate::period::Period;
use crate::roll::RollConvention;

/// An ordered, contiguous sequence of accrual periods.
///
/// Each period's unadjusted end equals the next period's unadjusted start,
/// the first period starts on the effective date and the last one ends on
/// the termination date. Schedules are immutable and only obtainable through
/// [`Schedule::of`] or [`ScheduleBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    periods: Vec<Period>,
    roll_conv: RollConvention,
    adjuster: Adjuster,
    tenor: Tenor,
    effective: Date,
    termination: Date,
}

impl Schedule {
    /// Constructs a schedule from its conventions.
    ///
    /// # Arguments
    ///
    /// * `effective` - Start date of the schedule
    /// * `termination` - End date of the schedule
    /// * `tenor` - Interval between successive regular dates
    /// * `pay_calendar` - Calendar used to adjust dates to business days
    /// * `busday_conv` - Business day adjustment convention
    /// * `front_stub` - First regular date; the front period is a stub
    /// * `back_stub` - Last regular date; the back period is a stub
    /// * `eom` - Roll regular dates to the last calendar day of the month
    /// * `bom` - Roll regular dates to the first calendar day of the month
    ///
    /// The regular grid must land exactly on `back_stub` (or `termination`
    /// without one). A grid that steps past it is rejected with
    /// `GridMismatch` rather than closed with an overlong final period, so
    /// the last period always ends on `termination`.
    ///
    /// # Errors
    ///
    /// See [`ScheduleBuilder::build`].
    #[allow(clippy::too_many_arguments)]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn of(
        effective: Date,
        termination: Date,
        tenor: Tenor,
        pay_calendar: BusinessDayCalendar,
        busday_conv: BusinessDayConvention,
        front_stub: Option<Date>,
        back_stub: Option<Date>,
        eom: bool,
        bom: bool,
    ) -> ScheduleResult<Self> {
        ScheduleBuilder {
            effective,
            termination,
            tenor,
            calendar: pay_calendar,
            convention: busday_conv,
            front_stub,
            back_stub,
            eom,
            bom,
        }
        .build()
    }

    /// Starts a builder with no stubs and day-of-month rolling.
    #[must_use]
    pub fn builder(
        effective: Date,
        termination: Date,
        tenor: Tenor,
        pay_calendar: BusinessDayCalendar,
        busday_conv: BusinessDayConvention,
    ) -> ScheduleBuilder {
        ScheduleBuilder {
            effective,
            termination,
            tenor,
            calendar: pay_calendar,
            convention: busday_conv,
            front_stub: None,
            back_stub: None,
            eom: false,
            bom: false,
        }
    }

    /// Returns the periods in chronological order.
    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Returns the roll convention of the regular grid.
    #[must_use]
    pub fn roll_convention(&self) -> RollConvention {
        self.roll_conv
    }

    /// Returns the business day adjuster.
    #[must_use]
    pub fn adjuster(&self) -> &Adjuster {
        &self.adjuster
    }

    /// Returns the tenor of the regular grid.
    #[must_use]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Returns the unadjusted effective date.
    #[must_use]
    pub fn effective(&self) -> Date {
        self.effective
    }

    /// Returns the unadjusted termination date.
    #[must_use]
    pub fn termination(&self) -> Date {
        self.termination
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if the schedule has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns an iterator over the periods.
    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    /// Returns the first period.
    #[must_use]
    pub fn first_period(&self) -> Option<&Period> {
        self.periods.first()
    }

    /// Returns the last period.
    #[must_use]
    pub fn last_period(&self) -> Option<&Period> {
        self.periods.last()
    }

    /// Returns the periods that are exactly one regular step long.
    pub fn regular_periods(&self) -> ScheduleResult<Vec<&Period>> {
        let mut regular = Vec::with_capacity(self.periods.len());
        for period in &self.periods {
            if period.is_regular(&self.roll_conv, self.tenor)? {
                regular.push(period);
            }
        }
        Ok(regular)
    }

    /// Returns the unadjusted boundary dates, `len() + 1` of them.
    #[must_use]
    pub fn unadjusted_dates(&self) -> Vec<Date> {
        self.boundaries(|p| (p.unadj_start(), p.unadj_end()))
    }

    /// Returns the adjusted boundary dates, `len() + 1` of them.
    #[must_use]
    pub fn adjusted_dates(&self) -> Vec<Date> {
        self.boundaries(|p| (p.start(), p.end()))
    }

    /// Returns the year fraction of every period.
    pub fn year_fractions<D: DayCount + ?Sized>(&self, daycounter: &D, adjusted: bool) -> Vec<f64> {
        self.periods
            .iter()
            .map(|p| p.calc_year_frac(daycounter, adjusted))
            .collect()
    }

    fn boundaries(&self, bounds: impl Fn(&Period) -> (Date, Date)) -> Vec<Date> {
        let mut dates = Vec::with_capacity(self.periods.len() + 1);
        if let Some(first) = self.periods.first() {
            dates.push(bounds(first).0);
        }
        dates.extend(self.periods.iter().map(|p| bounds(p).1));
        dates
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

/// Builder for [`Schedule`].
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    effective: Date,
    termination: Date,
    tenor: Tenor,
    calendar: BusinessDayCalendar,
    convention: BusinessDayConvention,
    front_stub: Option<Date>,
    back_stub: Option<Date>,
    eom: bool,
    bom: bool,
}

impl ScheduleBuilder {
    /// Sets the first regular date, making the front period a stub.
    #[must_use]
    pub fn front_stub(mut self, date: Date) -> Self {
        self.front_stub = Some(date);
        self
    }

    /// Sets the last regular date, making the back period a stub.
    #[must_use]
    pub fn back_stub(mut self, date: Date) -> Self {
        self.back_stub = Some(date);
        self
    }

    /// Rolls regular dates to the last calendar day of the month.
    #[must_use]
    pub fn end_of_month(mut self, eom: bool) -> Self {
        self.eom = eom;
        self
    }

    /// Rolls regular dates to the first calendar day of the month.
    #[must_use]
    pub fn start_of_month(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Generates the schedule.
    ///
    /// # Errors
    ///
    /// - `ConflictingRollFlags` if both `eom` and `bom` are set
    /// - `InvalidDateRange` unless `effective < termination`
    /// - `InvalidStub` if a stub date is not strictly inside
    ///   `(effective, termination)` or the front stub is after the back stub
    /// - `GridMismatch` if the regular grid steps past the back stub (or
    ///   termination) without landing on it
    /// - `NonAdvancingRoll` if a roll step does not move forward
    /// - `Core(InvalidTenor)` for a non-positive tenor
    /// - `Core(InvalidDate)` if a grid date or its business day adjustment
    ///   falls outside the supported date range
    pub fn build(self) -> ScheduleResult<Schedule> {
        self.validate()?;

        log::debug!(
            "building schedule {} -> {} every {} ({}, front stub {:?}, back stub {:?})",
            self.effective,
            self.termination,
            self.tenor,
            self.convention,
            self.front_stub,
            self.back_stub
        );

        let adjuster = Adjuster::new(self.calendar, self.convention);
        let mut periods = Vec::new();

        let start = match self.front_stub {
            Some(stub) => {
                periods.push(make_period(&adjuster, self.effective, stub)?);
                stub
            }
            None => self.effective,
        };

        let roll_conv = RollConvention::from_flags(start, self.eom, self.bom)?;
        let grid_end = self.back_stub.unwrap_or(self.termination);

        let mut current = start;
        while current < grid_end {
            let next = roll_conv.next(current, self.tenor)?;
            if next <= current {
                return Err(ScheduleError::NonAdvancingRoll {
                    date: current,
                    tenor: self.tenor,
                });
            }
            if next > grid_end {
                return Err(ScheduleError::GridMismatch {
                    grid_end,
                    reached: next,
                });
            }
            let period = make_period(&adjuster, current, next)?;
            log::trace!("regular period {period}");
            periods.push(period);
            current = next;
        }

        if let Some(stub) = self.back_stub {
            periods.push(make_period(&adjuster, stub, self.termination)?);
        }

        log::debug!(
            "built schedule with {} periods on roll {}",
            periods.len(),
            roll_conv
        );

        Ok(Schedule {
            periods,
            roll_conv,
            adjuster,
            tenor: self.tenor,
            effective: self.effective,
            termination: self.termination,
        })
    }

    fn validate(&self) -> ScheduleResult<()> {
        if self.eom && self.bom {
            return Err(ScheduleError::ConflictingRollFlags);
        }

        if !self.tenor.is_positive() {
            return Err(AccrualError::invalid_tenor(format!(
                "schedule tenor must be positive, got {}",
                self.tenor
            ))
            .into());
        }

        if self.effective >= self.termination {
            return Err(ScheduleError::InvalidDateRange {
                effective: self.effective,
                termination: self.termination,
            });
        }

        for (label, stub) in [("front", self.front_stub), ("back", self.back_stub)] {
            if let Some(date) = stub {
                if date <= self.effective || date >= self.termination {
                    return Err(ScheduleError::invalid_stub(format!(
                        "{label} stub {date} must lie strictly between {} and {}",
                        self.effective, self.termination
                    )));
                }
            }
        }

        if let (Some(front), Some(back)) = (self.front_stub, self.back_stub) {
            if front > back {
                return Err(ScheduleError::invalid_stub(format!(
                    "front stub {front} is after back stub {back}"
                )));
            }
        }

        Ok(())
    }
}

/// Builds a period, adjusting each boundary independently.
fn make_period(adjuster: &Adjuster, unadj_start: Date, unadj_end: Date) -> ScheduleResult<Period> {
    Ok(Period::new(
        adjuster.adjust(unadj_start)?,
        adjuster.adjust(unadj_end)?,
        unadj_start,
        unadj_end,
    ))
}
