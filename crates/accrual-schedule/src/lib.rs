//! # Accrual Schedule
//!
//! Accrual period and schedule generation for fixed income instruments.
//!
//! This crate provides:
//!
//! - **Roll Conventions**: day-of-month, end-of-month and start-of-month grids
//! - **Periods**: adjusted and unadjusted boundaries, regularity and year fractions
//! - **Schedules**: regular grids with optional front and back stubs
//! - **Configuration**: JSON descriptions of schedules and their calendars
//!
//! ## Example
//!
//! ```rust
//! use accrual_core::prelude::*;
//! use accrual_schedule::prelude::*;
//!
//! let calendar = BusinessDayCalendar::from_strings(["2026-02-16"], "1111100").unwrap();
//! let schedule = Schedule::of(
//!     Date::from_ymd(2025, 8, 15).unwrap(),
//!     Date::from_ymd(2027, 8, 15).unwrap(),
//!     Tenor::months(6),
//!     calendar,
//!     BusinessDayConvention::Following,
//!     None,
//!     None,
//!     false,
//!     false,
//! )
//! .unwrap();
//!
//! assert_eq!(schedule.len(), 4);
//! assert_eq!(schedule.roll_convention(), RollConvention::DayOfMonth(15));
//!
//! // Feb 15 2026 is a Sunday and Feb 16 a holiday
//! assert_eq!(schedule.periods()[1].start(), Date::from_ymd(2026, 2, 17).unwrap());
//!
//! let total: f64 = schedule.year_fractions(&Act360, false).iter().sum();
//! assert!((total - 730.0 / 360.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod error;
pub mod period;
pub mod roll;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::ScheduleConfig;
    pub use crate::error::{ScheduleError, ScheduleResult};
    pub use crate::period::Period;
    pub use crate::roll::RollConvention;
    pub use crate::schedule::{Schedule, ScheduleBuilder};
}

pub use config::ScheduleConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use period::Period;
pub use roll::RollConvention;
pub use schedule::{Schedule, ScheduleBuilder};
