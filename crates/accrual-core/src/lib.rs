//! # Accrual Core
//!
//! Core types and primitives for the Accrual schedule generation library.
//!
//! This crate provides the building blocks schedule construction is made of:
//!
//! - **Types**: [`Date`] with month-aware arithmetic and [`Tenor`]
//! - **Business Day Calendars**: caller-supplied weekmask plus holiday set
//! - **Business Day Conventions**: following/preceding and their modified forms,
//!   applied through an [`Adjuster`](calendars::Adjuster)
//! - **Day Count Conventions**: the [`DayCount`](daycounts::DayCount) trait and ACT/360
//!
//! ## Example
//!
//! ```rust
//! use accrual_core::prelude::*;
//!
//! let cal = BusinessDayCalendar::from_strings(["2026-02-16"], "1111100").unwrap();
//! let adjuster = Adjuster::new(cal, BusinessDayConvention::Following);
//!
//! // Sunday, then a Monday holiday
//! let date = Date::from_ymd(2026, 2, 15).unwrap();
//! assert_eq!(adjuster.adjust(date).unwrap(), Date::from_ymd(2026, 2, 17).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::float_cmp)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        Adjuster, BusinessDayCalendar, BusinessDayConvention, Calendar, CalendarData, Weekmask,
    };
    pub use crate::daycounts::{Act360, DayCount, DayCountConvention};
    pub use crate::error::{AccrualError, AccrualResult};
    pub use crate::types::{Date, Tenor, TenorUnit};
}

// Re-export commonly used types at crate root
pub use error::{AccrualError, AccrualResult};
pub use types::{Date, Tenor, TenorUnit};
