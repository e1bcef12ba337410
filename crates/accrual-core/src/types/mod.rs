//! Domain types for schedule generation.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Tenor`]: Calendar interval between schedule dates

mod date;
mod tenor;

pub use date::Date;
pub use tenor::{Tenor, TenorUnit};
