//! Schedule configuration loaded from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use accrual_core::calendars::{BusinessDayCalendar, BusinessDayConvention, CalendarData};
use accrual_core::{Date, Tenor};

use crate::error::{ScheduleError, ScheduleResult};
use crate::schedule::Schedule;

/// Serializable description of a schedule.
///
/// # JSON Format
///
/// ```json
/// {
///   "effective": "2025-08-15",
///   "termination": "2027-08-15",
///   "tenor": "6M",
///   "convention": "following",
///   "calendar": { "name": "SIFMA", "weekmask": "1111100", "holidays": ["2025-01-01"] },
///   "front_stub": null,
///   "eom": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Start date of the schedule.
    pub effective: Date,

    /// End date of the schedule.
    pub termination: Date,

    /// Regular interval, e.g. `"6M"`.
    pub tenor: Tenor,

    /// Payment calendar.
    #[serde(default = "weekends_only")]
    pub calendar: CalendarData,

    /// Business day convention.
    #[serde(default)]
    pub convention: BusinessDayConvention,

    /// First regular date, if the front period is a stub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_stub: Option<Date>,

    /// Last regular date, if the back period is a stub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_stub: Option<Date>,

    /// Roll to the end of the month.
    #[serde(default)]
    pub eom: bool,

    /// Roll to the start of the month.
    #[serde(default)]
    pub bom: bool,
}

fn weekends_only() -> CalendarData {
    BusinessDayCalendar::weekends_only().to_calendar_data()
}

impl ScheduleConfig {
    /// Creates a config with a weekends-only calendar, Following adjustment
    /// and no stubs.
    pub fn new(effective: Date, termination: Date, tenor: Tenor) -> Self {
        Self {
            effective,
            termination,
            tenor,
            calendar: weekends_only(),
            convention: BusinessDayConvention::default(),
            front_stub: None,
            back_stub: None,
            eom: false,
            bom: false,
        }
    }

    /// Sets the payment calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarData) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScheduleError::config(format!("Failed to parse JSON: {e}")))
    }

    /// Loads a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScheduleError::config(format!("Failed to read file: {e}")))?;
        Self::from_json(&content)
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> ScheduleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScheduleError::config(format!("Failed to serialize config: {e}")))
    }

    /// Builds the calendar and generates the schedule.
    pub fn build(&self) -> ScheduleResult<Schedule> {
        let calendar = self.calendar.clone().build()?;
        Schedule::of(
            self.effective,
            self.termination,
            self.tenor,
            calendar,
            self.convention,
            self.front_stub,
            self.back_stub,
            self.eom,
            self.bom,
        )
    }
}
