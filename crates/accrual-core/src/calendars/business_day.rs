//! Holiday-set business day calendar.
//!
//! A [`BusinessDayCalendar`] is a weekly pattern plus an explicit list of
//! holiday dates, supplied by the caller. It can be built programmatically
//! or loaded from JSON.
//!
//! # Example
//!
//! ```
//! use accrual_core::calendars::{BusinessDayCalendar, Calendar};
//! use accrual_core::types::Date;
//!
//! let cal = BusinessDayCalendar::from_strings(["2025-01-01", "2025-12-25"], "1111100").unwrap();
//!
//! assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 1).unwrap()));
//! assert!(cal.is_business_day(Date::from_ymd(2025, 1, 2).unwrap()));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use super::{Calendar, Weekmask};
use crate::error::{AccrualError, AccrualResult};
use crate::types::Date;

const DEFAULT_NAME: &str = "Custom";

/// An immutable business day calendar: weekmask plus distinct holidays.
///
/// A date is a business day iff its weekday is set in the weekmask and it
/// is not a holiday. All validation happens at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarData", into = "CalendarData")]
pub struct BusinessDayCalendar {
    name: String,
    weekmask: Weekmask,
    holidays: BTreeSet<Date>,
}

impl BusinessDayCalendar {
    /// Creates a calendar from holiday dates and a weekmask.
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::CalendarError` if a holiday appears twice.
    pub fn new(holidays: impl IntoIterator<Item = Date>, weekmask: Weekmask) -> AccrualResult<Self> {
        let mut set = BTreeSet::new();
        for date in holidays {
            if !set.insert(date) {
                return Err(AccrualError::calendar(format!("duplicate holiday {date}")));
            }
        }

        Ok(Self {
            name: DEFAULT_NAME.to_string(),
            weekmask,
            holidays: set,
        })
    }

    /// Creates a calendar from ISO holiday strings and a weekmask string.
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::CalendarError` on a malformed weekmask, an
    /// unparsable holiday, or a duplicate holiday.
    pub fn from_strings<I, S>(holidays: I, weekmask: &str) -> AccrualResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let weekmask: Weekmask = weekmask.parse()?;
        let dates = holidays
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Date::parse(s)
                    .map_err(|e| AccrualError::calendar(format!("invalid holiday '{s}': {e}")))
            })
            .collect::<AccrualResult<Vec<_>>>()?;
        Self::new(dates, weekmask)
    }

    /// Monday to Friday, no holidays.
    #[must_use]
    pub fn weekends_only() -> Self {
        Self {
            name: "Weekend Only".to_string(),
            weekmask: Weekmask::WEEKDAYS,
            holidays: BTreeSet::new(),
        }
    }

    /// Returns the calendar with the given display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Load a calendar from JSON data.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// {
    ///   "name": "SIFMA",
    ///   "weekmask": "1111100",
    ///   "holidays": ["2025-01-01", "2025-12-25"]
    /// }
    /// ```
    pub fn from_json(json: &str) -> AccrualResult<Self> {
        let data: CalendarData = serde_json::from_str(json)
            .map_err(|e| AccrualError::calendar(format!("Failed to parse JSON: {e}")))?;
        data.build()
    }

    /// Load a calendar from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AccrualResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AccrualError::calendar(format!("Failed to read file: {e}")))?;
        Self::from_json(&content)
    }

    /// Export calendar data to a serializable struct.
    #[must_use]
    pub fn to_calendar_data(&self) -> CalendarData {
        CalendarData {
            name: self.name.clone(),
            weekmask: self.weekmask.to_string(),
            holidays: self.holidays.iter().map(ToString::to_string).collect(),
        }
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> AccrualResult<String> {
        serde_json::to_string_pretty(&self.to_calendar_data())
            .map_err(|e| AccrualError::calendar(format!("Failed to serialize calendar: {e}")))
    }

    /// Returns the weekmask.
    #[must_use]
    pub fn weekmask(&self) -> Weekmask {
        self.weekmask
    }

    /// Returns the holidays in ascending order.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }

    /// Number of holidays.
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if `date` is in the holiday set, regardless of weekday.
    #[must_use]
    pub fn is_listed_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

impl Default for BusinessDayCalendar {
    fn default() -> Self {
        Self::weekends_only()
    }
}

impl Calendar for BusinessDayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.weekmask.is_business_weekday(date.weekday()) && !self.holidays.contains(&date)
    }
}

/// Calendar data structure for JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarData {
    /// Name of the calendar
    #[serde(default = "default_name")]
    pub name: String,

    /// Weekmask string, defaults to Monday to Friday
    #[serde(default = "default_weekmask")]
    pub weekmask: String,

    /// List of holiday dates in YYYY-MM-DD format
    #[serde(default)]
    pub holidays: Vec<String>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_weekmask() -> String {
    Weekmask::WEEKDAYS.to_string()
}

impl CalendarData {
    /// Create a new CalendarData with the default weekmask and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weekmask: default_weekmask(),
            holidays: Vec::new(),
        }
    }

    /// Set the weekmask string.
    #[must_use]
    pub fn with_weekmask(mut self, weekmask: impl Into<String>) -> Self {
        self.weekmask = weekmask.into();
        self
    }

    /// Add multiple holiday date strings.
    #[must_use]
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.holidays.extend(dates.into_iter().map(Into::into));
        self
    }

    /// Build into a validated BusinessDayCalendar.
    pub fn build(self) -> AccrualResult<BusinessDayCalendar> {
        let calendar = BusinessDayCalendar::from_strings(&self.holidays, &self.weekmask)?
            .with_name(self.name);
        log::debug!(
            "loaded calendar '{}' ({} holidays, weekmask {})",
            calendar.name,
            calendar.holiday_count(),
            calendar.weekmask
        );
        Ok(calendar)
    }
}

impl TryFrom<CalendarData> for BusinessDayCalendar {
    type Error = AccrualError;

    fn try_from(data: CalendarData) -> Result<Self, Self::Error> {
        data.build()
    }
}

impl From<BusinessDayCalendar> for CalendarData {
    fn from(calendar: BusinessDayCalendar) -> Self {
        calendar.to_calendar_data()
    }
}
