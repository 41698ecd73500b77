//! Calendar months and day-selection rules for the provider dashboard.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::MonthAvailabilityDay;

/// A calendar month, the unit month availability is fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based month number, as sent to the API.
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(CalendarMonth { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        CalendarMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Concrete date for a day number, or None if the month has no such day.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            CalendarMonth { year: self.year + 1, month: 1 }
        } else {
            CalendarMonth { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            CalendarMonth { year: self.year - 1, month: 12 }
        } else {
            CalendarMonth { year: self.year, month: self.month - 1 }
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Dates in `month` explicitly marked unavailable.
///
/// Days missing from `availability` stay enabled, and day numbers the month
/// doesn't have are dropped instead of rolling into the next month.
pub fn disabled_days(month: CalendarMonth, availability: &[MonthAvailabilityDay]) -> Vec<NaiveDate> {
    availability
        .iter()
        .filter(|entry| !entry.available)
        .filter_map(|entry| month.day(entry.day))
        .collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A day can be picked on the calendar if it's a weekday the provider hasn't blocked.
pub fn is_selectable(date: NaiveDate, disabled: &[NaiveDate]) -> bool {
    !is_weekend(date) && !disabled.contains(&date)
}
