//! Records exchanged with the GoBarber API.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in provider, as returned by `/sessions`, `/profile` and `/users/avatar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Customer attached to an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A booking on the provider's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub user: Customer,
}

impl Appointment {
    /// Hour of day of the appointment in `tz`.
    pub fn local_hour<Tz: TimeZone>(&self, tz: &Tz) -> u32 {
        self.date.with_timezone(tz).hour()
    }

    /// Display time (`HH:MM`) in `tz`.
    pub fn formatted_time<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date.with_timezone(tz).format("%H:%M").to_string()
    }
}

/// One entry of `/providers/{id}/month-availability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityDay {
    pub day: u32,
    pub available: bool,
}
