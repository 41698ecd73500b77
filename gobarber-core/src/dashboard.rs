//! Provider dashboard: selected day, displayed month and the data loaded for them.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::api::ApiClient;
use crate::calendar::{self, CalendarMonth};
use crate::error::GoBarberResult;
use crate::loader::{Loadable, Loader, Ticket};
use crate::locale::Language;
use crate::model::{Appointment, MonthAvailabilityDay};
use crate::schedule::ScheduleView;

pub struct Dashboard {
    provider_id: String,
    today: NaiveDate,
    selected: NaiveDate,
    month: CalendarMonth,
    schedule: Loader<Vec<Appointment>>,
    availability: Loader<Vec<MonthAvailabilityDay>>,
}

impl Dashboard {
    /// Starts on today's date and month, like the web dashboard.
    pub fn new(provider_id: impl Into<String>, today: NaiveDate) -> Self {
        Dashboard {
            provider_id: provider_id.into(),
            today,
            selected: today,
            month: CalendarMonth::of(today),
            schedule: Loader::new("schedule"),
            availability: Loader::new("month-availability"),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn schedule(&self) -> &Loadable<Vec<Appointment>> {
        self.schedule.state()
    }

    pub fn availability(&self) -> &Loadable<Vec<MonthAvailabilityDay>> {
        self.availability.state()
    }

    /// Disabled dates of the displayed month. Empty until availability is loaded.
    pub fn disabled_days(&self) -> Vec<NaiveDate> {
        self.availability
            .state()
            .value()
            .map(|days| calendar::disabled_days(self.month, days))
            .unwrap_or_default()
    }

    /// Only weekdays of the displayed month that availability doesn't block.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.month.contains(date) && calendar::is_selectable(date, &self.disabled_days())
    }

    /// Select a day if the calendar allows it. Returns whether the selection changed.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        if !self.is_selectable(date) {
            debug!(%date, "Ignoring selection of unavailable day");
            return false;
        }
        self.selected = date;
        true
    }

    /// Show another month. Months before the current one can't be displayed.
    pub fn change_month(&mut self, month: CalendarMonth) -> bool {
        if month < CalendarMonth::of(self.today) {
            return false;
        }
        if month != self.month {
            self.month = month;
            self.availability.reset();
        }
        true
    }

    pub fn begin_schedule_fetch(&mut self) -> (Ticket, NaiveDate) {
        (self.schedule.begin(), self.selected)
    }

    pub fn finish_schedule_fetch(&mut self, ticket: Ticket, result: GoBarberResult<Vec<Appointment>>) -> bool {
        self.schedule.finish(ticket, result)
    }

    pub fn begin_availability_fetch(&mut self) -> (Ticket, CalendarMonth) {
        (self.availability.begin(), self.month)
    }

    pub fn finish_availability_fetch(
        &mut self,
        ticket: Ticket,
        result: GoBarberResult<Vec<MonthAvailabilityDay>>,
    ) -> bool {
        self.availability.finish(ticket, result)
    }

    pub async fn refresh_schedule(&mut self, api: &ApiClient) {
        let (ticket, date) = self.begin_schedule_fetch();
        let result = api.day_schedule(date).await;
        self.finish_schedule_fetch(ticket, result);
    }

    pub async fn refresh_availability(&mut self, api: &ApiClient) {
        let (ticket, month) = self.begin_availability_fetch();
        let result = api.month_availability(&self.provider_id, month).await;
        self.finish_availability_fetch(ticket, result);
    }

    /// Fetch the selected day's schedule and the month's availability concurrently.
    pub async fn refresh(&mut self, api: &ApiClient) {
        let (schedule_ticket, date) = self.begin_schedule_fetch();
        let (availability_ticket, month) = self.begin_availability_fetch();

        let (appointments, availability) = tokio::join!(
            api.day_schedule(date),
            api.month_availability(&self.provider_id, month),
        );

        self.finish_schedule_fetch(schedule_ticket, appointments);
        self.finish_availability_fetch(availability_ticket, availability);
    }

    /// Derived schedule for the selected day, once its appointments are loaded.
    pub fn view<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz, language: Language) -> Option<ScheduleView>
    where
        Tz::Offset: std::fmt::Display,
    {
        let appointments = self.schedule.state().value()?;
        Some(ScheduleView::derive(appointments, self.selected, now, tz, language))
    }
}
