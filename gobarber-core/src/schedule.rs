//! Display-ready state of the provider's daily schedule.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::locale::Language;
use crate::model::Appointment;

/// Hour (in the display time zone) at which afternoon starts.
pub const AFTERNOON_START_HOUR: u32 = 12;

/// An appointment together with its formatted start time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledAppointment {
    pub appointment: Appointment,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleView {
    pub selected_date: NaiveDate,
    pub is_today: bool,
    pub day_label: String,
    pub weekday_label: String,
    pub next: Option<ScheduledAppointment>,
    pub morning: Vec<ScheduledAppointment>,
    pub afternoon: Vec<ScheduledAppointment>,
}

impl ScheduleView {
    pub fn derive<Tz: TimeZone>(
        appointments: &[Appointment],
        selected_date: NaiveDate,
        now: DateTime<Utc>,
        tz: &Tz,
        language: Language,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let scheduled = |a: &Appointment| ScheduledAppointment {
            appointment: a.clone(),
            time: a.formatted_time(tz),
        };

        let (morning, afternoon) = split_by_period(appointments, tz);

        ScheduleView {
            selected_date,
            is_today: now.with_timezone(tz).date_naive() == selected_date,
            day_label: language.day_label(selected_date),
            weekday_label: language.weekday_label(selected_date),
            next: next_appointment(appointments, now).map(scheduled),
            morning: morning.into_iter().map(scheduled).collect(),
            afternoon: afternoon.into_iter().map(scheduled).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }
}

/// First appointment, in list order, that starts strictly after `now`.
pub fn next_appointment(appointments: &[Appointment], now: DateTime<Utc>) -> Option<&Appointment> {
    appointments.iter().find(|a| a.date > now)
}

/// Split into (morning, afternoon) by local hour, keeping source order.
pub fn split_by_period<'a, Tz: TimeZone>(
    appointments: &'a [Appointment],
    tz: &Tz,
) -> (Vec<&'a Appointment>, Vec<&'a Appointment>) {
    appointments
        .iter()
        .partition(|a| a.local_hour(tz) < AFTERNOON_START_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;
    use chrono::FixedOffset;

    fn appointment(id: &str, y: i32, m: u32, d: u32, h: u32, min: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap(),
            user: Customer {
                name: format!("Customer {id}"),
                avatar_url: None,
            },
        }
    }

    fn march_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, 10).unwrap()
    }

    fn ids(list: &[ScheduledAppointment]) -> Vec<&str> {
        list.iter().map(|s| s.appointment.id.as_str()).collect()
    }

    #[test]
    fn empty_schedule_has_no_next_and_empty_buckets() {
        let now = Utc.with_ymd_and_hms(2021, 3, 10, 8, 0, 0).unwrap();
        let view = ScheduleView::derive(&[], march_10(), now, &Utc, Language::EnUs);

        assert!(view.next.is_none());
        assert!(view.morning.is_empty());
        assert!(view.afternoon.is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn split_at_noon_puts_every_appointment_in_one_bucket() {
        let appointments = vec![
            appointment("a", 2021, 3, 10, 8, 0),
            appointment("b", 2021, 3, 10, 11, 59),
            appointment("c", 2021, 3, 10, 12, 0),
            appointment("d", 2021, 3, 10, 17, 0),
            appointment("e", 2021, 3, 10, 9, 0),
        ];

        let (morning, afternoon) = split_by_period(&appointments, &Utc);
        let morning: Vec<_> = morning.iter().map(|a| a.id.as_str()).collect();
        let afternoon: Vec<_> = afternoon.iter().map(|a| a.id.as_str()).collect();

        assert_eq!(morning, vec!["a", "b", "e"]);
        assert_eq!(afternoon, vec!["c", "d"]);
    }

    #[test]
    fn split_uses_display_time_zone() {
        // 13:00 UTC is 10:00 at UTC-3
        let appointments = vec![appointment("a", 2021, 3, 10, 13, 0)];
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();

        let (morning, afternoon) = split_by_period(&appointments, &sao_paulo);
        assert_eq!(morning.len(), 1);
        assert!(afternoon.is_empty());

        let (morning, afternoon) = split_by_period(&appointments, &Utc);
        assert!(morning.is_empty());
        assert_eq!(afternoon.len(), 1);
    }

    #[test]
    fn next_is_first_future_in_list_order() {
        let appointments = vec![
            appointment("past", 2021, 3, 10, 8, 0),
            appointment("later", 2021, 3, 10, 16, 0),
            appointment("sooner", 2021, 3, 10, 14, 0),
        ];
        let now = Utc.with_ymd_and_hms(2021, 3, 10, 9, 0, 0).unwrap();

        assert_eq!(next_appointment(&appointments, now).unwrap().id, "later");
    }

    #[test]
    fn next_is_none_when_nothing_is_strictly_after_now() {
        let appointments = vec![
            appointment("a", 2021, 3, 10, 8, 0),
            appointment("b", 2021, 3, 10, 9, 0),
        ];
        let now = Utc.with_ymd_and_hms(2021, 3, 10, 9, 0, 0).unwrap();

        assert!(next_appointment(&appointments, now).is_none());
    }

    #[test]
    fn view_formats_times_and_labels() {
        let appointments = vec![
            appointment("a", 2021, 3, 10, 9, 0),
            appointment("b", 2021, 3, 10, 15, 30),
        ];
        let now = Utc.with_ymd_and_hms(2021, 3, 10, 10, 0, 0).unwrap();

        let view = ScheduleView::derive(&appointments, march_10(), now, &Utc, Language::EnUs);

        assert!(view.is_today);
        assert_eq!(view.day_label, "March 10");
        assert_eq!(view.weekday_label, "Wednesday");
        assert_eq!(ids(&view.morning), vec!["a"]);
        assert_eq!(ids(&view.afternoon), vec!["b"]);
        assert_eq!(view.afternoon[0].time, "15:30");

        let next = view.next.unwrap();
        assert_eq!(next.appointment.id, "b");
        assert_eq!(next.time, "15:30");
    }

    #[test]
    fn is_today_compares_in_display_zone() {
        // 01:00 UTC on the 11th is still the 10th at UTC-3
        let now = Utc.with_ymd_and_hms(2021, 3, 11, 1, 0, 0).unwrap();
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();

        let view = ScheduleView::derive(&[], march_10(), now, &sao_paulo, Language::EnUs);
        assert!(view.is_today);

        let view = ScheduleView::derive(&[], march_10(), now, &Utc, Language::EnUs);
        assert!(!view.is_today);
    }
}
