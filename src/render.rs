//! TUI rendering traits for gobarber types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to gobarber-core types using owo_colors.

use chrono::NaiveDate;
use gobarber_core::calendar::CalendarMonth;
use gobarber_core::form::{Notification, NotificationKind};
use gobarber_core::schedule::{ScheduleView, ScheduledAppointment};
use gobarber_core::validation::ValidationErrors;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Notification {
    fn render(&self) -> String {
        let title = match self.kind {
            NotificationKind::Success => format!("✔ {}", self.title).green().to_string(),
            NotificationKind::Error => format!("✘ {}", self.title).red().to_string(),
            NotificationKind::Info => format!("ℹ {}", self.title).blue().to_string(),
        };

        match &self.description {
            Some(description) => format!("{}\n  {}", title.bold(), description.dimmed()),
            None => title.bold().to_string(),
        }
    }
}

impl Render for ValidationErrors {
    fn render(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("  {} {}", format!("{field}:").red(), message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for ScheduledAppointment {
    fn render(&self) -> String {
        format!("{:>7}  {}", self.time, self.appointment.user.name)
    }
}

impl Render for ScheduleView {
    fn render(&self) -> String {
        let mut lines = vec!["Scheduled appointments".bold().to_string()];

        let mut date_line = Vec::new();
        if self.is_today {
            date_line.push("Today".yellow().to_string());
        }
        date_line.push(self.day_label.clone());
        date_line.push(self.weekday_label.clone());
        lines.push(date_line.join(" | "));

        // Only meaningful while the day is still running.
        if self.is_today {
            if let Some(next) = &self.next {
                lines.push(String::new());
                lines.push("Next appointment".bold().to_string());
                lines.push(format!("  {} {}", next.appointment.user.name, next.time.yellow()));
            }
        }

        render_period("Morning", &self.morning, &mut lines);
        render_period("Afternoon", &self.afternoon, &mut lines);

        lines.join("\n")
    }
}

fn render_period(title: &str, appointments: &[ScheduledAppointment], lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push(title.bold().to_string());

    if appointments.is_empty() {
        lines.push(format!("  {}", "No appointments in this period".dimmed()));
        return;
    }

    lines.extend(appointments.iter().map(|a| format!("  {}", a.render())));
}

/// Disabled days of a month, as a compact day list ("3, 10, 22").
pub fn render_disabled_days(month: CalendarMonth, days: &[NaiveDate]) -> String {
    use chrono::Datelike;

    if days.is_empty() {
        return format!("{} {}", format!("{month}:").dimmed(), "every weekday available".dimmed());
    }

    let list: Vec<String> = days.iter().map(|d| d.day().to_string()).collect();
    format!("{} {}", format!("{month} unavailable:").dimmed(), list.join(", ").red())
}
