use anyhow::Result;
use chrono::{NaiveDate, Utc};
use gobarber_core::calendar::CalendarMonth;
use gobarber_core::dashboard::Dashboard;
use gobarber_core::form::Notification;
use gobarber_core::loader::Loadable;
use owo_colors::OwoColorize;

use super::App;
use crate::render::{Render, render_disabled_days};
use crate::utils::tui::create_spinner;

pub async fn run(app: &App, date: Option<NaiveDate>) -> Result<()> {
    let (session, api) = app.signed_in()?;
    let tz = app.config.timezone()?;
    let now = Utc::now();
    let today = now.with_timezone(&tz).date_naive();

    let mut dashboard = Dashboard::new(session.user.id.clone(), today);
    let spinner = create_spinner("Loading schedule...");

    match date {
        None => dashboard.refresh(&api).await,
        Some(date) => {
            if !dashboard.change_month(CalendarMonth::of(date)) {
                spinner.finish_and_clear();
                anyhow::bail!("{date} is in a past month");
            }

            // Availability decides whether the day can be picked at all.
            dashboard.refresh_availability(&api).await;
            if !dashboard.select_day(date) {
                spinner.finish_and_clear();
                anyhow::bail!("{date} is not available (weekends and blocked days can't be selected)");
            }
            dashboard.refresh_schedule(&api).await;
        }
    }

    spinner.finish_and_clear();

    if let Loadable::Failed(message) = dashboard.schedule() {
        let notification = Notification::error(
            "Could not load appointments",
            "An error occurred while loading your schedule, please try again",
        );
        println!("{}", notification.render());
        anyhow::bail!("{message}");
    }

    let Some(view) = dashboard.view(now, &tz, app.config.language) else {
        anyhow::bail!("Schedule was not loaded");
    };

    println!("Welcome, {}\n", session.user.name.bold());
    println!("{}", view.render());

    println!();
    match dashboard.availability() {
        Loadable::Loaded(_) => {
            println!("{}", render_disabled_days(dashboard.month(), &dashboard.disabled_days()))
        }
        Loadable::Failed(message) => {
            println!("{}", format!("Could not load month availability: {message}").dimmed())
        }
        Loadable::Idle | Loadable::Loading => {}
    }

    Ok(())
}
