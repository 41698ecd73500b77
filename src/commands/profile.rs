use anyhow::Result;
use dialoguer::Input;
use gobarber_core::flows::{ProfileData, ProfileFlow};

use super::{App, report};
use crate::utils::tui::with_spinner;

pub async fn run(
    app: &App,
    name: Option<String>,
    email: Option<String>,
    change_password: bool,
) -> Result<()> {
    let (session, api) = app.signed_in()?;
    let mut data = ProfileData::from_user(&session.user);

    data.name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Name")
            .default(data.name.clone())
            .interact_text()?,
    };
    data.email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("E-mail")
            .default(data.email.clone())
            .interact_text()?,
    };

    if change_password {
        data.old_password = rpassword::prompt_password("Current password: ")?;
        data.new_password = rpassword::prompt_password("New password: ")?;
        data.new_password_confirmation = rpassword::prompt_password("Confirm new password: ")?;
    }

    let mut flow = ProfileFlow::new(&api, &app.sessions);
    let result = with_spinner("Updating profile...", flow.submit(&data)).await;

    report(&result, ProfileFlow::notification(&result))
}
