use anyhow::Result;
use gobarber_core::flows::{ResetPasswordData, ResetPasswordFlow};

use super::{App, report};
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, token: &str) -> Result<()> {
    let data = ResetPasswordData {
        new_password: rpassword::prompt_password("New password: ")?,
        new_password_confirmation: rpassword::prompt_password("Confirm password: ")?,
    };

    let api = app.api()?;
    let mut flow = ResetPasswordFlow::new(&api);
    let result = with_spinner("Resetting password...", flow.submit(&data, token)).await;

    report(&result, ResetPasswordFlow::notification(&result))?;
    println!("\nSign in with your new password: `gobarber sign-in <email>`");
    Ok(())
}
