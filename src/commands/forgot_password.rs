use anyhow::Result;
use gobarber_core::flows::{ForgotPasswordData, ForgotPasswordFlow};

use super::{App, report};
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, email: String) -> Result<()> {
    let api = app.api()?;
    let mut flow = ForgotPasswordFlow::new(&api);

    let data = ForgotPasswordData { email };
    let result = with_spinner("Requesting password recovery...", flow.submit(&data)).await;

    report(&result, ForgotPasswordFlow::notification(&result))?;
    println!("\nThen run `gobarber reset-password --token <token>` with the token from the e-mail.");
    Ok(())
}
