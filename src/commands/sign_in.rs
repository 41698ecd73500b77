use anyhow::Result;
use gobarber_core::flows::{SignInData, SignInFlow};

use super::{App, report};
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, email: String) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")?;
    let api = app.api()?;
    let mut flow = SignInFlow::new(&api, &app.sessions);

    let data = SignInData { email, password };
    let result = with_spinner("Signing in...", flow.submit(&data)).await;

    report(&result, SignInFlow::notification(&result))?;

    if let Ok(session) = &result {
        println!("\nSigned in as {}. Run `gobarber dashboard` to see your schedule.", session.user.name);
    }

    Ok(())
}
