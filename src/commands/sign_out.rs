use anyhow::Result;
use owo_colors::OwoColorize;

use super::App;

pub fn run(app: &App) -> Result<()> {
    if app.sessions.sign_out()? {
        println!("Signed out.");
    } else {
        println!("{}", "Not signed in.".dimmed());
    }
    Ok(())
}
