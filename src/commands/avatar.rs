use std::path::Path;

use anyhow::Result;
use gobarber_core::flows::{avatar_notification, update_avatar};

use super::App;
use crate::render::Render;
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, file: &Path) -> Result<()> {
    let (_, api) = app.signed_in()?;

    let result = with_spinner("Uploading avatar...", update_avatar(&api, &app.sessions, file)).await;
    println!("{}", avatar_notification(&result).render());

    let user = result?;
    if let Some(url) = user.avatar_url {
        println!("  {url}");
    }
    Ok(())
}
