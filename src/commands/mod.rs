pub mod avatar;
pub mod dashboard;
pub mod forgot_password;
pub mod profile;
pub mod reset_password;
pub mod sign_in;
pub mod sign_out;

use anyhow::Result;
use gobarber_core::api::ApiClient;
use gobarber_core::config::GoBarberConfig;
use gobarber_core::form::{FormError, Notification};
use gobarber_core::session::{Session, SessionStore};

use crate::render::Render;

/// Settings and stores shared by every command.
pub struct App {
    pub config: GoBarberConfig,
    pub sessions: SessionStore,
}

impl App {
    pub fn load() -> Result<Self> {
        Ok(App {
            config: GoBarberConfig::load()?,
            sessions: SessionStore::default_location()?,
        })
    }

    pub fn api(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(self.config.api_url()?))
    }

    /// The stored session and a client authenticated with its token.
    pub fn signed_in(&self) -> Result<(Session, ApiClient)> {
        let session = self.sessions.require()?;
        let api = self.api()?.with_token(session.token.clone());
        Ok((session, api))
    }
}

/// Print the outcome of a form submission. Field errors are listed under
/// their field; any failure makes the command exit with an error.
pub fn report<T>(result: &Result<T, FormError>, notification: Option<Notification>) -> Result<()> {
    if let Some(notification) = notification {
        println!("{}", notification.render());
    }

    match result {
        Ok(_) => Ok(()),
        Err(FormError::Invalid(errors)) => {
            println!("{}", errors.render());
            anyhow::bail!("Please fix the fields above and try again")
        }
        Err(FormError::Remote(_)) => anyhow::bail!("Nothing was changed"),
    }
}
