//! Client configuration at ~/.config/gobarber/config.toml

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GoBarberError, GoBarberResult};
use crate::locale::Language;

static DEFAULT_API_URL: &str = "http://localhost:3333";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Settings file, overridable with `GOBARBER_*` environment variables
/// (e.g. `GOBARBER_API_URL`).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GoBarberConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub language: Language,

    /// IANA zone used to bucket and print appointment times. Defaults to the system zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Default for GoBarberConfig {
    fn default() -> Self {
        GoBarberConfig {
            api_url: default_api_url(),
            language: Language::default(),
            timezone: None,
        }
    }
}

impl GoBarberConfig {
    pub fn config_dir() -> GoBarberResult<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| GoBarberError::Config("Could not determine config directory".into()))?
            .join("gobarber"))
    }

    pub fn config_path() -> GoBarberResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> GoBarberResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> GoBarberResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("GOBARBER"))
            .build()
            .map_err(|e| GoBarberError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GoBarberError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GoBarberResult<()> {
        let contents = format!(
            "\
# GoBarber client configuration

# Base URL of the GoBarber API:
# api_url = \"{}\"

# Language for dates (\"pt-BR\" or \"en-US\"):
# language = \"pt-BR\"

# Time zone for appointment times (defaults to the system zone):
# timezone = \"America/Sao_Paulo\"
",
            DEFAULT_API_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GoBarberError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GoBarberError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn api_url(&self) -> GoBarberResult<Url> {
        Ok(Url::parse(&self.api_url)?)
    }

    /// The configured zone, else the system zone, else UTC.
    pub fn timezone(&self) -> GoBarberResult<Tz> {
        match &self.timezone {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| GoBarberError::Config(format!("Invalid timezone '{name}': {e}"))),
            None => Ok(iana_time_zone::get_timezone()
                .ok()
                .and_then(|name| name.parse::<Tz>().ok())
                .unwrap_or(Tz::UTC)),
        }
    }
}
