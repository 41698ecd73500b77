//! Error types for the GoBarber client.

use thiserror::Error;

/// Errors that can occur in GoBarber client operations.
#[derive(Error, Debug)]
pub enum GoBarberError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Not signed in. Run `gobarber sign-in <email>` first")]
    NotSignedIn,

    #[error("Session error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for GoBarber operations.
pub type GoBarberResult<T> = Result<T, GoBarberError>;
