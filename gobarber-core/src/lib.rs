//! Core library for the GoBarber provider client.
//!
//! - `api`: typed HTTP client for the GoBarber API
//! - `schedule`, `calendar`, `dashboard`: view state of the provider's schedule
//! - `validation`, `form`, `flows`: declarative forms and their submission
//! - `session`, `config`: persisted sign-in and client settings

pub mod api;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod flows;
pub mod form;
pub mod loader;
pub mod locale;
pub mod model;
pub mod schedule;
pub mod session;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use error::{GoBarberError, GoBarberResult};
pub use model::*;
