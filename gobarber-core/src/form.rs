//! Form submission state machine and user-facing notifications.
//!
//! `Idle -> Validating -> Submitting -> Succeeded | Failed`, or
//! `Validating -> Invalid` when the schema rejects the record, in which case
//! no request is sent.

use std::future::Future;

use thiserror::Error;
use tracing::warn;

use crate::error::{GoBarberError, GoBarberResult};
use crate::validation::{FormRecord, Schema, ValidationErrors};

#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
    Invalid(ValidationErrors),
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("{0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Remote(#[from] GoBarberError),
}

impl FormError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormError::Invalid(errors) => Some(errors),
            FormError::Remote(_) => None,
        }
    }
}

pub struct Form<R> {
    schema: Schema<R>,
    phase: FormPhase,
}

impl<R: FormRecord + 'static> Form<R> {
    pub fn new(schema: Schema<R>) -> Self {
        Form {
            schema,
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Validate `record`, then run `send` if it is valid.
    pub async fn submit<T, F, Fut>(&mut self, record: &R, send: F) -> Result<T, FormError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = GoBarberResult<T>>,
    {
        self.phase = FormPhase::Validating;

        if let Err(errors) = self.schema.validate(record) {
            self.phase = FormPhase::Invalid(errors.clone());
            return Err(FormError::Invalid(errors));
        }

        self.phase = FormPhase::Submitting;

        match send().await {
            Ok(value) => {
                self.phase = FormPhase::Succeeded;
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "Form submission failed");
                self.phase = FormPhase::Failed;
                Err(FormError::Remote(e))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A message shown to the user after an action, like a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: &str, description: Option<&str>) -> Self {
        Notification {
            kind,
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    pub fn success(title: &str, description: &str) -> Self {
        Self::new(NotificationKind::Success, title, Some(description))
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self::new(NotificationKind::Error, title, Some(description))
    }

    pub fn info(title: &str, description: &str) -> Self {
        Self::new(NotificationKind::Info, title, Some(description))
    }
}

/// Notification for a finished submission. Validation failures are reported
/// per field instead, so they yield none.
pub fn notify<T>(
    result: &Result<T, FormError>,
    on_success: impl FnOnce() -> Notification,
    on_failure: impl FnOnce() -> Notification,
) -> Option<Notification> {
    match result {
        Ok(_) => Some(on_success()),
        Err(FormError::Invalid(_)) => None,
        Err(FormError::Remote(_)) => Some(on_failure()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Email(String);

    impl FormRecord for Email {
        fn value(&self, _field: &str) -> &str {
            &self.0
        }
    }

    fn form() -> Form<Email> {
        Form::new(Schema::new().field("email", |f| f.required("E-mail required")))
    }

    #[tokio::test]
    async fn invalid_record_never_sends() {
        let mut form = form();
        let sent = Cell::new(false);
        let flag = &sent;

        let result = form
            .submit(&Email(String::new()), move || async move {
                flag.set(true);
                Ok(())
            })
            .await;

        assert!(!sent.get());
        let errors = result.unwrap_err().validation_errors().cloned().unwrap();
        assert_eq!(errors.get("email"), Some("E-mail required"));
        assert_eq!(form.phase(), &FormPhase::Invalid(errors));
    }

    #[tokio::test]
    async fn valid_record_is_sent() {
        let mut form = form();
        assert_eq!(form.phase(), &FormPhase::Idle);

        let result = form.submit(&Email("a@b.com".into()), || async { Ok(42) }).await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(form.phase(), &FormPhase::Succeeded);
    }

    #[tokio::test]
    async fn remote_failure_is_reported() {
        let mut form = form();

        let result: Result<(), _> = form
            .submit(&Email("a@b.com".into()), || async {
                Err(GoBarberError::Api { status: 500, message: "boom".into() })
            })
            .await;

        assert!(matches!(result, Err(FormError::Remote(GoBarberError::Api { status: 500, .. }))));
        assert_eq!(form.phase(), &FormPhase::Failed);
    }

    #[test]
    fn notify_picks_generic_error_for_remote_failures() {
        let ok: Result<(), FormError> = Ok(());
        let invalid: Result<(), FormError> = Err(FormError::Invalid(ValidationErrors::default()));
        let remote: Result<(), FormError> = Err(FormError::Remote(GoBarberError::NotSignedIn));

        let success = || Notification::success("Done", "It worked");
        let failure = || Notification::error("Oops", "Try again");

        assert_eq!(notify(&ok, success, failure).unwrap().kind, NotificationKind::Success);
        assert_eq!(notify(&invalid, success, failure), None);
        assert_eq!(notify(&remote, success, failure).unwrap().kind, NotificationKind::Error);
    }
}
