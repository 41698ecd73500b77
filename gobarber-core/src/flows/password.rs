//! Forgot-password and reset-password forms.

use crate::api::{ApiClient, ResetPasswordRequest};
use crate::form::{Form, FormError, FormPhase, Notification, notify};
use crate::validation::{FormRecord, Schema};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordData {
    pub email: String,
}

impl FormRecord for ForgotPasswordData {
    fn value(&self, field: &str) -> &str {
        match field {
            "email" => &self.email,
            _ => "",
        }
    }
}

pub fn forgot_password_schema() -> Schema<ForgotPasswordData> {
    Schema::new().field("email", |f| {
        f.required("E-mail is required").email("Enter a valid e-mail")
    })
}

pub struct ForgotPasswordFlow<'a> {
    api: &'a ApiClient,
    form: Form<ForgotPasswordData>,
}

impl<'a> ForgotPasswordFlow<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        ForgotPasswordFlow {
            api,
            form: Form::new(forgot_password_schema()),
        }
    }

    pub fn phase(&self) -> &FormPhase {
        self.form.phase()
    }

    pub async fn submit(&mut self, data: &ForgotPasswordData) -> Result<(), FormError> {
        let api = self.api;
        let email = data.email.clone();

        self.form
            .submit(data, move || async move { api.forgot_password(&email).await })
            .await
    }

    pub fn notification(result: &Result<(), FormError>) -> Option<Notification> {
        notify(
            result,
            || {
                Notification::success(
                    "Recovery e-mail sent",
                    "We sent you an e-mail to confirm the password recovery, check your inbox",
                )
            },
            || {
                Notification::error(
                    "Password recovery failed",
                    "An error occurred while requesting the password recovery, please try again",
                )
            },
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordData {
    pub new_password: String,
    pub new_password_confirmation: String,
}

impl FormRecord for ResetPasswordData {
    fn value(&self, field: &str) -> &str {
        match field {
            "new_password" => &self.new_password,
            "new_password_confirmation" => &self.new_password_confirmation,
            _ => "",
        }
    }
}

pub fn reset_password_schema() -> Schema<ResetPasswordData> {
    Schema::new()
        .field("new_password", |f| f.required("Password is required"))
        .field("new_password_confirmation", |f| {
            f.matches("new_password", "Passwords don't match")
        })
}

pub struct ResetPasswordFlow<'a> {
    api: &'a ApiClient,
    form: Form<ResetPasswordData>,
}

impl<'a> ResetPasswordFlow<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        ResetPasswordFlow {
            api,
            form: Form::new(reset_password_schema()),
        }
    }

    pub fn phase(&self) -> &FormPhase {
        self.form.phase()
    }

    /// Reset the password using the token from the recovery e-mail.
    pub async fn submit(&mut self, data: &ResetPasswordData, token: &str) -> Result<(), FormError> {
        let api = self.api;
        let request = ResetPasswordRequest {
            new_password: data.new_password.clone(),
            new_password_confirmation: data.new_password_confirmation.clone(),
            token: token.to_string(),
        };

        self.form
            .submit(data, move || async move { api.reset_password(&request).await })
            .await
    }

    pub fn notification(result: &Result<(), FormError>) -> Option<Notification> {
        notify(
            result,
            || Notification::success("Password reset", "Your password was reset successfully"),
            || {
                Notification::error(
                    "Could not reset password",
                    "An error occurred while resetting your password, please try again",
                )
            },
        )
    }
}
