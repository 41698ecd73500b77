//! Profile and avatar updates for the signed-in provider.

use std::path::Path;

use crate::api::{ApiClient, ProfileUpdate};
use crate::error::{GoBarberError, GoBarberResult};
use crate::form::{Form, FormError, FormPhase, Notification, notify};
use crate::model::User;
use crate::session::SessionStore;
use crate::validation::{FormRecord, Schema};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

impl ProfileData {
    /// Form prefilled with the user's current name and e-mail.
    pub fn from_user(user: &User) -> Self {
        ProfileData {
            name: user.name.clone(),
            email: user.email.clone(),
            ..ProfileData::default()
        }
    }

    pub fn changes_password(&self) -> bool {
        !self.old_password.is_empty()
    }

    pub fn to_update(&self) -> ProfileUpdate {
        let password = |value: &String| self.changes_password().then(|| value.clone());

        ProfileUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            old_password: password(&self.old_password),
            new_password: password(&self.new_password),
            new_password_confirmation: password(&self.new_password_confirmation),
        }
    }
}

impl FormRecord for ProfileData {
    fn value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "old_password" => &self.old_password,
            "new_password" => &self.new_password,
            "new_password_confirmation" => &self.new_password_confirmation,
            _ => "",
        }
    }
}

pub fn profile_schema() -> Schema<ProfileData> {
    Schema::new()
        .field("name", |f| f.required("Name is required"))
        .field("email", |f| {
            f.required("E-mail is required").email("Enter a valid e-mail")
        })
        .field("new_password", |f| {
            f.when(ProfileData::changes_password, |f| {
                f.required("Required field").min_len(6, "At least 6 characters")
            })
        })
        .field("new_password_confirmation", |f| {
            f.when(ProfileData::changes_password, |f| f.required("Required field"))
                .matches("new_password", "Password confirmation doesn't match")
        })
}

pub struct ProfileFlow<'a> {
    api: &'a ApiClient,
    sessions: &'a SessionStore,
    form: Form<ProfileData>,
}

impl<'a> ProfileFlow<'a> {
    pub fn new(api: &'a ApiClient, sessions: &'a SessionStore) -> Self {
        ProfileFlow {
            api,
            sessions,
            form: Form::new(profile_schema()),
        }
    }

    pub fn phase(&self) -> &FormPhase {
        self.form.phase()
    }

    /// Validate and send the update; on success the stored user is replaced
    /// with the server's record. Without a stored session nothing is sent.
    pub async fn submit(&mut self, data: &ProfileData) -> Result<User, FormError> {
        let (api, sessions) = (self.api, self.sessions);
        let update = data.to_update();

        self.form
            .submit(data, move || async move {
                sessions.require()?;
                let user = api.update_profile(&update).await?;
                sessions.update_user(user.clone())?;
                Ok::<_, GoBarberError>(user)
            })
            .await
    }

    pub fn notification(result: &Result<User, FormError>) -> Option<Notification> {
        notify(
            result,
            || Notification::success("Profile updated!", "Your profile information was updated successfully"),
            || Notification::error("Update failed", "An error occurred while updating your profile, please try again"),
        )
    }
}

/// Upload a new avatar and store the returned user.
pub async fn update_avatar(api: &ApiClient, sessions: &SessionStore, file: &Path) -> GoBarberResult<User> {
    let user = api.update_avatar(file).await?;
    sessions.update_user(user.clone())?;
    Ok(user)
}

pub fn avatar_notification(result: &GoBarberResult<User>) -> Notification {
    match result {
        Ok(_) => Notification::success("Avatar updated!", "Your profile picture was changed"),
        Err(_) => Notification::error("Avatar update failed", "Could not change your profile picture, please try again"),
    }
}
