use crate::api::ApiClient;
use crate::error::GoBarberError;
use crate::form::{Form, FormError, FormPhase, Notification, notify};
use crate::session::{Session, SessionStore};
use crate::validation::{FormRecord, Schema};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

impl FormRecord for SignInData {
    fn value(&self, field: &str) -> &str {
        match field {
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

pub fn sign_in_schema() -> Schema<SignInData> {
    Schema::new()
        .field("email", |f| {
            f.required("E-mail is required").email("Enter a valid e-mail")
        })
        .field("password", |f| f.required("Password is required"))
}

pub struct SignInFlow<'a> {
    api: &'a ApiClient,
    sessions: &'a SessionStore,
    form: Form<SignInData>,
}

impl<'a> SignInFlow<'a> {
    pub fn new(api: &'a ApiClient, sessions: &'a SessionStore) -> Self {
        SignInFlow {
            api,
            sessions,
            form: Form::new(sign_in_schema()),
        }
    }

    pub fn phase(&self) -> &FormPhase {
        self.form.phase()
    }

    /// Authenticate and persist the returned token and user. Signing in only
    /// succeeds once the session is stored.
    pub async fn submit(&mut self, data: &SignInData) -> Result<Session, FormError> {
        let (api, sessions) = (self.api, self.sessions);
        let (email, password) = (data.email.clone(), data.password.clone());

        self.form
            .submit(data, move || async move {
                let response = api.create_session(&email, &password).await?;
                let session = Session {
                    token: response.token,
                    user: response.user,
                };
                sessions.save(&session)?;
                Ok::<_, GoBarberError>(session)
            })
            .await
    }

    pub fn notification(result: &Result<Session, FormError>) -> Option<Notification> {
        notify(
            result,
            || Notification::success("Welcome back!", "You are signed in"),
            || {
                Notification::error(
                    "Authentication failed",
                    "An error occurred while signing in, check your credentials",
                )
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    #[test]
    fn both_fields_are_required() {
        let errors = sign_in_schema().validate(&SignInData::default()).unwrap_err();
        assert_eq!(errors.get("email"), Some("E-mail is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[tokio::test]
    async fn successful_sign_in_stores_session() {
        let app = Router::new().route(
            "/sessions",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["password"], "123456");
                Json(json!({
                    "token": "jwt",
                    "user": { "id": "u1", "name": "Diego", "email": body["email"], "avatar_url": null }
                }))
            }),
        );
        let api = ApiClient::new(serve(app).await);
        let dir = tempfile::tempdir().unwrap();
        let sessions = SessionStore::new(dir.path().join("session.toml"));
        let mut flow = SignInFlow::new(&api, &sessions);

        let session = flow
            .submit(&SignInData {
                email: "diego@gobarber.com".into(),
                password: "123456".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.token, "jwt");
        assert_eq!(sessions.require().unwrap(), session);
    }

    #[tokio::test]
    async fn unwritable_session_fails_sign_in() {
        let app = Router::new().route(
            "/sessions",
            post(|| async {
                Json(json!({
                    "token": "jwt",
                    "user": { "id": "u1", "name": "Diego", "email": "diego@gobarber.com", "avatar_url": null }
                }))
            }),
        );
        let api = ApiClient::new(serve(app).await);
        let dir = tempfile::tempdir().unwrap();
        // A directory where the session file should be
        let sessions = SessionStore::new(dir.path());
        let mut flow = SignInFlow::new(&api, &sessions);

        let result = flow
            .submit(&SignInData {
                email: "diego@gobarber.com".into(),
                password: "123456".into(),
            })
            .await;

        assert!(matches!(result, Err(FormError::Remote(_))));
        assert_eq!(flow.phase(), &FormPhase::Failed);
        assert_eq!(
            SignInFlow::notification(&result).unwrap().title,
            "Authentication failed"
        );
    }

    #[tokio::test]
    async fn rejected_credentials_store_nothing() {
        let app = Router::new().route(
            "/sessions",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Incorrect" }))) }),
        );
        let api = ApiClient::new(serve(app).await);
        let dir = tempfile::tempdir().unwrap();
        let sessions = SessionStore::new(dir.path().join("session.toml"));
        let mut flow = SignInFlow::new(&api, &sessions);

        let result = flow
            .submit(&SignInData {
                email: "diego@gobarber.com".into(),
                password: "wrong".into(),
            })
            .await;

        assert!(matches!(result, Err(FormError::Remote(_))));
        assert_eq!(flow.phase(), &FormPhase::Failed);
        assert_eq!(sessions.load().unwrap(), None);
        assert_eq!(
            SignInFlow::notification(&result).unwrap().title,
            "Authentication failed"
        );
    }
}
