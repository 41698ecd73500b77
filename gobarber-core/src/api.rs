//! HTTP client for the GoBarber API

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::calendar::CalendarMonth;
use crate::error::{GoBarberError, GoBarberResult};
use crate::model::{Appointment, MonthAvailabilityDay, User};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

// Request and response bodies

#[derive(Serialize)]
struct SessionRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub user: User,
    pub token: String,
}

#[derive(Serialize)]
struct MonthQuery {
    year: i32,
    month: u32,
}

#[derive(Serialize)]
struct DayQuery {
    day: u32,
    month: u32,
    year: i32,
}

/// Body of `PUT /profile`. Password fields are omitted unless changing the password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password_confirmation: Option<String>,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
    pub new_password_confirmation: String,
    pub token: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: with_trailing_slash(base_url),
            token: None,
        }
    }

    /// Authenticate subsequent requests with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: Method, path: &str) -> GoBarberResult<RequestBuilder> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        debug!(%method, %url, "API request");

        let builder = self.http.request(method, url);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> GoBarberResult<Response> {
        let resp = builder.send().await?;
        let status = resp.status();
        debug!(status = status.as_u16(), url = %resp.url(), "API response");

        if status.is_success() {
            return Ok(resp);
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "Could not read error response body");
                String::new()
            }
        };
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Request failed").to_string());
        warn!(status = status.as_u16(), %message, "API error");

        Err(GoBarberError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> GoBarberResult<T> {
        Ok(self.send(builder).await?.json().await?)
    }

    /// POST /sessions
    pub async fn create_session(&self, email: &str, password: &str) -> GoBarberResult<SessionResponse> {
        let req = self
            .request(Method::POST, "/sessions")?
            .json(&SessionRequest { email, password });
        self.send_json(req).await
    }

    /// GET /providers/:id/month-availability
    pub async fn month_availability(
        &self,
        provider_id: &str,
        month: CalendarMonth,
    ) -> GoBarberResult<Vec<MonthAvailabilityDay>> {
        let req = self
            .request(Method::GET, &format!("/providers/{provider_id}/month-availability"))?
            .query(&MonthQuery {
                year: month.year,
                month: month.month,
            });
        self.send_json(req).await
    }

    /// GET /appointments/schedule
    pub async fn day_schedule(&self, date: NaiveDate) -> GoBarberResult<Vec<Appointment>> {
        let req = self
            .request(Method::GET, "/appointments/schedule")?
            .query(&DayQuery {
                day: date.day(),
                month: date.month(),
                year: date.year(),
            });
        self.send_json(req).await
    }

    /// PUT /profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> GoBarberResult<User> {
        let req = self.request(Method::PUT, "/profile")?.json(update);
        self.send_json(req).await
    }

    /// PATCH /users/avatar
    pub async fn update_avatar(&self, file: &Path) -> GoBarberResult<User> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "avatar".to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("avatar", part);

        let req = self.request(Method::PATCH, "/users/avatar")?.multipart(form);
        self.send_json(req).await
    }

    /// POST /password/forgot
    pub async fn forgot_password(&self, email: &str) -> GoBarberResult<()> {
        let req = self
            .request(Method::POST, "/password/forgot")?
            .json(&ForgotPasswordRequest { email });
        self.send(req).await?;
        Ok(())
    }

    /// POST /password/reset
    pub async fn reset_password(&self, reset: &ResetPasswordRequest) -> GoBarberResult<()> {
        let req = self.request(Method::POST, "/password/reset")?.json(reset);
        self.send(req).await?;
        Ok(())
    }
}

/// `Url::join` replaces the last path segment unless the base ends in '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::extract::{Multipart, Path as UrlPath, Query};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, patch, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    #[test]
    fn base_url_keeps_path_prefix() {
        let base = with_trailing_slash(Url::parse("http://localhost:3333/api").unwrap());
        assert_eq!(base.join("appointments/schedule").unwrap().path(), "/api/appointments/schedule");

        let root = with_trailing_slash(Url::parse("http://localhost:3333").unwrap());
        assert_eq!(root.join("profile").unwrap().path(), "/profile");
    }

    #[test]
    fn profile_update_omits_empty_password_fields() {
        let update = ProfileUpdate {
            name: "Diego".into(),
            email: "diego@gobarber.com".into(),
            old_password: None,
            new_password: None,
            new_password_confirmation: None,
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "name": "Diego", "email": "diego@gobarber.com" })
        );
    }

    #[tokio::test]
    async fn schedule_sends_day_month_year_and_token() {
        let app = Router::new().route(
            "/appointments/schedule",
            get(|headers: HeaderMap, Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(headers["authorization"], "Bearer jwt");
                assert_eq!(q["day"], "10");
                assert_eq!(q["month"], "3");
                assert_eq!(q["year"], "2021");
                Json(json!([
                    { "id": "a1", "date": "2021-03-10T09:00:00.000Z", "user": { "name": "Ana", "avatar_url": null } }
                ]))
            }),
        );
        let api = ApiClient::new(serve(app).await).with_token("jwt");

        let appointments = api
            .day_schedule(NaiveDate::from_ymd_opt(2021, 3, 10).unwrap())
            .await
            .unwrap();

        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].user.name, "Ana");
    }

    #[tokio::test]
    async fn month_availability_targets_provider() {
        let app = Router::new().route(
            "/providers/{id}/month-availability",
            get(|UrlPath(id): UrlPath<String>, Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(id, "p1");
                assert_eq!(q["year"], "2021");
                assert_eq!(q["month"], "3");
                Json(json!([{ "day": 10, "available": false }, { "day": 11, "available": true }]))
            }),
        );
        let api = ApiClient::new(serve(app).await);

        let days = api
            .month_availability("p1", CalendarMonth::new(2021, 3).unwrap())
            .await
            .unwrap();

        assert_eq!(days, vec![
            MonthAvailabilityDay { day: 10, available: false },
            MonthAvailabilityDay { day: 11, available: true },
        ]);
    }

    #[tokio::test]
    async fn error_body_message_is_surfaced() {
        let app = Router::new().route(
            "/sessions",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "status": "error", "message": "Incorrect email/password combination." })),
                )
            }),
        );
        let api = ApiClient::new(serve(app).await);

        let err = api.create_session("a@b.com", "wrong").await.unwrap_err();

        match err {
            GoBarberError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect email/password combination.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn error_without_body_uses_status_reason() {
        let app = Router::new().route("/password/forgot", post(|| async { StatusCode::BAD_GATEWAY }));
        let api = ApiClient::new(serve(app).await);

        let err = api.forgot_password("a@b.com").await.unwrap_err();

        assert!(matches!(err, GoBarberError::Api { status: 502, ref message } if message == "Bad Gateway"));
    }

    #[tokio::test]
    async fn reset_password_posts_token() {
        let app = Router::new().route(
            "/password/reset",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["token"], "reset-token");
                assert_eq!(body["new_password"], "123456");
                assert_eq!(body["new_password_confirmation"], "123456");
                StatusCode::NO_CONTENT
            }),
        );
        let api = ApiClient::new(serve(app).await);

        api.reset_password(&ResetPasswordRequest {
            new_password: "123456".into(),
            new_password_confirmation: "123456".into(),
            token: "reset-token".into(),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn avatar_is_uploaded_as_multipart() {
        let app = Router::new().route(
            "/users/avatar",
            patch(|mut multipart: Multipart| async move {
                let field = multipart.next_field().await.unwrap().unwrap();
                assert_eq!(field.name(), Some("avatar"));
                assert_eq!(field.file_name(), Some("me.png"));
                assert_eq!(field.bytes().await.unwrap().as_ref(), b"png-bytes");
                Json(json!({
                    "id": "u1", "name": "Diego", "email": "diego@gobarber.com",
                    "avatar_url": "http://cdn/me.png"
                }))
            }),
        );
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("me.png");
        std::fs::write(&file, b"png-bytes").unwrap();
        let api = ApiClient::new(serve(app).await).with_token("jwt");

        let user = api.update_avatar(&file).await.unwrap();

        assert_eq!(user.avatar_url.as_deref(), Some("http://cdn/me.png"));
    }

    #[tokio::test]
    async fn missing_avatar_file_is_io_error() {
        let api = ApiClient::new(Url::parse("http://127.0.0.1:9").unwrap());

        let err = api.update_avatar(Path::new("/nonexistent/avatar.png")).await.unwrap_err();

        assert!(matches!(err, GoBarberError::Io(_)));
    }
}
