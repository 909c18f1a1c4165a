//! Backend REST client.
//!
//! All authenticated traffic goes through [`ApiClient::request`], which
//! injects the stored bearer token, maps HTTP 401 to
//! [`AppError::Unauthorized`] so the UI can force a re-login, and turns other
//! non-2xx responses into [`AppError::Api`] carrying the backend-provided
//! message. The auth endpoints use an unauthenticated path so a 401 from bad
//! credentials reads as an ordinary API error, not a session expiry.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::{AttendanceRecord, Member, RosterKind, SaveAttendance, SaveMember, attendance};
use crate::session::SessionStore;

/// REST client for the school management backend.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client for the configured backend.
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{base}{endpoint}", base = self.base_url)
    }

    /// Issue an authenticated JSON request and decode the response body.
    async fn request(&self, method: Method, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        let mut req = self
            .http
            .request(method, self.url(endpoint))
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.get() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }

        let data = parse_body(&response.text().await?);
        if !status.is_success() {
            return Err(AppError::api(status.as_u16(), error_message(&data)));
        }
        Ok(data)
    }

    /// POST without credential injection and without 401 special-casing.
    /// Used only while establishing a session.
    async fn post_public(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let response = self
            .http
            .post(self.url(endpoint))
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let data = parse_body(&response.text().await?);
        if !status.is_success() {
            return Err(AppError::api(status.as_u16(), error_message(&data)));
        }
        Ok(data)
    }

    async fn get(&self, endpoint: &str) -> Result<Value> {
        self.request(Method::GET, endpoint, None).await
    }

    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    async fn put(&self, endpoint: &str, body: &Value) -> Result<Value> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    async fn delete(&self, endpoint: &str) -> Result<Value> {
        self.request(Method::DELETE, endpoint, None).await
    }

    // --- Auth ---

    /// Log in as administrator, returning the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let data = self
            .post_public("/admin_login", &json!({ "email": email, "password": password }))
            .await?;

        data.get("token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| AppError::api(200, "Login response did not include a token"))
    }

    /// Register a new administrator account. Does not log in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        self.post_public(
            "/admin_register",
            &json!({ "name": name, "email": email, "password": password }),
        )
        .await?;
        Ok(())
    }

    // --- Students / teachers ---

    pub async fn list_roster(&self, kind: RosterKind) -> Result<Vec<Member>> {
        let data = self.get(kind.list_path()).await?;
        extract_list(data, kind.envelope_key())
    }

    pub async fn create_member(&self, kind: RosterKind, body: &SaveMember) -> Result<()> {
        self.post(kind.create_path(), &serde_json::to_value(body)?).await?;
        Ok(())
    }

    pub async fn update_member(&self, kind: RosterKind, id: i64, body: &SaveMember) -> Result<()> {
        self.put(&kind.update_path(id), &serde_json::to_value(body)?).await?;
        Ok(())
    }

    pub async fn delete_member(&self, kind: RosterKind, id: i64) -> Result<()> {
        self.delete(&kind.delete_path(id)).await?;
        Ok(())
    }

    // --- Attendance ---

    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        let data = self.get(attendance::LIST_PATH).await?;
        extract_list(data, attendance::ENVELOPE_KEY)
    }

    pub async fn create_attendance(&self, body: &SaveAttendance) -> Result<()> {
        self.post(attendance::CREATE_PATH, &serde_json::to_value(body)?).await?;
        Ok(())
    }

    pub async fn update_attendance(&self, id: i64, body: &SaveAttendance) -> Result<()> {
        self.put(&attendance::update_path(id), &serde_json::to_value(body)?)
            .await?;
        Ok(())
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<()> {
        self.delete(&attendance::delete_path(id)).await?;
        Ok(())
    }
}

/// Decode a response body, treating empty or non-JSON bodies as null.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or(Value::Null)
}

/// Pull the backend error message out of a failure body.
fn error_message(data: &Value) -> String {
    data.get("message")
        .and_then(Value::as_str)
        .unwrap_or("Something went wrong")
        .to_string()
}

/// Decode a list response that may be a bare array or an object wrapping the
/// array under `key`. An object without the key yields an empty list.
fn extract_list<T: DeserializeOwned>(data: Value, key: &str) -> Result<Vec<T>> {
    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Into::into))
        .collect()
}
