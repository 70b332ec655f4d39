//! API gateway client for LinkKeeper.
//!
//! Thin wrapper issuing authenticated HTTP requests against the remote
//! LinkKeeper API and parsing its `{success, message?, ...}` JSON envelopes.
//! Every operation is single-shot: no retry, no caller-side cancellation.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::auth::{Session, UserProfile};
use crate::types::bookmark::{BookmarkPatch, BookmarkRecord, NewBookmark};
use crate::types::errors::ApiError;

/// Trait defining the operations the UI expects from the remote API.
///
/// Kept separate from the HTTP implementation so view-state managers can be
/// exercised against an in-memory gateway in tests.
#[allow(async_fn_in_trait)]
pub trait ApiGatewayTrait {
    /// Confirms the stored token is still accepted by the server.
    async fn fetch_profile(&self, token: &str) -> Result<Option<UserProfile>, ApiError>;
    async fn list_bookmarks(&self, token: &str) -> Result<Vec<BookmarkRecord>, ApiError>;
    async fn create_bookmark(
        &self,
        token: &str,
        bookmark: &NewBookmark,
    ) -> Result<BookmarkRecord, ApiError>;
    async fn update_bookmark(
        &self,
        token: &str,
        id: &str,
        patch: &BookmarkPatch,
    ) -> Result<BookmarkRecord, ApiError>;
    async fn delete_bookmark(&self, token: &str, id: &str) -> Result<(), ApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError>;
}

/// HTTP implementation of the gateway over `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileEnvelope {
    #[serde(default)]
    user: Option<UserProfile>,
}

#[derive(Debug, Default, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    bookmarks: Vec<BookmarkRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct LinkEnvelope {
    #[serde(default)]
    bookmark: Option<BookmarkRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthEnvelope {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<UserProfile>,
}

/// Acknowledgement-only envelope (e.g. DELETE responses).
#[derive(Debug, Default, Deserialize)]
struct AckEnvelope {}

/// Maps an HTTP status to the error taxonomy, carrying the server message.
fn classify(status: StatusCode, message: String) -> ApiError {
    match status.as_u16() {
        401 | 403 => ApiError::Auth(message),
        404 => ApiError::NotFound(message),
        400..=499 => ApiError::Validation(message),
        _ => ApiError::Server(message),
    }
}

/// Reads a response body and either decodes the expected envelope or turns
/// the `{success: false, message}` shape into a classified error.
async fn decode<T: DeserializeOwned + Default>(
    resp: reqwest::Response,
    default_message: &str,
) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Connectivity(e.to_string()))?;
    decode_body(status, &text, default_message)
}

/// Envelope decoding over an already-read body.
///
/// A 2xx response with an empty or non-JSON body is a success with the
/// envelope's default content: ack-only endpoints (profile check, delete)
/// may answer with a bare status line. Endpoints whose envelope carries
/// required data still reject a default as incomplete at the call site.
fn decode_body<T: DeserializeOwned + Default>(
    status: StatusCode,
    body: &str,
    default_message: &str,
) -> Result<T, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
    let success = value.get("success").and_then(|v| v.as_bool());
    let message = value
        .get("message")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| default_message.to_string());

    if status.is_success() && success != Some(false) {
        if value.is_null() {
            return Ok(T::default());
        }
        serde_json::from_value(value)
            .map_err(|e| ApiError::Server(format!("Malformed response: {}", e)))
    } else {
        warn!(%status, %message, "api request failed");
        Err(classify(status, message))
    }
}

impl ApiClient {
    /// Creates a client for the given base URL (no trailing slash).
    ///
    /// The connect timeout is a hardening measure; requests otherwise run to
    /// completion or transport failure.
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ApiGatewayTrait for ApiClient {
    async fn fetch_profile(&self, token: &str) -> Result<Option<UserProfile>, ApiError> {
        debug!("GET /auth/profile");
        let resp = self
            .http
            .get(self.endpoint("/auth/profile"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let env: ProfileEnvelope =
            decode(resp, "Authentication failed. Please login again.").await?;
        Ok(env.user)
    }

    async fn list_bookmarks(&self, token: &str) -> Result<Vec<BookmarkRecord>, ApiError> {
        debug!("GET /links");
        let resp = self
            .http
            .get(self.endpoint("/links"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let env: ListEnvelope = decode(resp, "Failed to load bookmarks").await?;
        Ok(env.bookmarks)
    }

    async fn create_bookmark(
        &self,
        token: &str,
        bookmark: &NewBookmark,
    ) -> Result<BookmarkRecord, ApiError> {
        debug!(url = %bookmark.url, "POST /links");
        let resp = self
            .http
            .post(self.endpoint("/links"))
            .bearer_auth(token)
            .json(bookmark)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let env: LinkEnvelope = decode(resp, "Failed to add bookmark").await?;
        env.bookmark
            .ok_or_else(|| ApiError::Server("Malformed response: missing bookmark".to_string()))
    }

    async fn update_bookmark(
        &self,
        token: &str,
        id: &str,
        patch: &BookmarkPatch,
    ) -> Result<BookmarkRecord, ApiError> {
        debug!(%id, "PATCH /links/:id");
        let resp = self
            .http
            .patch(self.endpoint(&format!("/links/{}", id)))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let env: LinkEnvelope = decode(resp, "Failed to update bookmark").await?;
        env.bookmark
            .ok_or_else(|| ApiError::Server("Malformed response: missing bookmark".to_string()))
    }

    async fn delete_bookmark(&self, token: &str, id: &str) -> Result<(), ApiError> {
        debug!(%id, "DELETE /links/:id");
        let resp = self
            .http
            .delete(self.endpoint(&format!("/links/{}", id)))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let _: AckEnvelope = decode(resp, "Failed to delete bookmark").await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        debug!("POST /auth/login");
        let resp = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let env: AuthEnvelope = decode(resp, "Authentication failed").await?;
        match (env.token, env.user) {
            (Some(token), Some(user)) => Ok(Session { token, user }),
            _ => Err(ApiError::Server(
                "Malformed response: missing token or user".to_string(),
            )),
        }
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        debug!("POST /auth/register");
        let resp = self
            .http
            .post(self.endpoint("/auth/register"))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let env: AuthEnvelope = decode(resp, "Registration failed").await?;
        match (env.token, env.user) {
            (Some(token), Some(user)) => Ok(Session { token, user }),
            _ => Err(ApiError::Server(
                "Malformed response: missing token or user".to_string(),
            )),
        }
    }
}
