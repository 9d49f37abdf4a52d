// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the GoBarber REST API.
//!
//! The client is a thin wrapper around `reqwest` with a configurable base
//! URL and request timeout. Endpoint wrappers live in the submodules, one
//! per API concern:
//!
//! - [`sessions`] - authentication (`POST /sessions`)
//! - [`users`] - account creation and avatar upload
//! - [`password`] - password recovery
//! - [`profile`] - profile updates
//!
//! The client performs no retries; callers surface failures to the user
//! through toast notifications.

mod password;
mod profile;
mod sessions;
mod users;

pub use profile::UpdateProfileRequest;
pub use sessions::SessionResponse;

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An account as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Error body the API sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the GoBarber API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_API_BASE_URL,
            Duration::from_secs(crate::config::DEFAULT_API_TIMEOUT_SECS),
        )
        .expect("default API base URL is valid")
    }
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// The base URL is validated here so that a malformed configured
    /// address surfaces at startup, not on the first request.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        reqwest::Url::parse(base_url)
            .map_err(|err| ApiError::InvalidBaseUrl(format!("{base_url}: {err}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Connection(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::from_transport(&err))?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::from_transport(&err))?;
        Self::check_status(response).await
    }

    pub(crate) async fn put_json_authed<B, R>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .put(self.endpoint(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::from_transport(&err))?;
        Self::read_json(response).await
    }

    pub(crate) async fn patch_multipart_authed<R>(
        &self,
        path: &str,
        token: &str,
        form: reqwest::multipart::Form,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let response = self
            .http
            .patch(self.endpoint(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApiError::from_transport(&err))?;
        Self::read_json(response).await
    }

    /// Decodes a success body as JSON, or maps a non-success status to
    /// `ApiError::Status` carrying the server's message when present.
    async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        } else {
            Err(Self::status_error(status.as_u16(), response).await)
        }
    }

    /// Discards the body of a success response; some endpoints answer 204.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status.as_u16(), response).await)
        }
    }

    async fn status_error(status: u16, response: reqwest::Response) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.message);
        ApiError::Status { status, message }
    }
}
