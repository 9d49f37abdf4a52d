// SPDX-License-Identifier: MPL-2.0
//! Authentication endpoint.

use super::{ApiClient, User};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct CreateSessionRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body of a successful `POST /sessions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    /// Authenticates with e-mail and password.
    ///
    /// The API answers 401 for unknown credentials, which callers surface
    /// as an authentication failure toast.
    pub async fn create_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionResponse, ApiError> {
        let request = CreateSessionRequest { email, password };
        self.post_json("/sessions", &request).await
    }
}
