// SPDX-License-Identifier: MPL-2.0
//! Profile update endpoint.

use super::{ApiClient, User};
use crate::error::ApiError;
use serde::Serialize;

/// Body of `PUT /profile`.
///
/// The password fields must be omitted entirely (not sent as null or empty
/// strings) when the user is not changing their password; the API treats
/// their presence as a password change request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl ApiClient {
    /// Updates the signed-in user's profile.
    pub async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> Result<User, ApiError> {
        self.put_json_authed("/profile", token, request).await
    }
}
