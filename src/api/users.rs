// SPDX-License-Identifier: MPL-2.0
//! Account creation and avatar upload endpoints.

use super::{ApiClient, User};
use crate::error::ApiError;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Registers a new account via `POST /users`.
    pub async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let request = CreateUserRequest {
            name,
            email,
            password,
        };
        self.post_json("/users", &request).await
    }

    /// Uploads a new avatar image via `PATCH /users/avatar`.
    ///
    /// The file is read fully into memory before the request starts;
    /// avatars are small so streaming is not worth the ceremony.
    pub async fn update_avatar(&self, token: &str, path: &Path) -> Result<User, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| ApiError::Upload(err.to_string()))?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("avatar")
            .to_string();
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("avatar", part);

        self.patch_multipart_authed("/users/avatar", token, form)
            .await
    }
}
