// SPDX-License-Identifier: MPL-2.0
//! Password recovery endpoint.

use super::ApiClient;
use crate::error::ApiError;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

impl ApiClient {
    /// Asks the API to send a password recovery e-mail.
    pub async fn request_password_recovery(&self, email: &str) -> Result<(), ApiError> {
        let request = ForgotPasswordRequest { email };
        self.post_json_unit("/password/forgot", &request).await
    }
}
