// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for remote API failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The server could not be reached (connection refused, DNS, TLS).
    Connection(String),

    /// The request timed out.
    Timeout,

    /// The server answered with a non-success status. Carries the server's
    /// `message` field when the error body could be parsed.
    Status { status: u16, message: Option<String> },

    /// The response body could not be decoded.
    Decode(String),

    /// The configured base URL is not a valid URL.
    InvalidBaseUrl(String),

    /// A local file could not be read for upload.
    Upload(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Connection(_) => "error-api-connection",
            ApiError::Timeout => "error-api-timeout",
            ApiError::Status { status: 401, .. } => "error-api-unauthorized",
            ApiError::Status { status, .. } if *status >= 500 => "error-api-server",
            ApiError::Status { .. } => "error-api-request",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::InvalidBaseUrl(_) => "error-api-base-url",
            ApiError::Upload(_) => "error-api-upload",
        }
    }

    /// Returns the server-provided message, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns whether the session should be discarded (credentials no
    /// longer accepted by the server).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// Categorizes a transport-level `reqwest` error.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Connection(err.to_string())
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Connection(msg) => write!(f, "Connection failed: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Status {
                status,
                message: Some(msg),
            } => write!(f, "HTTP {}: {}", status, msg),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::InvalidBaseUrl(url) => write!(f, "Invalid base URL: {}", url),
            ApiError::Upload(msg) => write!(f, "Upload failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
