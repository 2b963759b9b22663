//! Client error types

use http::StatusCode;
use serde_json::Value;
use shared::error::{ErrorCode, FieldErrors};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the payload with per-field messages
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx answer
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Classify a non-2xx response from its status and raw body
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(body_text(body).unwrap_or_default()),
            StatusCode::NOT_FOUND => Self::NotFound(body_text(body).unwrap_or_default()),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                match FieldErrors::parse(body) {
                    Some(errors) if !errors.is_empty() => Self::Validation(errors),
                    _ => Self::Api {
                        status: status.as_u16(),
                        message: body_text(body).unwrap_or_default(),
                    },
                }
            }
            _ => Self::Api {
                status: status.as_u16(),
                message: body_text(body).unwrap_or_default(),
            },
        }
    }

    /// Best-effort human text extracted from the server answer
    ///
    /// Field errors become `field: a, b` lines; plain bodies are used as is.
    /// `None` when the server said nothing usable.
    pub fn display_text(&self) -> Option<String> {
        let text = match self {
            Self::Validation(errors) => errors.display_text(),
            Self::Forbidden(text) | Self::NotFound(text) => text.clone(),
            Self::Api { message, .. } => message.clone(),
            _ => return None,
        };
        (!text.trim().is_empty()).then_some(text)
    }

    /// The `detail` message of the server answer, if any
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Validation(errors) => errors.detail().map(str::to_string),
            Self::Forbidden(text) | Self::NotFound(text) | Self::Api { message: text, .. } => {
                (!text.trim().is_empty()).then(|| text.clone())
            }
            _ => None,
        }
    }

    /// Map to the shared error code space
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Unauthorized => ErrorCode::NotAuthenticated,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Api { status, .. } => StatusCode::from_u16(*status)
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::Unknown),
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InternalError,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }
}

/// Readable text of an error body: a `detail` field, a JSON string, or the
/// raw text unless it is an HTML page
fn body_text(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(s)) => Some(s),
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => Some(detail.clone()),
            _ => Some(trimmed.to_string()),
        },
        // DRF list errors: ["msg", "msg"]
        Ok(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Ok(other) => Some(other.to_string()),
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
