//! Error contract of the REST backend
//!
//! Non-2xx responses carry `{ "message": ... }`, which is surfaced verbatim.
//! Non-JSON bodies are treated as `{ "message": <raw text> }`.
//! Fetch-level failures are reported separately so the UI can hint that the
//! backend may not be running.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect to the server. Please check if the backend is running.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response (server down, CORS, offline)
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network { detail: String },

    /// Backend answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Backend answered 2xx but the body does not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Browser API failure while building the request (FormData, Blob)
    #[error("Failed to build request: {0}")]
    Client(String),
}

impl ApiError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Builds the error for a non-2xx response from its raw parts.
pub fn error_from_body(status: u16, content_type: Option<&str>, body: &str) -> ApiError {
    let message = if is_json(content_type) {
        serde_json::from_str::<MessageBody>(body)
            .ok()
            .and_then(|b| b.message)
    } else {
        Some(body.to_string())
    };

    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status));

    ApiError::Http { status, message }
}

/// Decodes a response body, applying the error contract for non-2xx statuses.
pub fn decode_body<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(error_from_body(status, content_type, body));
    }

    if is_json(content_type) {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let wrapped = serde_json::json!({ "message": body });
        serde_json::from_value(wrapped).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Plain `{ "message": ... }` acknowledgement (delete, resend)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
