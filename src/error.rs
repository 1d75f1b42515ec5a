//! Error types
//!
//! Every client method returns [`AtlasError`] unchanged to the caller so it
//! can branch on the kind (absent resource, service failure, bad payload).

use crate::atlas::data_lakes::null_as_default;
use crate::atlas::http::ResponseMeta;
use reqwest::StatusCode;
use serde::Deserialize;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Error envelope returned by the Atlas API on non-success responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    /// HTTP status echoed by the service
    #[serde(default)]
    pub error: Option<u16>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<serde_json::Value>,
}

impl ApiErrorBody {
    /// Parse an error body, returning `None` when it is not an Atlas envelope
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|b| b.detail.is_some() || b.error_code.is_some() || b.reason.is_some())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// No response was obtained (connect, DNS, timeout, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered 404
    #[error("resource not found: {}", .meta.url)]
    NotFound {
        meta: ResponseMeta,
        body: String,
        detail: Option<ApiErrorBody>,
    },

    /// The service answered with any other non-success status
    #[error("API request failed: {status}")]
    Service {
        status: StatusCode,
        meta: ResponseMeta,
        body: String,
        detail: Option<ApiErrorBody>,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode response from {}: {source}", .meta.url)]
    Decode {
        meta: ResponseMeta,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl AtlasError {
    /// Build the error for a non-success response
    pub(crate) fn from_status(meta: ResponseMeta, body: String) -> Self {
        let detail = ApiErrorBody::parse(&body);
        if meta.status == StatusCode::NOT_FOUND {
            Self::NotFound { meta, body, detail }
        } else {
            Self::Service {
                status: meta.status,
                meta,
                body,
                detail,
            }
        }
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<StatusCode> {
        self.meta().map(|m| m.status)
    }

    /// Transport metadata, when a response was received
    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            Self::NotFound { meta, .. } | Self::Service { meta, .. } | Self::Decode { meta, .. } => {
                Some(meta)
            }
            Self::Transport(_) | Self::InvalidRequest(_) | Self::Config(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether a caller may reasonably try again later
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Service { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }
}

/// Format an Atlas error for display
/// Security: Avoids echoing raw API bodies back to users
pub fn format_atlas_error(error: &AtlasError) -> String {
    match error {
        AtlasError::NotFound { .. } => "Resource not found.".to_string(),
        AtlasError::Service { status, detail, .. } => {
            let code = detail
                .as_ref()
                .and_then(|d| d.error_code.as_deref())
                .map(|c| format!(" ({})", c))
                .unwrap_or_default();
            let message = match status.as_u16() {
                400 => "Invalid request. Check your parameters.",
                401 => "Authentication failed. Check your Atlas access token.",
                403 => "Permission denied. Check the project role of your API key.",
                409 => "Resource conflict. The resource may already exist or be in use.",
                429 => "Rate limit exceeded. Please try again later.",
                500..=599 => "Atlas service temporarily unavailable. Please try again.",
                _ => "Request failed.",
            };
            format!("{}{}", message, code)
        }
        AtlasError::Transport(_) => {
            "Request failed. Check your network connection and try again.".to_string()
        }
        AtlasError::Decode { .. } => "Unexpected response from Atlas.".to_string(),
        AtlasError::InvalidRequest(msg) | AtlasError::Config(msg) => {
            let mut kept = msg.chars().filter(|c| c.is_ascii_graphic() || *c == ' ');
            let sanitized = kept.by_ref().take(80).collect::<String>();
            if kept.next().is_some() {
                format!("{}...", sanitized)
            } else {
                sanitized
            }
        }
    }
}
