//! Atlas Authentication
//!
//! Atlas accepts service-account access tokens as bearer credentials. The
//! token is resolved once when the client is built and attached to every
//! request by the transport.

use std::fmt;

/// Environment variable holding the bearer token
pub const ACCESS_TOKEN_ENV: &str = "MATLAS_ACCESS_TOKEN";

/// Credentials attached to outgoing requests
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Send requests without an Authorization header
    #[default]
    Anonymous,
    /// OAuth access token sent as `Authorization: Bearer <token>`
    Bearer(String),
}

impl Credentials {
    /// Create bearer credentials, ignoring blank tokens
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            Self::Anonymous
        } else {
            Self::Bearer(token.to_string())
        }
    }

    /// Resolve credentials from the environment first, then a configured token
    pub fn resolve(configured: Option<&str>) -> Self {
        Self::resolve_from(std::env::var(ACCESS_TOKEN_ENV).ok().as_deref(), configured)
    }

    pub fn resolve_from(env_token: Option<&str>, configured: Option<&str>) -> Self {
        match env_token.map(Self::bearer) {
            Some(creds @ Self::Bearer(_)) => creds,
            _ => configured.map(Self::bearer).unwrap_or_default(),
        }
    }

    /// Token to send, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Bearer(token) => Some(token),
        }
    }
}

// Security: never print the token itself
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Bearer(_) => f.write_str("Bearer(<redacted>)"),
        }
    }
}

/// Validate an opaque identifier used as a single path segment
///
/// Identifiers are assigned by Atlas and are not checked for format; only
/// values that would produce a different path are rejected.
pub(crate) fn validate_path_segment(kind: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", kind));
    }
    if value.contains('/') {
        return Err(format!("{} must not contain '/'", kind));
    }
    if value == "." || value == ".." {
        return Err(format!("{} must not be a relative path segment", kind));
    }
    Ok(())
}
