use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::value_objects::platform_kind::PlatformKind;
use crate::domain::value_objects::repository_url::{RepositoryReference, RepositoryUrlError};

/// Listing capability of a hosting platform
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Platform this client talks to
    fn kind(&self) -> PlatformKind;

    /// List the repositories of a group / organization (first page only)
    async fn list_group_members(&self, group_path: &str) -> Result<GroupListing, PlatformError>;
}

/// Repositories returned by one listing call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupListing {
    /// Repositories in the order the platform returned them
    pub repositories: Vec<RepositoryReference>,
    /// The platform reported more pages that were not fetched
    pub truncated: bool,
}

/// Errors that can occur while talking to a platform API
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Authentication failed for {host}: {message}")]
    Authentication { host: String, message: String },

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },

    #[error("Platform not supported for {host}")]
    UnsupportedPlatform { host: String },
}

impl PlatformError {
    /// Create an authentication error
    pub fn authentication(host: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Authentication {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status to an error
    pub fn from_status(host: &str, status: StatusCode, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            body.trim().to_string()
        };

        match status {
            // 403 means authenticated without access (or rate limited)
            StatusCode::UNAUTHORIZED => {
                Self::authentication(host, format!("{} {}", status.as_u16(), message))
            }
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the error means the credentials were refused
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

impl From<RepositoryUrlError> for PlatformError {
    fn from(error: RepositoryUrlError) -> Self {
        Self::invalid_response(error.to_string())
    }
}
