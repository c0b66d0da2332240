use std::path::{Path, PathBuf};

use async_trait::async_trait;
use git2::{build::RepoBuilder, Cred, CredentialType, FetchOptions, RemoteCallbacks};
use thiserror::Error;

/// libgit2 keeps asking for credentials while they are rejected
const MAX_CREDENTIAL_ATTEMPTS: usize = 3;

/// Git clone related errors
#[derive(Debug, Error)]
pub enum GitCloneError {
    #[error("{0}")]
    Git2Error(#[from] git2::Error),

    #[error("Clone task aborted: {0}")]
    TaskFailed(String),
}

/// Basic-auth credential handed to the transport
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    /// Token as password with an empty username
    pub fn token(password: impl Into<String>) -> Self {
        Self {
            username: String::new(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The git transfer itself
#[async_trait]
pub trait GitCloner: Send + Sync {
    /// Clone `url` into the existing, empty `destination` directory
    async fn clone_repository(
        &self,
        url: &str,
        destination: &Path,
        credentials: &BasicAuth,
    ) -> Result<(), GitCloneError>;
}

/// libgit2 backed implementation
#[derive(Debug, Default, Clone)]
pub struct Git2Cloner;

impl Git2Cloner {
    pub fn new() -> Self {
        Self
    }

    fn clone_blocking(
        url: &str,
        destination: &Path,
        credentials: &BasicAuth,
    ) -> Result<(), GitCloneError> {
        let mut attempts = 0;
        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|_url, _username_from_url, allowed_types| {
            attempts += 1;
            if attempts > MAX_CREDENTIAL_ATTEMPTS {
                return Err(git2::Error::from_str("authentication failed: credentials rejected"));
            }
            if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
                Cred::userpass_plaintext(&credentials.username, &credentials.password)
            } else {
                Err(git2::Error::from_str("No supported authentication method"))
            }
        });

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let mut builder = RepoBuilder::new();
        builder.fetch_options(fetch_options);
        builder.clone(url, destination)?;

        Ok(())
    }
}

#[async_trait]
impl GitCloner for Git2Cloner {
    async fn clone_repository(
        &self,
        url: &str,
        destination: &Path,
        credentials: &BasicAuth,
    ) -> Result<(), GitCloneError> {
        let url = url.to_string();
        let destination: PathBuf = destination.to_path_buf();
        let credentials = credentials.clone();

        tokio::task::spawn_blocking(move || Self::clone_blocking(&url, &destination, &credentials))
            .await
            .map_err(|e| GitCloneError::TaskFailed(e.to_string()))?
    }
}
