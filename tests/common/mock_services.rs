//! Mock services for testing
//!
//! In-memory stand-ins for the collaborators of the clone use case: the
//! user-facing reporter, the git transfer and the token lookup.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use heimdall::common::reporter::{clean_for_log, Reporter};
use heimdall::infrastructure::config::TokenProvider;
use heimdall::infrastructure::git::{BasicAuth, GitCloneError, GitCloner};

/// Reporter keeping every message, colors removed
#[derive(Default)]
pub struct RecordingReporter {
    traces: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn traces(&self) -> Vec<String> {
        self.traces.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    /// Whether any trace contains `needle`
    pub fn has_trace(&self, needle: &str) -> bool {
        self.traces().iter().any(|trace| trace.contains(needle))
    }

    /// Whether any warning contains `needle`
    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|warning| warning.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn trace(&self, message: &str, _debug_only: bool) {
        self.traces
            .lock()
            .unwrap()
            .push(clean_for_log(message).into_owned());
    }

    fn warn(&self, message: &str) {
        self.warnings
            .lock()
            .unwrap()
            .push(clean_for_log(message).into_owned());
    }
}

/// A clone request seen by [`ScriptedCloner`]
#[derive(Debug, Clone)]
pub struct CloneCall {
    pub url: String,
    pub destination: PathBuf,
    pub credentials: BasicAuth,
}

/// Git cloner that records calls and fails for scripted URLs
#[derive(Default)]
pub struct ScriptedCloner {
    calls: Mutex<Vec<CloneCall>>,
    failing_urls: HashSet<String>,
}

impl ScriptedCloner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the clone of `url` (as passed to the cloner, with `.git`) fail
    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing_urls.insert(url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CloneCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn cloned_urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.url).collect()
    }
}

#[async_trait]
impl GitCloner for ScriptedCloner {
    async fn clone_repository(
        &self,
        url: &str,
        destination: &Path,
        credentials: &BasicAuth,
    ) -> Result<(), GitCloneError> {
        self.calls.lock().unwrap().push(CloneCall {
            url: url.to_string(),
            destination: destination.to_path_buf(),
            credentials: credentials.clone(),
        });

        if self.failing_urls.contains(url) {
            return Err(GitCloneError::TaskFailed(format!(
                "remote rejected {}",
                url
            )));
        }
        Ok(())
    }
}

/// Fixed hostname to token map
#[derive(Default)]
pub struct StaticTokens {
    tokens: HashMap<String, String>,
}

impl StaticTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, hostname: &str, token: &str) -> Self {
        self.tokens.insert(hostname.to_string(), token.to_string());
        self
    }
}

impl TokenProvider for StaticTokens {
    fn token(&self, hostname: &str) -> String {
        self.tokens.get(hostname).cloned().unwrap_or_default()
    }
}
