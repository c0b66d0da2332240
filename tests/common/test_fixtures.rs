//! Test fixtures for creating test data
//!
//! Temporary work directories and canned platform API payloads.

use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

use heimdall::domain::entities::WorkspaceConfig;

/// Temporary work dir and log dir
pub struct WorkspaceFixture {
    pub temp_dir: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn work_dir(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("work")
    }

    pub fn log_dir(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("logs")
    }

    pub fn config(&self) -> WorkspaceConfig {
        WorkspaceConfig::new(self.work_dir(), self.log_dir())
    }

    /// Absolute path of `relative` inside the work dir
    pub fn in_work_dir(&self, relative: &str) -> std::path::PathBuf {
        self.work_dir().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Payload of `GET /api/v4/groups/:id/projects`
pub fn gitlab_projects(projects: &[(&str, bool)]) -> Value {
    Value::Array(
        projects
            .iter()
            .map(|(web_url, archived)| json!({ "web_url": web_url, "archived": archived }))
            .collect(),
    )
}

/// Payload of `GET /orgs/:org/repos`
pub fn github_repositories(clone_urls: &[&str]) -> Value {
    Value::Array(
        clone_urls
            .iter()
            .map(|clone_url| json!({ "clone_url": clone_url }))
            .collect(),
    )
}
