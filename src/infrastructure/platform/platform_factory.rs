use super::github_client::GitHubClient;
use super::gitlab_client::GitLabClient;
use super::platform_interface::{PlatformClient, PlatformError};
use crate::domain::value_objects::platform_kind::PlatformKind;
use crate::domain::value_objects::repository_url::RepositoryReference;

/// Factory for creating platform listing clients
pub struct PlatformFactory;

impl PlatformFactory {
    /// Create an authenticated client for the platform hosting `group`
    pub fn create_client(
        kind: PlatformKind,
        group: &RepositoryReference,
        token: &str,
    ) -> Result<Box<dyn PlatformClient>, PlatformError> {
        match kind {
            PlatformKind::GitLab => Ok(Box::new(GitLabClient::for_group(group, token)?)),
            PlatformKind::GitHub => Ok(Box::new(GitHubClient::for_organization(group, token)?)),
            PlatformKind::Unsupported => Err(PlatformError::UnsupportedPlatform {
                host: group.hostname().to_string(),
            }),
        }
    }
}
