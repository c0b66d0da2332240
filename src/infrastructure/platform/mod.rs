/// Hosting platform API clients
///
/// Only used to list the repositories of a GitLab group or a GitHub
/// organization; the clone itself goes through git.
pub mod github_client;
pub mod gitlab_client;
pub mod platform_factory;
pub mod platform_interface;

pub use github_client::GitHubClient;
pub use gitlab_client::GitLabClient;
pub use platform_factory::PlatformFactory;
pub use platform_interface::{GroupListing, PlatformClient, PlatformError};
