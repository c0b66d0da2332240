/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Configuration file and token lookup
/// - Git clone operations (libgit2)
/// - Hosting platform listing APIs (GitLab, GitHub)
pub mod config;
pub mod git;
pub mod platform;

// Re-export commonly used types
pub use config::{ConfigStore, ConfiguredTokens, HeimdallConfig, TokenProvider};
pub use git::{BasicAuth, GitCloneError, GitCloner, Git2Cloner};
pub use platform::{GroupListing, PlatformClient, PlatformError, PlatformFactory};
