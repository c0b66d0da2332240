pub mod platform_kind;
pub mod repository_url;

pub use platform_kind::PlatformKind;
pub use repository_url::{RepositoryReference, RepositoryUrlError};
