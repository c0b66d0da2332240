use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosting platform behind a hostname
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// GitLab (gitlab.com or self-hosted)
    #[serde(rename = "gitlab")]
    GitLab,
    /// GitHub (github.com or GitHub Enterprise)
    #[serde(rename = "github")]
    GitHub,
    /// Anything heimdall cannot list groups on
    Unsupported,
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformKind::GitLab => write!(f, "GitLab"),
            PlatformKind::GitHub => write!(f, "GitHub"),
            PlatformKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

impl PlatformKind {
    /// Whether group/organization expansion is available
    pub fn is_supported(&self) -> bool {
        !matches!(self, PlatformKind::Unsupported)
    }

    /// Word the platform uses for a collection of repositories
    pub fn group_noun(&self) -> &'static str {
        match self {
            PlatformKind::GitLab => "group",
            PlatformKind::GitHub => "organization",
            PlatformKind::Unsupported => "group",
        }
    }
}
