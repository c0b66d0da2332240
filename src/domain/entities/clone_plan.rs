use crate::domain::value_objects::repository_url::RepositoryReference;
use std::path::{Path, PathBuf};

/// 1リポジトリ分のクローン計画（クローン試行後は保持しない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePlan {
    /// クローン元
    source: RepositoryReference,

    /// クローン先ディレクトリ
    destination: PathBuf,
}

impl ClonePlan {
    pub fn new(source: RepositoryReference, destination: impl Into<PathBuf>) -> Self {
        Self {
            source,
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &RepositoryReference {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
