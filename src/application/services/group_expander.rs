use std::sync::Arc;

use colored::Colorize;

use crate::common::reporter::Reporter;
use crate::domain::value_objects::platform_kind::PlatformKind;
use crate::domain::value_objects::repository_url::RepositoryReference;
use crate::infrastructure::platform::platform_interface::{PlatformClient, PlatformError};

/// グループ（組織）URLをメンバーリポジトリの一覧に展開する
pub struct GroupExpander {
    reporter: Arc<dyn Reporter>,
}

impl GroupExpander {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }

    /// プラットフォームの返却順でリポジトリを列挙する
    ///
    /// 取得するのは最初の1ページのみ。続きがある場合は警告を出す。
    pub async fn expand(
        &self,
        group: &RepositoryReference,
        platform: PlatformKind,
        client: &dyn PlatformClient,
    ) -> Result<Vec<RepositoryReference>, PlatformError> {
        let path = group.path();
        let group_path = match platform {
            PlatformKind::GitLab => path.trim_start_matches('/'),
            PlatformKind::GitHub => path.trim_matches('/'),
            PlatformKind::Unsupported => {
                return Err(PlatformError::UnsupportedPlatform {
                    host: group.hostname().to_string(),
                })
            }
        };

        self.reporter.trace(
            &format!(
                "{} {} {} {}",
                "Listing projects in".bright_blue(),
                platform.to_string().yellow(),
                platform.group_noun().bright_blue(),
                path.cyan()
            ),
            false,
        );

        let listing = client.list_group_members(group_path).await?;

        if listing.truncated {
            self.reporter.warn(&format!(
                "{} {} has more repositories than the first page returned; only {} will be cloned",
                platform.group_noun(),
                group_path,
                listing.repositories.len()
            ));
        }

        self.reporter.trace(
            &format!(
                "Found {} repositories in {} {}",
                listing.repositories.len(),
                platform.group_noun(),
                group_path
            ),
            true,
        );

        Ok(listing.repositories)
    }
}
