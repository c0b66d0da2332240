use std::borrow::Cow;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::{clone_options::CloneOptions, workspace_config::WorkspaceConfig};
use crate::domain::value_objects::repository_url::RepositoryReference;

/// 末尾のドメインサフィックス（.com、.io等）1つ分
static HOSTNAME_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[a-zA-Z]+$").expect("hostname suffix pattern is valid"));

/// 連続したパス区切り文字
static REPEATED_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/{2,}").expect("separator pattern is valid"));

/// リポジトリURLからローカルのクローン先パスを決定する
pub struct PathResolver;

impl PathResolver {
    /// `work_dir [+ hostname] + URLパス` を組み立てる
    ///
    /// ホスト名を含める場合、`keep_hostname_suffix` が無効なら末尾のサフィックスを
    /// 1つだけ取り除く（`gitlab.example.com` → `gitlab.example`）。
    pub fn resolve_path(
        reference: &RepositoryReference,
        options: &CloneOptions,
        workspace: &WorkspaceConfig,
    ) -> PathBuf {
        let work_dir = workspace.work_dir_prefix();
        let raw = if options.include_hostname_in_path {
            let hostname = if options.keep_hostname_suffix {
                Cow::Borrowed(reference.hostname())
            } else {
                Self::strip_hostname_suffix(reference.hostname())
            };
            format!("{}{}{}", work_dir, hostname, reference.path())
        } else {
            format!("{}{}", work_dir, reference.path())
        };

        PathBuf::from(Self::collapse_separators(&raw).into_owned())
    }

    /// 末尾の `.letters` を1つだけ除去する
    pub fn strip_hostname_suffix(hostname: &str) -> Cow<'_, str> {
        HOSTNAME_SUFFIX.replace(hostname, "")
    }

    /// `//` 以上の連続した区切り文字を1つにまとめる
    pub fn collapse_separators(path: &str) -> Cow<'_, str> {
        REPEATED_SEPARATORS.replace_all(path, "/")
    }
}
