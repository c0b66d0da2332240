use std::collections::HashMap;

use crate::domain::value_objects::platform_kind::PlatformKind;
use crate::infrastructure::config::config_store::HeimdallConfig;

/// ホスト名からプラットフォームを判定する
///
/// 判定順: 設定ファイルのテーブル → 組み込みのSaaSホスト → 先頭ラベル（`gitlab.` / `github.`）。
/// ネットワークアクセスは行わない。
#[derive(Debug, Clone)]
pub struct PlatformDetector {
    lookup: HashMap<String, PlatformKind>,
}

impl Default for PlatformDetector {
    fn default() -> Self {
        let mut lookup = HashMap::new();
        lookup.insert("gitlab.com".to_string(), PlatformKind::GitLab);
        lookup.insert("github.com".to_string(), PlatformKind::GitHub);
        Self { lookup }
    }
}

impl PlatformDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定ファイルの `platforms` を組み込みテーブルに上書きする
    pub fn from_config(config: &HeimdallConfig) -> Self {
        config
            .platforms
            .iter()
            .fold(Self::new(), |detector, entry| {
                detector.with_platform(&entry.hostname, entry.platform)
            })
    }

    pub fn with_platform(mut self, hostname: &str, kind: PlatformKind) -> Self {
        self.lookup.insert(hostname.to_lowercase(), kind);
        self
    }

    /// プラットフォームを判定する
    pub fn detect(&self, hostname: &str) -> PlatformKind {
        let hostname = hostname.to_lowercase();
        if let Some(kind) = self.lookup.get(&hostname) {
            return *kind;
        }

        match hostname.split('.').next() {
            Some("gitlab") if hostname.contains('.') => PlatformKind::GitLab,
            Some("github") if hostname.contains('.') => PlatformKind::GitHub,
            _ => PlatformKind::Unsupported,
        }
    }
}
