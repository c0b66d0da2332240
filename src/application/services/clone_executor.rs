use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;

use super::path_resolver::PathResolver;
use crate::common::reporter::Reporter;
use crate::domain::entities::clone_plan::ClonePlan;
use crate::infrastructure::config::token_store::TokenProvider;
use crate::infrastructure::git::cloner::{BasicAuth, GitCloner};

/// 1リポジトリ分のクローン結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    /// クローン成功
    Cloned,
    /// 失敗（理由は報告済み）
    Failed(String),
}

impl CloneOutcome {
    pub fn is_cloned(&self) -> bool {
        matches!(self, CloneOutcome::Cloned)
    }
}

/// クローン先の作成・認証・クローン実行を行う
///
/// 失敗は警告として報告し、呼び出し元のバッチ処理は継続できる。
pub struct CloneExecutor {
    cloner: Arc<dyn GitCloner>,
    tokens: Arc<dyn TokenProvider>,
    reporter: Arc<dyn Reporter>,
}

impl CloneExecutor {
    pub fn new(
        cloner: Arc<dyn GitCloner>,
        tokens: Arc<dyn TokenProvider>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            cloner,
            tokens,
            reporter,
        }
    }

    /// クローン計画を実行する
    pub async fn execute(&self, plan: &ClonePlan) -> CloneOutcome {
        let destination = PathBuf::from(
            PathResolver::collapse_separators(&plan.destination().to_string_lossy()).into_owned(),
        );

        self.reporter
            .trace(&format!("Create directory {}", destination.display()), true);
        if let Err(e) = tokio::fs::create_dir_all(&destination).await {
            self.reporter.warn(&format!(
                "❌ Cannot create path : {}",
                e.to_string().red()
            ));
            return CloneOutcome::Failed(format!("Cannot create path {}: {}", destination.display(), e));
        }

        let source = plan.source();
        let credentials = BasicAuth::token(self.tokens.token(source.hostname()));
        match self
            .cloner
            .clone_repository(&source.clone_url(), &destination, &credentials)
            .await
        {
            Ok(()) => CloneOutcome::Cloned,
            Err(e) => {
                self.reporter
                    .warn(&format!("❌ Git clone failed: {}", e.to_string().red()));
                CloneOutcome::Failed(e.to_string())
            }
        }
    }
}
