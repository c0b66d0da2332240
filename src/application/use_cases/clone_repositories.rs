use std::sync::Arc;

use colored::Colorize;
use thiserror::Error;

use crate::application::services::{
    clone_executor::{CloneExecutor, CloneOutcome},
    group_expander::GroupExpander,
    path_resolver::PathResolver,
    platform_detector::PlatformDetector,
};
use crate::common::reporter::Reporter;
use crate::domain::entities::{
    clone_options::CloneOptions, clone_plan::ClonePlan, workspace_config::WorkspaceConfig,
};
use crate::domain::value_objects::{
    platform_kind::PlatformKind, repository_url::RepositoryReference,
};
use crate::infrastructure::config::token_store::TokenProvider;
use crate::infrastructure::git::cloner::{Git2Cloner, GitCloner};
use crate::infrastructure::platform::{
    platform_factory::PlatformFactory, platform_interface::PlatformError,
};

/// CloneRepositories関連のエラー
#[derive(Debug, Error)]
pub enum CloneRepositoriesError {
    #[error("Impossible to log to {host}: {source}")]
    GroupAuthenticationFailed {
        host: String,
        #[source]
        source: PlatformError,
    },
}

/// クローン操作の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneSummary {
    /// グループクローン時に判定されたプラットフォーム
    pub platform: Option<PlatformKind>,

    /// クローンを試行したリポジトリの数
    pub attempted: usize,

    /// クローンに成功したリポジトリの数
    pub cloned: usize,

    /// 失敗したリポジトリ（URL, 理由）
    pub failed: Vec<(String, String)>,
}

impl CloneSummary {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, url: String, outcome: CloneOutcome) {
        self.attempted += 1;
        match outcome {
            CloneOutcome::Cloned => self.cloned += 1,
            CloneOutcome::Failed(reason) => self.failed.push((url, reason)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// リポジトリクローンのユースケース
///
/// 単一クローン: `Idle → Cloning(1) → Done`
/// グループクローン: `Idle → Detecting → Expanding → Cloning(N) → Done`
///
/// リポジトリは1件ずつ順番に処理され、1件の失敗で残りが中断されることはない。
pub struct CloneRepositoriesUseCase {
    /// 実行設定
    workspace: WorkspaceConfig,

    /// クローンオプション
    options: CloneOptions,

    detector: PlatformDetector,
    tokens: Arc<dyn TokenProvider>,
    reporter: Arc<dyn Reporter>,
    executor: CloneExecutor,
    expander: GroupExpander,
}

impl CloneRepositoriesUseCase {
    /// libgit2でクローンするユースケースを作成
    pub fn new(
        workspace: WorkspaceConfig,
        options: CloneOptions,
        detector: PlatformDetector,
        tokens: Arc<dyn TokenProvider>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let executor = CloneExecutor::new(
            Arc::new(Git2Cloner::new()),
            Arc::clone(&tokens),
            Arc::clone(&reporter),
        );
        let expander = GroupExpander::new(Arc::clone(&reporter));

        Self {
            workspace,
            options,
            detector,
            tokens,
            reporter,
            executor,
            expander,
        }
    }

    /// クローン処理の実装を差し替える
    pub fn with_cloner(mut self, cloner: Arc<dyn GitCloner>) -> Self {
        self.executor = CloneExecutor::new(
            cloner,
            Arc::clone(&self.tokens),
            Arc::clone(&self.reporter),
        );
        self
    }

    /// クローンを実行
    pub async fn execute(
        &self,
        url: &RepositoryReference,
    ) -> Result<CloneSummary, CloneRepositoriesError> {
        if self.options.is_keep_suffix_ignored() {
            self.reporter.warn(&format!(
                "{} option is ignored because {} option is not enabled",
                "keep-hostname-suffix".bold(),
                "include-hostname".bold()
            ));
        }

        let mut summary = CloneSummary::new();

        if !self.options.is_group_clone {
            let outcome = self.clone_repository(url).await;
            summary.record(url.url(), outcome);
            return Ok(summary);
        }

        // 1. プラットフォームの判定
        let platform = self.detector.detect(url.hostname());
        summary.platform = Some(platform);
        if !platform.is_supported() {
            self.reporter
                .warn("Platform type not supported yet (only gitlab & github for now)");
            return Ok(summary);
        }

        // 2. グループの展開
        let repositories = match self.expand_group(url, platform).await {
            Ok(repositories) => repositories,
            Err(e) if e.is_authentication() => {
                self.reporter.warn(&format!(
                    "Impossible to log to {}: {}",
                    url.hostname(),
                    e.to_string().red()
                ));
                return Err(CloneRepositoriesError::GroupAuthenticationFailed {
                    host: url.hostname().to_string(),
                    source: e,
                });
            }
            Err(e) => {
                self.reporter.warn(&format!(
                    "Cannot retrieve projects from group : {}",
                    e.to_string().red()
                ));
                return Ok(summary);
            }
        };

        // 3. 順番にクローン
        for repository in &repositories {
            let outcome = self.clone_repository(repository).await;
            summary.record(repository.url(), outcome);
        }

        Ok(summary)
    }

    async fn expand_group(
        &self,
        group: &RepositoryReference,
        platform: PlatformKind,
    ) -> Result<Vec<RepositoryReference>, PlatformError> {
        let token = self.tokens.token(group.hostname());
        let client = PlatformFactory::create_client(platform, group, &token)?;
        self.expander.expand(group, platform, client.as_ref()).await
    }

    async fn clone_repository(&self, repository: &RepositoryReference) -> CloneOutcome {
        self.reporter.trace(
            &format!(
                "{} {}",
                "🧬 Cloning".bright_blue(),
                format!("{}...", repository).cyan()
            ),
            false,
        );

        let destination = PathResolver::resolve_path(repository, &self.options, &self.workspace);
        let plan = ClonePlan::new(repository.clone(), destination);
        let outcome = self.executor.execute(&plan).await;

        if outcome.is_cloned() {
            self.reporter.trace(
                &format!(
                    "{} {} {}",
                    "✅".bright_blue(),
                    repository.to_string().cyan(),
                    "cloned".bright_blue()
                ),
                false,
            );
        }

        outcome
    }
}
