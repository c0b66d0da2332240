use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

use crate::application::services::platform_detector::PlatformDetector;
use crate::application::use_cases::clone_repositories::{
    CloneRepositoriesUseCase, CloneSummary,
};
use crate::common::reporter::{ConsoleReporter, Reporter};
use crate::domain::entities::{clone_options::CloneOptions, workspace_config::WorkspaceConfig};
use crate::domain::value_objects::repository_url::RepositoryReference;
use crate::infrastructure::config::{config_store::HeimdallConfig, token_store::ConfiguredTokens};

/// Arguments of the `git-clone` command
#[derive(Debug, Clone, Args)]
pub struct GitCloneArgs {
    /// URL of the repository (or group / organization with --clone-group)
    #[arg(value_name = "URL", value_parser = parse_repository_url)]
    pub url: RepositoryReference,

    /// Include hostname in the local path
    #[arg(short, long)]
    pub include_hostname: bool,

    /// Keep the hostname suffix (.com, .org, ...) in the local path
    #[arg(short, long)]
    pub keep_hostname_suffix: bool,

    /// Clone every repository of the group / organization
    #[arg(short = 'g', long)]
    pub clone_group: bool,
}

impl GitCloneArgs {
    pub fn clone_options(&self) -> CloneOptions {
        CloneOptions::new()
            .with_include_hostname(self.include_hostname)
            .with_keep_hostname_suffix(self.keep_hostname_suffix)
            .with_group_clone(self.clone_group)
    }
}

/// Only absolute URLs with a host are accepted
pub fn parse_repository_url(value: &str) -> std::result::Result<RepositoryReference, String> {
    RepositoryReference::parse(value).map_err(|e| e.to_string())
}

/// Clone a repository or a whole group
pub struct GitCloneCommand {
    args: GitCloneArgs,
    workspace: WorkspaceConfig,
}

impl GitCloneCommand {
    pub fn new(args: GitCloneArgs, workspace: WorkspaceConfig) -> Self {
        Self { args, workspace }
    }

    /// Execute the git-clone command
    pub async fn execute(&self, config: &HeimdallConfig) -> Result<()> {
        let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter::new(self.workspace.verbose));
        let use_case = CloneRepositoriesUseCase::new(
            self.workspace.clone(),
            self.args.clone_options(),
            PlatformDetector::from_config(config),
            Arc::new(ConfiguredTokens::from_config(config)),
            reporter,
        );

        let summary = use_case.execute(&self.args.url).await?;

        if self.args.clone_group {
            self.print_summary(&summary);
        }

        Ok(())
    }

    fn print_summary(&self, summary: &CloneSummary) {
        let failed = summary.failed.len();
        let failed_text = format!("{} failed", failed);
        println!(
            "{} {} cloned, {}",
            "::".blue().bold(),
            summary.cloned,
            if failed > 0 {
                failed_text.red()
            } else {
                failed_text.normal()
            }
        );

        if self.workspace.verbose {
            for (url, reason) in &summary.failed {
                println!("  {}: {}", url.bold(), reason.red());
            }
        }
    }
}
