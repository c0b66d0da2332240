pub mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;

use crate::common::logging::{init_logging, LOG_FILE_NAME};
use crate::common::reporter::{ConsoleReporter, Reporter};
use crate::domain::entities::workspace_config::WorkspaceConfig;
use crate::infrastructure::config::config_store::{ConfigStore, HeimdallConfig};
use crate::presentation::cli::commands::git_clone::{GitCloneArgs, GitCloneCommand};

const VERSION_INFO: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

/// heimdall - Clone repositories into a tree mirroring their URL
#[derive(Parser)]
#[command(name = "heimdall")]
#[command(about = "Clone repositories and whole GitLab groups / GitHub organizations")]
#[command(version = VERSION_INFO)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/heimdall/heimdall.yml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root directory for cloned repositories
    #[arg(short, long, global = true, env = "HEIMDALL_WORK_DIR", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Directory of the log file
    #[arg(short, long, global = true, env = "HEIMDALL_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clone a repository, or every repository of a group with --clone-group
    #[command(name = "git-clone", visible_alias = "gc")]
    GitClone(GitCloneArgs),
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        // Otherwise colored decides from the terminal and CLICOLOR
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        let config = ConfigStore::load_or_default(self.cli.config.as_deref())?;
        let workspace = self.resolve_workspace(&config)?;

        let _guard = init_logging(workspace.log_dir(), workspace.verbose)?;
        ConsoleReporter::new(workspace.verbose).trace(
            &format!(
                "📝 Log file written in {}",
                workspace.log_dir().join(LOG_FILE_NAME).display()
            ),
            false,
        );
        tracing::debug!("Work dir is {}", workspace.work_dir().display());

        match &self.cli.command {
            Commands::GitClone(args) => {
                GitCloneCommand::new(args.clone(), workspace)
                    .execute(&config)
                    .await
            }
        }
    }

    /// Flag or environment variable, then configuration file, then default
    fn resolve_workspace(&self, config: &HeimdallConfig) -> anyhow::Result<WorkspaceConfig> {
        let work_dir = match self.cli.work_dir.clone().or_else(|| config.work_dir.clone()) {
            Some(dir) => dir,
            None => ConfigStore::default_work_dir()?,
        };
        let log_dir = match self.cli.log_dir.clone().or_else(|| config.log_dir.clone()) {
            Some(dir) => dir,
            None => ConfigStore::default_log_dir()?,
        };

        Ok(WorkspaceConfig::new(work_dir, log_dir)
            .with_verbose(self.cli.verbose)
            .with_no_color(self.cli.no_color))
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_gc_alias_parses_flags() {
        let cli = Cli::try_parse_from([
            "heimdall",
            "--work-dir",
            "/tmp/work",
            "gc",
            "https://gitlab.com/acme/platform",
            "-i",
            "-g",
        ])
        .unwrap();

        assert_eq!(cli.work_dir, Some(PathBuf::from("/tmp/work")));
        let Commands::GitClone(args) = cli.command;
        assert!(args.include_hostname);
        assert!(args.clone_group);
        assert!(!args.keep_hostname_suffix);
        assert_eq!(args.url.hostname(), "gitlab.com");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = Cli::try_parse_from(["heimdall", "git-clone", "not-a-url"]);
        assert!(result.is_err());
    }

    fn app(args: &[&str]) -> CliApp {
        CliApp {
            cli: Cli::try_parse_from(args).unwrap(),
        }
    }

    #[test]
    fn test_work_dir_flag_wins_over_config() {
        let config = HeimdallConfig {
            work_dir: Some(PathBuf::from("/from/config")),
            log_dir: Some(PathBuf::from("/logs/config")),
            ..Default::default()
        };
        let app = app(&[
            "heimdall",
            "--work-dir",
            "/from/flag",
            "gc",
            "https://github.com/acme/api",
        ]);

        let workspace = app.resolve_workspace(&config).unwrap();
        assert_eq!(workspace.work_dir(), Path::new("/from/flag"));
        assert_eq!(workspace.log_dir(), Path::new("/logs/config"));
    }

    #[test]
    fn test_no_color_flag_sets_workspace() {
        let app = app(&[
            "heimdall",
            "--no-color",
            "--work-dir",
            "/w",
            "--log-dir",
            "/l",
            "gc",
            "https://github.com/acme/api",
        ]);

        let workspace = app.resolve_workspace(&HeimdallConfig::default()).unwrap();
        assert!(workspace.no_color);
    }
}
