use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::error::HeimdallError;
use crate::common::result::{HeimdallResult, OptionExt, ResultExt};
use crate::domain::value_objects::platform_kind::PlatformKind;

/// Directory name used under the user's config / cache directories
pub const APP_DIR_NAME: &str = "heimdall";

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "heimdall.yml";

/// Contents of `heimdall.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeimdallConfig {
    /// Root directory repositories are cloned under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,

    /// Directory holding `heimdall.log`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Known hosting platforms and their credentials
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
}

/// One self-hosted or SaaS platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlatformEntry {
    #[validate(length(min = 1, max = 253))]
    pub hostname: String,

    #[serde(rename = "type")]
    pub platform: PlatformKind,

    /// Literal token, or `env.NAME` to read environment variable `NAME`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Loads the YAML configuration file
pub struct ConfigStore;

impl ConfigStore {
    /// `<user config dir>/heimdall/heimdall.yml`
    pub fn default_config_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(APP_DIR_NAME).join(DEFAULT_CONFIG_FILE))
    }

    /// The user's home directory
    pub fn default_work_dir() -> HeimdallResult<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_config_error("Cannot determine home directory for the default work dir")
    }

    /// `<user cache dir>/heimdall`
    pub fn default_log_dir() -> HeimdallResult<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.cache_dir().join(APP_DIR_NAME))
            .ok_or_config_error("Cannot determine cache directory for the default log dir")
    }

    /// Load the configuration.
    ///
    /// An explicitly given file must exist. When no path is given the default
    /// location is tried and a missing file yields an empty configuration.
    pub fn load_or_default(path: Option<&Path>) -> HeimdallResult<HeimdallConfig> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_config_path() {
                Some(default_path) if default_path.is_file() => Self::load(&default_path),
                _ => {
                    tracing::debug!("No configuration file found, using defaults");
                    Ok(HeimdallConfig::default())
                }
            },
        }
    }

    /// Read and validate a configuration file
    pub fn load(path: &Path) -> HeimdallResult<HeimdallConfig> {
        if !path.is_file() {
            return Err(HeimdallError::filesystem_error(
                format!("Configuration file not found: {}", path.display()),
                Some(path.to_path_buf()),
            ));
        }

        let content = std::fs::read_to_string(path)
            .with_filesystem_error("Cannot read configuration file", Some(path.to_path_buf()))?;
        tracing::debug!("Loading configuration from {}", path.display());
        Self::parse(&content)
    }

    /// Parse configuration content
    pub fn parse(content: &str) -> HeimdallResult<HeimdallConfig> {
        if content.trim().is_empty() {
            return Ok(HeimdallConfig::default());
        }

        let config: HeimdallConfig = serde_yaml::from_str(content)?;
        for entry in &config.platforms {
            entry.validate().map_err(|e| {
                HeimdallError::validation_error(
                    "platforms.hostname",
                    e.to_string(),
                    Some(entry.hostname.clone()),
                )
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
work_dir: /home/me/dev
platforms:
  - hostname: gitlab.example.com
    type: gitlab
    token: env.GITLAB_TOKEN
  - hostname: github.com
    type: github
    token: ghp_literal
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = ConfigStore::parse(SAMPLE).unwrap();
        assert_eq!(config.work_dir, Some(PathBuf::from("/home/me/dev")));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.platforms.len(), 2);
        assert_eq!(config.platforms[0].platform, PlatformKind::GitLab);
        assert_eq!(config.platforms[0].token.as_deref(), Some("env.GITLAB_TOKEN"));
        assert_eq!(config.platforms[1].platform, PlatformKind::GitHub);
    }

    #[test]
    fn test_parse_empty_content() {
        let config = ConfigStore::parse("  \n").unwrap();
        assert_eq!(config, HeimdallConfig::default());
    }

    #[test]
    fn test_parse_rejects_empty_hostname() {
        let content = "platforms:\n  - hostname: \"\"\n    type: gitlab\n";
        let result = ConfigStore::parse(content);
        assert!(matches!(result, Err(HeimdallError::ValidationError { .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_platform() {
        let content = "platforms:\n  - hostname: git.example.org\n    type: gitea\n";
        let result = ConfigStore::parse(content);
        assert!(matches!(result, Err(HeimdallError::SerializationError { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, SAMPLE).unwrap();

        let config = ConfigStore::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.platforms.len(), 2);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yml");

        let result = ConfigStore::load_or_default(Some(&path));
        assert!(matches!(result, Err(HeimdallError::FileSystemError { .. })));
    }
}
