use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// コマンド実行単位の設定値
///
/// プロセス全体の状態としてではなく、ユースケースへ明示的に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// クローン先のルートディレクトリ
    work_dir: PathBuf,

    /// ログファイルの出力先ディレクトリ
    log_dir: PathBuf,

    /// 詳細ログを出力するか
    pub verbose: bool,

    /// 色付き出力を無効にするか
    pub no_color: bool,
}

impl WorkspaceConfig {
    pub fn new(work_dir: impl Into<PathBuf>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            log_dir: log_dir.into(),
            verbose: false,
            no_color: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// 常にパス区切り文字で終わるワークディレクトリ文字列
    pub fn work_dir_prefix(&self) -> String {
        let mut prefix = self.work_dir.to_string_lossy().into_owned();
        if !prefix.ends_with('/') && !prefix.ends_with(MAIN_SEPARATOR) {
            prefix.push('/');
        }
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_dir_prefix_appends_separator() {
        let config = WorkspaceConfig::new("/home/me/dev", "/tmp/logs");
        assert_eq!(config.work_dir_prefix(), "/home/me/dev/");
    }

    #[test]
    fn test_work_dir_prefix_keeps_existing_separator() {
        let config = WorkspaceConfig::new("/home/me/dev/", "/tmp/logs");
        assert_eq!(config.work_dir_prefix(), "/home/me/dev/");
    }

    #[test]
    fn test_builder_flags() {
        let config = WorkspaceConfig::new("/w", "/l")
            .with_verbose(true)
            .with_no_color(true);
        assert!(config.verbose);
        assert!(config.no_color);
        assert_eq!(config.work_dir(), Path::new("/w"));
        assert_eq!(config.log_dir(), Path::new("/l"));
    }
}
