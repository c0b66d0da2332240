/// クローン時のパス生成・動作オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneOptions {
    /// ローカルパスにホスト名を含めるか
    pub include_hostname_in_path: bool,

    /// ホスト名のサフィックス（.com、.io等）を残すか
    ///
    /// `include_hostname_in_path` が無効な場合は意味を持たない。
    pub keep_hostname_suffix: bool,

    /// グループ（組織）配下の全リポジトリをクローンするか
    pub is_group_clone: bool,
}

impl CloneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_hostname(mut self, include_hostname_in_path: bool) -> Self {
        self.include_hostname_in_path = include_hostname_in_path;
        self
    }

    pub fn with_keep_hostname_suffix(mut self, keep_hostname_suffix: bool) -> Self {
        self.keep_hostname_suffix = keep_hostname_suffix;
        self
    }

    pub fn with_group_clone(mut self, is_group_clone: bool) -> Self {
        self.is_group_clone = is_group_clone;
        self
    }

    /// サフィックス保持オプションが無視される組み合わせか
    pub fn is_keep_suffix_ignored(&self) -> bool {
        self.keep_hostname_suffix && !self.include_hostname_in_path
    }
}
