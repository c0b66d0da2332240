use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// リポジトリURL関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum RepositoryUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// リポジトリ（またはグループ）を指すURLの値オブジェクト
///
/// パスセグメントは末尾の`.git`を含まない正規形で保持する。
/// `.git`はクローン時に [`RepositoryReference::clone_url`] でのみ付与される。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryReference {
    /// URLのスキーム（https、http等）
    scheme: String,

    /// ホスト名（小文字化済み）
    hostname: String,

    /// 明示されたポート番号（スキームのデフォルトポートは含まない）
    port: Option<u16>,

    /// 空要素を除いたパスセグメント
    path_segments: Vec<String>,
}

impl RepositoryReference {
    /// 文字列から解析する
    pub fn parse(url: &str) -> Result<Self, RepositoryUrlError> {
        let trimmed = url.trim();
        let parsed =
            Url::parse(trimmed).map_err(|_| RepositoryUrlError::InvalidFormat(trimmed.to_string()))?;
        Self::from_url(&parsed)
    }

    /// 解析済みの [`Url`] から作成する
    pub fn from_url(url: &Url) -> Result<Self, RepositoryUrlError> {
        let hostname = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| RepositoryUrlError::MissingHost(url.to_string()))?
            .to_string();

        let mut path_segments: Vec<String> = url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        // .gitサフィックスを除去
        if let Some(last) = path_segments.last_mut() {
            if let Some(stripped) = last.strip_suffix(".git") {
                *last = stripped.to_string();
            }
        }
        path_segments.retain(|segment| !segment.is_empty());

        Ok(Self {
            scheme: url.scheme().to_string(),
            hostname,
            port: url.port(),
            path_segments,
        })
    }

    /// スキームを取得
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// ホスト名を取得
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// ポート番号を取得
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// パスセグメントを取得
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// 先頭に`/`を持つURLパス（パーセントエンコードはデコード済み）
    ///
    /// 不正なUTF-8になるセグメントはエンコードされたまま残す。
    pub fn path(&self) -> String {
        let decoded: Vec<Cow<'_, str>> = self
            .path_segments
            .iter()
            .map(|segment| urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment.as_str())))
            .collect();
        format!("/{}", decoded.join("/"))
    }

    /// URLに埋め込むエンコード済みのパス
    fn encoded_path(&self) -> String {
        format!("/{}", self.path_segments.join("/"))
    }

    /// `host[:port]` 形式
    pub fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.hostname, port),
            None => self.hostname.clone(),
        }
    }

    /// `scheme://host[:port]` 形式
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.authority())
    }

    /// 正規化されたブラウズ用URL（`.git`なし）
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url(), self.encoded_path())
    }

    /// クローン対象のURL（`.git`付き）
    pub fn clone_url(&self) -> String {
        format!("{}.git", self.url())
    }

    /// リポジトリ名（最後のパスセグメント）を取得
    pub fn repo_name(&self) -> Option<&str> {
        self.path_segments.last().map(String::as_str)
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

impl FromStr for RepositoryReference {
    type Err = RepositoryUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RepositoryReference {
    type Error = RepositoryUrlError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        Self::parse(url)
    }
}
