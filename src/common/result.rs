use crate::common::error::HeimdallError;

/// heimdall全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use heimdall::common::result::HeimdallResult;
/// use heimdall::common::error::HeimdallError;
///
/// fn example_function() -> HeimdallResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> HeimdallResult<()> {
///     Err(HeimdallError::config_error("Something went wrong"))
/// }
/// ```
pub type HeimdallResult<T> = Result<T, HeimdallError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// OptionをConfigErrorとしてHeimdallResultに変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use heimdall::common::result::{HeimdallResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: HeimdallResult<String> = none_value.ok_or_config_error("home directory not found");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_config_error(self, message: impl Into<String>) -> HeimdallResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_config_error(self, message: impl Into<String>) -> HeimdallResult<T> {
        self.ok_or_else(|| HeimdallError::config_error(message))
    }
}

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T, E> {
    /// ファイルシステムエラーとしてHeimdallResultに変換
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> HeimdallResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> HeimdallResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| {
            let io_error = e.into();
            HeimdallError::filesystem_error_with_source(message, path, io_error)
        })
    }
}
