//! エラー型の定義

use thiserror::Error;

/// ライブラリのエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `attachment` / `inline` 以外のディスポジション種別
    #[error("Invalid disposition kind: {0}")]
    InvalidDispositionKind(String),

    /// ASCII変換（翻字）の失敗
    #[error("Transliteration error: {0}")]
    TransliterationError(String),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidDispositionKind("\"unknown\"".into()).to_string(),
            "Invalid disposition kind: \"unknown\""
        );
        assert_eq!(
            Error::TransliterationError("boom".into()).to_string(),
            "Transliteration error: boom"
        );
        assert_eq!(
            Error::ConfigurationError("already set".into()).to_string(),
            "Configuration error: already set"
        );
    }
}
