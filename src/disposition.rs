//! Content-Dispositionヘッダー値の組み立て

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::encoder;
use crate::error::Error;
use crate::transliterate::{default_transliterator, Transliterator};

/// ディスポジション種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispositionKind {
    /// ダウンロードさせる
    Attachment,
    /// ブラウザ内で表示させる
    Inline,
}

impl DispositionKind {
    /// ヘッダーに書き出すキーワード
    pub fn as_str(&self) -> &'static str {
        match self {
            DispositionKind::Attachment => "attachment",
            DispositionKind::Inline => "inline",
        }
    }
}

impl fmt::Display for DispositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for DispositionKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for DispositionKind {
    type Err = Error;

    /// `attachment` / `inline` のみ受け付ける（大文字小文字は区別する）
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "attachment" => Ok(DispositionKind::Attachment),
            "inline" => Ok(DispositionKind::Inline),
            _ => Err(Error::InvalidDispositionKind(format!("{:?}", kind))),
        }
    }
}

/// Content-Dispositionの値オブジェクト
///
/// `to_ascii` が `None` の場合はプロセス全体のデフォルト変換器を使う。
#[derive(Clone)]
pub struct ContentDisposition<'a> {
    pub kind: DispositionKind,
    pub filename: Option<String>,
    pub to_ascii: Option<&'a dyn Transliterator>,
}

impl fmt::Debug for ContentDisposition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentDisposition")
            .field("kind", &self.kind)
            .field("filename", &self.filename)
            .field("to_ascii", &self.to_ascii.map(|_| "custom"))
            .finish()
    }
}

impl<'a> ContentDisposition<'a> {
    /// 文字列の種別から作成（未知の種別はエラー）
    pub fn new(kind: impl AsRef<str>, filename: Option<&str>) -> Result<Self, Error> {
        let kind = kind.as_ref().parse::<DispositionKind>()?;
        Ok(Self::with_kind(kind, filename))
    }

    /// 種別を指定して作成
    pub fn with_kind(kind: DispositionKind, filename: Option<&str>) -> Self {
        Self {
            kind,
            filename: filename.map(str::to_string),
            to_ascii: None,
        }
    }

    /// `attachment` を作成
    pub fn attachment() -> Self {
        Self::with_kind(DispositionKind::Attachment, None)
    }

    /// `inline` を作成
    pub fn inline() -> Self {
        Self::with_kind(DispositionKind::Inline, None)
    }

    /// ファイル名を設定
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// ASCII変換器を設定
    pub fn with_transliterator(mut self, to_ascii: &'a dyn Transliterator) -> Self {
        self.to_ascii = Some(to_ascii);
        self
    }

    fn transliterator(&self) -> &'a dyn Transliterator {
        match self.to_ascii {
            Some(t) => t,
            None => default_transliterator(),
        }
    }

    /// 従来形式の `filename="..."`（ファイル名が無ければ `None`）
    pub fn ascii_parameter(&self) -> Result<Option<String>, Error> {
        self.filename
            .as_deref()
            .map(|name| encoder::ascii_parameter(name, self.transliterator()))
            .transpose()
    }

    /// RFC 5987 形式の `filename*=UTF-8''...`（ファイル名が無ければ `None`）
    pub fn utf8_parameter(&self) -> Option<String> {
        self.filename.as_deref().map(encoder::utf8_parameter)
    }

    /// Content-Dispositionヘッダー値を生成
    ///
    /// 従来形式を先、拡張形式を後に並べる。空文字列のファイル名も「あり」として扱う。
    pub fn to_header_value(&self) -> Result<String, Error> {
        let Some(filename) = self.filename.as_deref() else {
            return Ok(self.kind.to_string());
        };

        let ascii = encoder::ascii_parameter(filename, self.transliterator())?;
        let value = format!("{}; {}; {}", self.kind, ascii, encoder::utf8_parameter(filename));
        log::debug!("Formatted Content-Disposition: {}", value);
        Ok(value)
    }
}
