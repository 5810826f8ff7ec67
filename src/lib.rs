//! content-disposition: HTTP `Content-Disposition` ヘッダー値のフォーマッタ
//!
//! ファイル名を RFC 6266 / RFC 5987 に従い、従来形式の `filename="..."` と
//! UTF-8 拡張形式の `filename*=UTF-8''...` の2つのパラメータとして書き出す。
//!
//! ```
//! let value = content_disposition::attachment(Some("racecar.jpg")).unwrap();
//! assert_eq!(value, "attachment; filename=\"racecar.jpg\"; filename*=UTF-8''racecar.jpg");
//! ```

pub mod disposition;
pub mod encoder;
pub mod error;
pub mod transliterate;

pub use disposition::{ContentDisposition, DispositionKind};
pub use error::Error;
pub use transliterate::{
    default_transliterator, set_default_transliterator, ReplaceNonAscii, Transliterator,
};

/// Content-Dispositionヘッダー値を生成
///
/// `kind` は文字列または `DispositionKind`。`to_ascii` を省略するとデフォルト変換器を使う。
pub fn format(
    kind: impl AsRef<str>,
    filename: Option<&str>,
    to_ascii: Option<&dyn Transliterator>,
) -> Result<String, Error> {
    let mut disposition = ContentDisposition::new(kind, filename)?;
    disposition.to_ascii = to_ascii;
    disposition.to_header_value()
}

/// `attachment` のヘッダー値を生成
pub fn attachment(filename: Option<&str>) -> Result<String, Error> {
    ContentDisposition::with_kind(DispositionKind::Attachment, filename).to_header_value()
}

/// `inline` のヘッダー値を生成
pub fn inline(filename: Option<&str>) -> Result<String, Error> {
    ContentDisposition::with_kind(DispositionKind::Inline, filename).to_header_value()
}
