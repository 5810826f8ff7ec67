//! ファイル名パラメータのエンコード（従来形式 `filename=` と RFC 5987 形式 `filename*=`）

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use crate::error::Error;
use crate::transliterate::Transliterator;

/// 従来形式で%エスケープする文字集合
/// 安全: 空白, 英数字, `! # $ + . ^ _ ` | ~ -`
const TRADITIONAL_ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'+')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~')
    .remove(b'-');

/// RFC 5987 の attr-char 以外をエスケープする文字集合
/// 従来形式との差分: 空白は不可、`&` は可
const RFC_5987_ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~')
    .remove(b'-');

/// 拡張パラメータの文字セット・言語タグ（言語タグは空）
const UTF8_CHARSET_PREFIX: &str = "UTF-8''";

// 非ASCIIバイトは集合に関係なく常に%XX（大文字16進）になる
fn percent_escape(text: &str, escaped: &'static AsciiSet) -> String {
    utf8_percent_encode(text, escaped).to_string()
}

/// 従来形式の `filename="..."` パラメータを生成
///
/// 変換器でASCII化した後にエスケープする。変換器のエラーはそのまま返す。
pub fn ascii_parameter(filename: &str, to_ascii: &dyn Transliterator) -> Result<String, Error> {
    let ascii = to_ascii.to_ascii(filename)?;
    Ok(format!("filename=\"{}\"", percent_escape(&ascii, TRADITIONAL_ESCAPED)))
}

/// RFC 5987 形式の `filename*=UTF-8''...` パラメータを生成
pub fn utf8_parameter(filename: &str) -> String {
    format!(
        "filename*={}{}",
        UTF8_CHARSET_PREFIX,
        percent_escape(filename, RFC_5987_ESCAPED)
    )
}
