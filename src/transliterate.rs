//! ASCII変換（翻字）の抽象化とデフォルト実装

use std::sync::OnceLock;
use crate::error::Error;

/// Unicode文字列をASCII文字列へ変換する特性
///
/// 値オブジェクトをスレッド間で受け渡せるよう `Send + Sync` を要求する。
#[cfg_attr(test, mockall::automock)]
pub trait Transliterator: Send + Sync {
    /// 文字列をASCIIへ変換
    fn to_ascii(&self, text: &str) -> Result<String, Error>;
}

/// クロージャ・関数をそのまま変換器として使えるようにする
impl<F> Transliterator for F
where
    F: Fn(&str) -> Result<String, Error> + Send + Sync,
{
    fn to_ascii(&self, text: &str) -> Result<String, Error> {
        self(text)
    }
}

/// 非ASCII文字を1文字ずつ置換文字に差し替える変換器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceNonAscii {
    replacement: char,
}

impl ReplaceNonAscii {
    /// 置換文字を指定して作成
    pub const fn new(replacement: char) -> Self {
        Self { replacement }
    }
}

impl Default for ReplaceNonAscii {
    fn default() -> Self {
        Self::new('?')
    }
}

impl Transliterator for ReplaceNonAscii {
    fn to_ascii(&self, text: &str) -> Result<String, Error> {
        Ok(text
            .chars()
            .map(|c| if c.is_ascii() { c } else { self.replacement })
            .collect())
    }
}

static BUILTIN: ReplaceNonAscii = ReplaceNonAscii::new('?');

static DEFAULT: OnceLock<Box<dyn Transliterator>> = OnceLock::new();

/// プロセス全体のデフォルト変換器を設定する
///
/// 設定できるのは一度だけ。並行して整形を行う前（初期化時）に呼び出すこと。
/// 二度目以降の呼び出しは `Error::ConfigurationError` を返し、最初の設定が維持される。
pub fn set_default_transliterator<T>(transliterator: T) -> Result<(), Error>
where
    T: Transliterator + 'static,
{
    DEFAULT.set(Box::new(transliterator)).map_err(|_| {
        log::warn!("set_default_transliterator called after a default was already installed");
        Error::ConfigurationError("default transliterator is already set".into())
    })
}

/// 現在のデフォルト変換器を取得（未設定なら `?` 置換）
pub fn default_transliterator() -> &'static dyn Transliterator {
    match DEFAULT.get() {
        Some(t) => t.as_ref(),
        None => &BUILTIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_non_ascii_default() {
        let t = ReplaceNonAscii::default();
        assert_eq!(t, ReplaceNonAscii::new('?'));
        assert_eq!(t.to_ascii("råcëçâr.jpg").unwrap(), "r?c???r.jpg");
        assert_eq!(t.to_ascii("автомобиль.jpg").unwrap(), "??????????.jpg");
    }

    #[test]
    fn test_replace_non_ascii_passes_ascii_through() {
        let t = ReplaceNonAscii::default();
        let ascii = "plain ASCII: !\"#$%&'()*+,-./ 0-9 ~\x7f\t";
        assert_eq!(t.to_ascii(ascii).unwrap(), ascii);
        assert_eq!(t.to_ascii("").unwrap(), "");
    }

    #[test]
    fn test_replace_non_ascii_one_replacement_per_char() {
        // 4バイト文字（絵文字）も1文字として置換される
        let t = ReplaceNonAscii::new('_');
        assert_eq!(t.to_ascii("a😀b").unwrap(), "a_b");
    }

    #[test]
    fn test_closure_transliterator() {
        let upper = |s: &str| -> Result<String, Error> { Ok(s.to_ascii_uppercase()) };
        assert_eq!(upper.to_ascii("abc").unwrap(), "ABC");

        let failing = |_: &str| -> Result<String, Error> {
            Err(Error::TransliterationError("nope".into()))
        };
        assert_eq!(
            failing.to_ascii("x"),
            Err(Error::TransliterationError("nope".into()))
        );
    }

    #[test]
    fn test_default_transliterator_is_question_mark() {
        // 単体テストのプロセスではデフォルトを設定しない
        assert_eq!(default_transliterator().to_ascii("é").unwrap(), "?");
    }
}
