//! 翻訳の差し替え口
//!
//! 照合前に入力職務をカタログの言語へ翻訳する。実装は呼び出し側が
//! 注入する（CLIではAI CLIを使う）。テスト用に無変換の実装を用意する。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 言語
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Locale {
    En,
    ZhCn,
    Other(String),
}

impl Locale {
    pub fn code(&self) -> &str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
            Locale::Other(code) => code,
        }
    }

    /// プロンプト用の言語名
    pub fn english_name(&self) -> &str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "Simplified Chinese",
            Locale::Other(code) => code,
        }
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Locale::En,
            "zh" | "zh-cn" | "zh_cn" | "chinese" => Locale::ZhCn,
            _ => Locale::Other(s.trim().to_string()),
        }
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("locale must not be empty".to_string());
        }
        Ok(Locale::from(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 翻訳器
pub trait Translator {
    /// 1行を翻訳する。失敗は `Error::Translation` で返す
    fn translate(&self, text: &str, source: &Locale, target: &Locale) -> Result<String>;
}

/// 入力をそのまま返す翻訳器
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str, _source: &Locale, _target: &Locale) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ja".parse::<Locale>().unwrap(), Locale::Other("ja".into()));
        assert!("  ".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_as_code() {
        let json = serde_json::to_string(&Locale::ZhCn).unwrap();
        assert_eq!(json, "\"zh-CN\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::ZhCn);
    }

    #[test]
    fn test_passthrough() {
        let out = PassthroughTranslator
            .translate("招聘计划", &Locale::ZhCn, &Locale::En)
            .unwrap();
        assert_eq!(out, "招聘计划");
    }
}
