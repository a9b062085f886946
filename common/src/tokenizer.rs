//! トークナイザ
//!
//! 小文字化し、2文字以上の単語（Unicode の \w）を抽出する。
//! ストップワード除去は `StopWords` で切り替える。

use crate::stop_words::ENGLISH_STOP_WORDS;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ストップワード方針
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// 英語ストップワードを除去
    #[default]
    English,
    /// 除去しない
    None,
}

impl StopWords {
    pub fn is_stop_word(self, token: &str) -> bool {
        lazy_static::lazy_static! {
            static ref ENGLISH: HashSet<&'static str> =
                ENGLISH_STOP_WORDS.iter().copied().collect();
        }

        match self {
            StopWords::English => ENGLISH.contains(token),
            StopWords::None => false,
        }
    }
}

/// テキストをトークン列に分割
pub fn tokenize(text: &str, stop_words: StopWords) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(r"\b\w\w+\b").unwrap();
    }

    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !stop_words.is_stop_word(token))
        .map(str::to_string)
        .collect()
}
