//! AI CLI連携の翻訳器
//!
//! 1行ごとにAI CLI（claude/codex/gemini）を呼び出して翻訳する。
//! 失敗した場合はフォールバックせず、分析全体を中止する。

use crate::ai_provider::AiProvider;
use hr_pillar_common::{Error, Locale, Translator};
use indicatif::ProgressBar;
use std::process::Command;

pub struct CliTranslator {
    provider: AiProvider,
    progress: Option<ProgressBar>,
}

impl CliTranslator {
    pub fn new(provider: AiProvider) -> Self {
        Self { provider, progress: None }
    }

    /// 1行ごとに進捗を進める
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    fn run(&self, prompt: &str) -> Result<String, Error> {
        let args = self.provider.prompt_args(prompt);

        // Windowsではcmd /c経由
        #[cfg(windows)]
        let output = Command::new("cmd")
            .arg("/c")
            .arg(self.provider.command_name())
            .args(&args)
            .output();

        #[cfg(not(windows))]
        let output = Command::new(self.provider.command_name()).args(&args).output();

        let output = output.map_err(|e| {
            Error::Translation(format!("{} の起動に失敗: {}", self.provider, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Translation(format!(
                "{} failed (code {:?}): {}",
                self.provider,
                output.status.code(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Translator for CliTranslator {
    fn translate(&self, text: &str, source: &Locale, target: &Locale) -> Result<String, Error> {
        let prompt = build_translation_prompt(text, source, target);
        tracing::debug!(provider = %self.provider, prompt_len = prompt.len(), "translating line");

        let response = self.run(&prompt)?;
        let translated = clean_response(&response)
            .ok_or_else(|| Error::Translation(format!("空の翻訳結果: {}", text)))?;

        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
        tracing::debug!(source_text = %text, translated = %translated, "line translated");

        Ok(translated)
    }
}

/// 翻訳プロンプトを構築
pub fn build_translation_prompt(text: &str, source: &Locale, target: &Locale) -> String {
    format!(
        "Translate the following job responsibility from {} into {}. \
         Output only the translated text on a single line, with no quotes or explanation: {}",
        source.english_name(),
        target.english_name(),
        text.replace('\n', " ")
    )
}

/// レスポンスから翻訳文を取り出す（前後の空白・引用符を除去し、1行にまとめる）
pub fn clean_response(response: &str) -> Option<String> {
    let joined = response
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("```"))
        .collect::<Vec<_>>()
        .join(" ");
    let cleaned = joined
        .trim_matches(|c| c == '"' || c == '“' || c == '”' || c == '\'')
        .trim()
        .to_string();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_translation_prompt() {
        let prompt = build_translation_prompt("招聘计划\n制定", &Locale::ZhCn, &Locale::En);
        assert!(prompt.contains("Simplified Chinese"));
        assert!(prompt.contains("into English"));
        assert!(prompt.ends_with("招聘计划 制定"));
    }

    #[test]
    fn test_clean_response() {
        assert_eq!(
            clean_response("\n\"Recruitment Planning\"\n").as_deref(),
            Some("Recruitment Planning")
        );
        assert_eq!(
            clean_response("```\nHR Budget\nManagement\n```").as_deref(),
            Some("HR Budget Management")
        );
        assert_eq!(clean_response("  \n "), None);
    }
}
