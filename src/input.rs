//! 職務入力モジュール
//!
//! ファイル・標準入力・引数・対話入力のいずれかから職務行を集める。

use crate::error::{PillarError, Result};
use dialoguer::{Confirm, Input};
use hr_pillar_common::parse_input_lines;
use std::io::Read;
use std::path::Path;

/// 職務の入力元
pub enum InputSource<'a> {
    File(&'a Path),
    Stdin,
    Texts(&'a [String]),
    Interactive,
}

impl<'a> InputSource<'a> {
    pub fn select(input: Option<&'a Path>, texts: &'a [String]) -> Self {
        match input {
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path),
            None if !texts.is_empty() => InputSource::Texts(texts),
            None => InputSource::Interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, InputSource::Interactive)
    }
}

/// 入力元から職務行を読み込む（空行は除去済み）
pub fn read_lines(source: &InputSource<'_>) -> Result<Vec<String>> {
    match source {
        InputSource::File(path) => {
            if !path.exists() {
                return Err(PillarError::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            Ok(parse_input_lines(&content))
        }
        InputSource::Stdin => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(parse_input_lines(&content))
        }
        InputSource::Texts(texts) => Ok(parse_input_lines(&texts.join("\n"))),
        InputSource::Interactive => prompt_lines(),
    }
}

/// 対話式で1行ずつ入力（空行で終了）
fn prompt_lines() -> Result<Vec<String>> {
    println!("職務を1行ずつ入力してください（空行で入力終了）");

    let mut raw = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(format!("職務 {}", raw.len() + 1))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PillarError::CliExecution(e.to_string()))?;

        if line.trim().is_empty() {
            break;
        }
        raw.push(line);
    }

    Ok(parse_input_lines(&raw.join("\n")))
}

/// 分析実行の確認
pub fn confirm_analysis(count: usize) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("{}件の職務を分析しますか？", count))
        .default(true)
        .interact()
        .map_err(|e| PillarError::CliExecution(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_source() {
        let texts = vec!["HR Cost Management".to_string()];
        assert!(matches!(InputSource::select(Some(Path::new("-")), &[]), InputSource::Stdin));
        assert!(matches!(
            InputSource::select(Some(Path::new("duties.txt")), &texts),
            InputSource::File(_)
        ));
        assert!(matches!(InputSource::select(None, &texts), InputSource::Texts(_)));
        assert!(InputSource::select(None, &[]).is_interactive());
    }

    #[test]
    fn test_read_texts_drops_blank() {
        let texts = vec!["  Probation Management ".to_string(), "   ".to_string()];
        let lines = read_lines(&InputSource::Texts(&texts)).unwrap();
        assert_eq!(lines, vec!["Probation Management"]);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_lines(&InputSource::File(Path::new("/nonexistent/duties-12345.txt")));
        assert!(matches!(result, Err(PillarError::FileNotFound(_))));
    }
}
