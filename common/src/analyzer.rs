//! 職務分析パイプライン
//!
//! 入力行 → (翻訳) → 照合 → 集計 → 主たる柱の選定 を1回の呼び出しで行う。
//! 表示に関する状態は持たず、呼び出し側が結果を描画する。

use crate::aggregate::{dominant_pillar, tally, PillarTally};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::matcher::{match_responsibilities, MatchOptions, MatchResult};
use crate::pillar::Pillar;
use crate::translate::{Locale, PassthroughTranslator, Translator};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 分析オプション
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub match_options: MatchOptions,
    /// 入力の言語
    pub source: Locale,
    /// カタログの言語
    pub target: Locale,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            match_options: MatchOptions::default(),
            source: Locale::En,
            target: Locale::En,
        }
    }
}

/// 分析結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// 出力時刻（ファイル保存時に設定）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    pub matches: Vec<MatchResult>,
    pub tally: PillarTally,
    pub dominant: Pillar,
}

impl AnalysisReport {
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }
}

/// 入力テキストを職務行に分割（前後空白を除去し、空行は捨てる）
pub fn parse_input_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 翻訳なしで分析する
pub fn analyze(catalog: &Catalog, lines: &[String], options: &AnalyzeOptions) -> Result<AnalysisReport> {
    analyze_with(catalog, lines, &PassthroughTranslator, options)
}

/// 翻訳器を指定して分析する
///
/// # Arguments
/// * `catalog` - 標準職務カタログ（読み取り専用）
/// * `lines` - 空でない職務行
/// * `translator` - 照合前に各行へ適用する翻訳器
/// * `options` - 分析オプション
pub fn analyze_with(
    catalog: &Catalog,
    lines: &[String],
    translator: &dyn Translator,
    options: &AnalyzeOptions,
) -> Result<AnalysisReport> {
    if lines.is_empty() {
        return Err(Error::EmptyInput);
    }

    // 翻訳は全行成功した場合のみ先へ進む
    let mut inputs = Vec::with_capacity(lines.len());
    for line in lines {
        let translated = if options.source == options.target {
            line.clone()
        } else {
            translator.translate(line, &options.source, &options.target)?
        };
        inputs.push((line.clone(), translated));
    }

    let matches = match_responsibilities(catalog, &inputs, &options.match_options)?;
    let tally = tally(&matches);
    let dominant = dominant_pillar(&tally.percentages);

    tracing::info!(
        lines = matches.len(),
        total = tally.total,
        dominant = %dominant,
        "analysis complete"
    );

    Ok(AnalysisReport {
        generated_at: None,
        matches,
        tally,
        dominant,
    })
}
