//! 職務照合モジュール
//!
//! 入力職務ごとに、TF-IDF空間でコサイン類似度が最大の標準職務を選ぶ。
//! ベクトル空間はカタログ＋今回の全入力で毎回構築するため、
//! 同じ1行でも同時に渡す他の行によって結果が変わりうる。

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::pillar::PillarScores;
use crate::similarity::cosine_similarity;
use crate::tfidf::TfidfVectorizer;
use crate::tokenizer::StopWords;
use serde::{Deserialize, Serialize};

/// 照合オプション
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchOptions {
    pub stop_words: StopWords,
}

/// 照合結果（入力1行につき1件）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// 入力順のインデックス
    pub input_index: usize,
    /// 利用者が入力した職務
    pub input_text: String,
    /// 照合に使ったテキスト（翻訳後）
    pub match_text: String,
    /// 一致したカタログのインデックス
    pub catalog_index: usize,
    /// 一致した標準職務
    pub catalog_text: String,
    /// 標準職務の重み
    pub weights: PillarScores,
    /// コサイン類似度
    pub similarity: f64,
}

/// 入力職務をカタログと照合する
///
/// # Arguments
/// * `catalog` - 標準職務カタログ
/// * `inputs` - (入力テキスト, 照合テキスト) の列
/// * `options` - 照合オプション
pub fn match_responsibilities(
    catalog: &Catalog,
    inputs: &[(String, String)],
    options: &MatchOptions,
) -> Result<Vec<MatchResult>> {
    if inputs.is_empty() {
        return Err(Error::EmptyInput);
    }

    let docs: Vec<&str> = catalog
        .texts()
        .into_iter()
        .chain(inputs.iter().map(|(_, m)| m.as_str()))
        .collect();

    let matrix = TfidfVectorizer::new(options.stop_words).fit_transform(&docs)?;
    let (catalog_rows, input_rows) = matrix.rows.split_at(catalog.len());

    // 全入力行が記号・ストップワードのみ
    if input_rows.iter().all(|row| row.iter().all(|v| *v == 0.0)) {
        return Err(Error::DegenerateVocabulary);
    }

    let mut results = Vec::with_capacity(inputs.len());

    for (i, ((input_text, match_text), input_vec)) in inputs.iter().zip(input_rows).enumerate() {
        let (best_index, best_score) = best_match(input_vec, catalog_rows);
        let entry = &catalog.entries()[best_index];

        tracing::debug!(
            input = %match_text,
            matched = %entry.text,
            catalog_index = best_index,
            similarity = best_score,
            "responsibility matched"
        );

        results.push(MatchResult {
            input_index: i,
            input_text: input_text.clone(),
            match_text: match_text.clone(),
            catalog_index: best_index,
            catalog_text: entry.text.clone(),
            weights: entry.weights,
            similarity: best_score,
        });
    }

    Ok(results)
}

/// 類似度最大のカタログ行を返す（同点は先勝ち）
fn best_match(input: &[f64], catalog_rows: &[Vec<f64>]) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (j, row) in catalog_rows.iter().enumerate() {
        let score = cosine_similarity(input, row);
        if score > best.1 {
            best = (j, score);
        }
    }
    best
}
