//! TF-IDF ベクトル空間
//!
//! 与えられた文書集合全体から語彙と文書頻度を求め、各文書を
//! L2正規化済みの密ベクトルに変換する。
//!
//! - tf: 文書内の出現回数
//! - idf: ln((1 + n) / (1 + df)) + 1（スムージングあり）
//! - 語彙は辞書順

use crate::error::{Error, Result};
use crate::tokenizer::{tokenize, StopWords};
use std::collections::{BTreeMap, BTreeSet};

/// ベクトル化オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer {
    pub stop_words: StopWords,
}

/// fit_transform の結果
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// 語彙（辞書順）
    pub vocabulary: Vec<String>,
    /// 語彙ごとの idf
    pub idf: Vec<f64>,
    /// 入力順の文書ベクトル
    pub rows: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// 文書集合から語彙を構築し、全文書をベクトル化する
    pub fn fit_transform<S: AsRef<str>>(&self, docs: &[S]) -> Result<TfidfMatrix> {
        let tokenized: Vec<Vec<String>> = docs
            .iter()
            .map(|d| tokenize(d.as_ref(), self.stop_words))
            .collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if vocabulary.is_empty() {
            return Err(Error::DegenerateVocabulary);
        }

        let index: BTreeMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        // 文書頻度
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                df[index[term]] += 1;
            }
        }

        let n = docs.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    row[index[token.as_str()]] += 1.0;
                }
                for (value, w) in row.iter_mut().zip(idf.iter()) {
                    *value *= w;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        tracing::debug!(
            documents = docs.len(),
            vocabulary = vocabulary.len(),
            "tf-idf space built"
        );

        Ok(TfidfMatrix { vocabulary, idf, rows })
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_sorted_and_shared() {
        let matrix = TfidfVectorizer::new(StopWords::English)
            .fit_transform(&["Recruitment Planning", "HR Budget Planning"])
            .unwrap();
        assert_eq!(matrix.vocabulary, vec!["budget", "hr", "planning", "recruitment"]);
        assert_eq!(matrix.rows.len(), 2);
        assert!(matrix.rows.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_smooth_idf() {
        let matrix = TfidfVectorizer::new(StopWords::English)
            .fit_transform(&["Recruitment Planning", "HR Budget Planning"])
            .unwrap();
        // planning: df=2, n=2 -> ln(3/3)+1 = 1
        assert!((matrix.idf[2] - 1.0).abs() < 1e-12);
        // budget: df=1 -> ln(3/2)+1
        assert!((matrix.idf[0] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = TfidfVectorizer::default()
            .fit_transform(&["Job Value Assessment", "Job Setting/Modification"])
            .unwrap();
        for row in &matrix.rows {
            let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_document_without_terms_is_zero_row() {
        let matrix = TfidfVectorizer::default()
            .fit_transform(&["Employer Branding", "of the and"])
            .unwrap();
        assert!(matrix.rows[1].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        let result = TfidfVectorizer::default().fit_transform(&["of the", "!!!"]);
        assert!(matches!(result, Err(Error::DegenerateVocabulary)));
    }
}
