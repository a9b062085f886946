//! 柱スコアの集計
//!
//! 照合結果の重みを柱ごとに合算し、合計に対する百分率に変換する。
//! 合計が0の場合は割り算せず、0のまま返す。

use crate::matcher::MatchResult;
use crate::pillar::{Pillar, PillarScores};
use serde::Serialize;

/// 集計結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarTally {
    /// 合算した生スコア
    pub raw: PillarScores,
    /// 生スコアの合計
    pub total: f64,
    /// 百分率（合計0なら生スコアのまま）
    pub percentages: PillarScores,
}

/// 照合結果を集計する
pub fn tally(matches: &[MatchResult]) -> PillarTally {
    let mut raw = PillarScores::ZERO;
    for m in matches {
        raw.add(&m.weights);
    }
    tally_scores(raw)
}

/// 生スコアから百分率を計算
pub fn tally_scores(raw: PillarScores) -> PillarTally {
    let total = raw.total();

    let mut percentages = raw;
    if total > 0.0 {
        for pillar in Pillar::ALL {
            percentages.set(pillar, raw.get(pillar) / total * 100.0);
        }
    }

    PillarTally { raw, total, percentages }
}

/// 最大スコアの柱を返す（同点は列挙順で先勝ち）
pub fn dominant_pillar(scores: &PillarScores) -> Pillar {
    let mut best = Pillar::ALL[0];
    for (pillar, value) in scores.iter() {
        if value > scores.get(best) {
            best = pillar;
        }
    }
    best
}
