//! HR三支柱の定義
//!
//! 柱の集合は固定（COE / BP / SSC）なので、スコアは
//! 列挙順にインデックスされた固定長配列で保持する。

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HRの柱
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    /// 専門家センター
    #[serde(rename = "HRCOE")]
    Coe,
    /// ビジネスパートナー
    #[serde(rename = "HRBP")]
    Bp,
    /// シェアードサービスセンター
    #[serde(rename = "HRSSC")]
    Ssc,
}

impl Pillar {
    /// 列挙順（同点時はこの順で先勝ち）
    pub const ALL: [Pillar; 3] = [Pillar::Coe, Pillar::Bp, Pillar::Ssc];

    pub fn index(self) -> usize {
        match self {
            Pillar::Coe => 0,
            Pillar::Bp => 1,
            Pillar::Ssc => 2,
        }
    }

    /// 短縮ラベル
    pub fn label(self) -> &'static str {
        match self {
            Pillar::Coe => "HRCOE",
            Pillar::Bp => "HRBP",
            Pillar::Ssc => "HRSSC",
        }
    }

    /// 表示名
    pub fn display_name(self) -> &'static str {
        match self {
            Pillar::Coe => "Centers of Excellence",
            Pillar::Bp => "Business Partner",
            Pillar::Ssc => "Shared Services Center",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hrcoe" | "coe" => Ok(Pillar::Coe),
            "hrbp" | "bp" => Ok(Pillar::Bp),
            "hrssc" | "ssc" => Ok(Pillar::Ssc),
            _ => Err(format!("Unknown pillar: {}. Use HRCOE, HRBP, or HRSSC", s)),
        }
    }
}

/// 柱ごとのスコア（非負の実数）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PillarScores([f64; 3]);

impl PillarScores {
    pub const ZERO: PillarScores = PillarScores([0.0; 3]);

    pub fn new(coe: f64, bp: f64, ssc: f64) -> Self {
        Self([coe, bp, ssc])
    }

    pub fn get(&self, pillar: Pillar) -> f64 {
        self.0[pillar.index()]
    }

    pub fn set(&mut self, pillar: Pillar, value: f64) {
        self.0[pillar.index()] = value;
    }

    /// 各柱に加算
    pub fn add(&mut self, other: &PillarScores) {
        for (acc, value) in self.0.iter_mut().zip(other.0.iter()) {
            *acc += value;
        }
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// 列挙順で (柱, 値) を返す
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, f64)> + '_ {
        Pillar::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// すべて有限かつ0以上
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Serialize for PillarScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Pillar::ALL.len()))?;
        for (pillar, value) in self.iter() {
            map.serialize_entry(pillar.label(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let labels: Vec<_> = Pillar::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["HRCOE", "HRBP", "HRSSC"]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hrbp".parse::<Pillar>().unwrap(), Pillar::Bp);
        assert_eq!(" SSC ".parse::<Pillar>().unwrap(), Pillar::Ssc);
        assert!("hrxx".parse::<Pillar>().is_err());
    }

    #[test]
    fn test_add_and_total() {
        let mut scores = PillarScores::ZERO;
        scores.add(&PillarScores::new(0.72, 1.44, 0.0));
        scores.add(&PillarScores::new(1.44, 0.0, 0.72));
        assert!((scores.get(Pillar::Coe) - 2.16).abs() < 1e-9);
        assert!((scores.total() - 4.32).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid_rejects_negative_and_non_finite() {
        assert!(PillarScores::new(0.72, 1.44, 0.0).is_valid());
        assert!(!PillarScores::new(-0.5, 0.0, 0.0).is_valid());
        assert!(!PillarScores::new(f64::INFINITY, 0.0, 0.0).is_valid());
        assert!(!PillarScores::new(0.0, f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_serialize_as_label_map() {
        let json = serde_json::to_value(PillarScores::new(1.0, 2.0, 0.0)).unwrap();
        assert_eq!(json["HRCOE"], 1.0);
        assert_eq!(json["HRBP"], 2.0);
        assert_eq!(json["HRSSC"], 0.0);
    }
}
