//! 標準職務カタログ
//!
//! 標準HR職務定義と、その柱ごとの重みを保持する。
//! 組み込みカタログの他、CSVから差し替えカタログを読み込める。
//! 構築後は読み取り専用で、リクエスト間で共有される。

use crate::error::{Error, Result};
use crate::pillar::PillarScores;
use serde::Serialize;
use std::path::Path;

/// カタログの1行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// 標準職務
    pub text: String,
    /// 柱ごとの重み
    pub weights: PillarScores,
}

/// 標準職務カタログ全体
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// 組み込みデータ: (標準職務, HRCOE, HRBP, HRSSC)
///
/// 元データの重み列は職務列より短い（48/48/49件）。位置で対応づけ、
/// 不足分は 0.0 としている。
const BUILTIN_ROWS: &[(&str, f64, f64, f64)] = &[
    ("Formulation of Organizational Change Process", 1.44, 0.0, 0.0),
    ("Organizational Diagnosis", 0.72, 1.44, 0.0),
    ("Design of Organizational Change Plan", 0.72, 1.44, 0.0),
    ("Release of Organizational Change Plan", 0.72, 1.44, 0.0),
    ("Organizational Culture Design", 1.44, 0.0, 0.0),
    ("Organizational Culture Implementation and Change Design", 1.44, 0.0, 0.0),
    ("Design of Organizational Culture Activities", 0.72, 1.44, 0.0),
    ("Implementation of Organizational Culture Activities", 0.72, 1.44, 0.0),
    ("Design/Modification of Job Grading System", 1.44, 0.0, 0.0),
    ("Development/Maintenance of Job Setting Standards", 1.44, 0.72, 0.0),
    ("Job Setting/Modification", 0.0, 1.44, 0.0),
    ("Job Value Assessment", 0.0, 1.44, 0.0),
    ("Development of Overall HR Plan (including TianTong Innovation Academy)", 1.44, 0.72, 0.0),
    ("Efficiency and Headcount Management", 0.0, 1.44, 0.0),
    ("HR Budget Management", 0.0, 1.44, 0.0),
    ("HR Cost Management", 0.0, 1.44, 0.0),
    ("HR Policy Management", 1.44, 0.72, 0.0),
    ("Pre-Investment Due Diligence and Post-Investment Management", 1.44, 0.0, 0.0),
    ("Development of Shared HR Service Policies", 0.72, 0.0, 1.44),
    ("Change Management Support", 0.0, 1.44, 0.0),
    ("HR Digital Strategy Management", 1.44, 0.72, 0.72),
    ("Development/Maintenance of Organizational Performance Management System", 1.44, 0.72, 0.72),
    ("Organizational Performance Target Setting/Modification", 0.0, 1.44, 0.0),
    ("Organizational Performance Evaluation", 0.0, 1.44, 0.0),
    ("Organizational Performance Management Appeals Handling", 0.0, 1.44, 0.0),
    ("Development/Maintenance of Recruitment and Allocation Policies", 1.44, 0.0, 0.0),
    ("Recruitment Planning", 0.0, 1.44, 0.0),
    ("Recruitment Demand Management", 0.0, 1.44, 0.0),
    ("External Recruitment Channel Management", 1.44, 0.72, 0.72),
    ("External Recruitment Implementation", 0.0, 1.44, 0.72),
    ("Employer Branding", 0.0, 0.72, 0.72),
    ("Mandatory Allocation", 0.0, 1.44, 0.0),
    ("Internal Talent Market Allocation", 0.0, 1.44, 0.0),
    ("Long-Term Assignment Arrangements", 0.0, 1.44, 0.0),
    ("Labor Dispatch Demand Management", 0.0, 1.44, 0.0),
    ("Labor Dispatch Implementation", 0.0, 1.44, 0.0),
    ("Probation Management", 0.0, 1.44, 0.0),
    ("Employee Resignation Management", 0.0, 1.44, 0.0),
    ("Employee Retirement Management", 0.0, 1.44, 0.0),
    ("Management of Underperformers’ Exit", 0.0, 1.44, 0.0),
    ("Labor Contract Renewal Management", 1.44, 0.72, 0.0),
    ("Management of Qualification Standards", 0.0, 1.44, 0.0),
    ("Qualification Certification", 1.44, 0.72, 0.72),
    ("Development of High-Potential Talent Standards", 1.44, 1.44, 0.72),
    ("High-Potential Talent Identification Scheme Design", 0.0, 0.0, 0.0),
    ("Implementation of High-Potential Talent Identification", 1.44, 1.44, 0.0),
    ("Development/Maintenance of Career Development Policies", 0.0, 1.44, 0.0),
    ("Implementation of Talent Promotions, Demotions, and Transfers", 0.0, 1.44, 0.0),
    ("Planning for Talent Capability Development", 0.0, 0.0, 0.0),
    ("Planning for On-Job Talent Capability Enhancement", 0.0, 0.0, 0.0),
];

/// CSVヘッダー
pub const CSV_HEADER: &str = "responsibility,hrcoe,hrbp,hrssc";

impl Catalog {
    /// エントリ列からカタログを構築
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidCatalog("catalog has no entries".into()));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.text.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!("entry {}: text is empty", i)));
            }
            if !entry.weights.is_valid() {
                return Err(Error::InvalidCatalog(format!(
                    "entry {}: weights must be finite and non-negative",
                    i
                )));
            }
        }
        Ok(Self { entries })
    }

    /// 組み込みカタログ
    pub fn builtin() -> Self {
        let entries = BUILTIN_ROWS
            .iter()
            .map(|&(text, coe, bp, ssc)| CatalogEntry {
                text: text.to_string(),
                weights: PillarScores::new(coe, bp, ssc),
            })
            .collect();
        Self { entries }
    }

    /// CSVファイルから読み込み
    pub fn from_csv(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_csv_str(&content)
    }

    /// CSV文字列から読み込み（1行目はヘッダー）
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (line_no, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let fields = parse_csv_line(line);
            if fields.len() < 4 {
                return Err(Error::InvalidCatalog(format!(
                    "line {}: expected 4 fields, found {}",
                    line_no + 1,
                    fields.len()
                )));
            }

            let weight = |i: usize| -> Result<f64> {
                let raw = fields[i].as_str();
                if raw.is_empty() {
                    return Ok(0.0);
                }
                raw.parse::<f64>().map_err(|_| {
                    Error::InvalidCatalog(format!("line {}: weight '{}' is not a number", line_no + 1, raw))
                })
            };

            entries.push(CatalogEntry {
                text: fields[0].clone(),
                weights: PillarScores::new(weight(1)?, weight(2)?, weight(3)?),
            });
        }

        Self::new(entries)
    }

    /// CSV文字列に書き出し
    pub fn to_csv_string(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for entry in &self.entries {
            out.push_str(&format!(
                "\"{}\",{},{},{}\n",
                entry.text.replace('"', "\"\""),
                entry.weights.get(crate::Pillar::Coe),
                entry.weights.get(crate::Pillar::Bp),
                entry.weights.get(crate::Pillar::Ssc),
            ));
        }
        out
    }

    /// 全エントリを取得
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 職務テキスト一覧（カタログ順）
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// CSV行をパース（ダブルクォート対応、`""` はクォート内の `"`）
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }

    // 最後のフィールド
    fields.push(field.trim().to_string());

    fields
}
