//! 分析結果の表示・保存

use crate::error::Result;
use hr_pillar_common::{AnalysisReport, Catalog, Pillar};
use std::path::Path;

/// 表示用に文字数で切り詰める
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(max.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

/// 照合表を文字列化
pub fn format_matches(report: &AnalysisReport, show_translation: bool) -> String {
    let mut out = String::new();
    for m in &report.matches {
        out.push_str(&format!(
            "  {:>2}. {}\n",
            m.input_index + 1,
            truncate(&m.input_text, 60)
        ));
        if show_translation && m.match_text != m.input_text {
            out.push_str(&format!("      訳: {}\n", truncate(&m.match_text, 60)));
        }
        out.push_str(&format!(
            "      → {} (類似度 {:.3}, COE {:.2} / BP {:.2} / SSC {:.2})\n",
            m.catalog_text,
            m.similarity,
            m.weights.get(Pillar::Coe),
            m.weights.get(Pillar::Bp),
            m.weights.get(Pillar::Ssc),
        ));
    }
    out
}

/// 柱スコアを文字列化（簡易バー付き）
pub fn format_pillars(report: &AnalysisReport) -> String {
    let mut out = String::new();
    for (pillar, pct) in report.tally.percentages.iter() {
        let bar = "█".repeat((pct / 5.0).round().max(0.0) as usize);
        let marker = if pillar == report.dominant { " ◀" } else { "" };
        out.push_str(&format!(
            "  {:<6} {:>6.2}%  {}{}\n",
            pillar.label(),
            pct,
            bar,
            marker
        ));
    }
    out
}

/// 主たる柱のメッセージ
pub fn dominant_message(report: &AnalysisReport) -> String {
    format!(
        "この従業員は {} ({}) の柱に最も近い職務構成です",
        report.dominant.label(),
        report.dominant.display_name()
    )
}

/// コンソールに表示
pub fn print_report(report: &AnalysisReport, show_translation: bool) {
    println!("## 照合結果");
    print!("{}", format_matches(report, show_translation));
    println!();
    println!("## 柱スコア");
    print!("{}", format_pillars(report));
    if report.tally.total == 0.0 {
        println!("  ⚠ 一致した標準職務の重みがすべて0です");
    }
    println!();
    println!("✅ {}", dominant_message(report));
}

/// カタログ一覧を表示
pub fn print_catalog(catalog: &Catalog) {
    println!("{:>3}  {:<64} {:>6} {:>6} {:>6}", "#", "Standard Responsibility", "COE", "BP", "SSC");
    for (i, entry) in catalog.entries().iter().enumerate() {
        println!(
            "{:>3}  {:<64} {:>6.2} {:>6.2} {:>6.2}",
            i,
            truncate(&entry.text, 64),
            entry.weights.get(Pillar::Coe),
            entry.weights.get(Pillar::Bp),
            entry.weights.get(Pillar::Ssc),
        );
    }
    println!("\n{}件", catalog.len());
}

/// JSONで保存
pub fn write_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Excelで保存
pub fn write_excel(report: &AnalysisReport, path: &Path) -> Result<()> {
    let buffer = hr_pillar_common::export::excel_core::generate_report_xlsx(report)?;
    std::fs::write(path, buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_pillar_common::{analyze, AnalyzeOptions};

    fn sample_report() -> AnalysisReport {
        let lines = vec!["Organizational Diagnosis".to_string()];
        analyze(&Catalog::builtin(), &lines, &AnalyzeOptions::default()).unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn test_format_pillars_marks_dominant() {
        let text = format_pillars(&sample_report());
        let bp_line = text.lines().find(|l| l.contains("HRBP")).unwrap();
        assert!(bp_line.contains("66.67%"));
        assert!(bp_line.ends_with('◀'));
    }

    #[test]
    fn test_format_matches() {
        let text = format_matches(&sample_report(), true);
        assert!(text.contains("→ Organizational Diagnosis"));
        assert!(!text.contains("訳:"));
    }

    #[test]
    fn test_dominant_message() {
        assert!(dominant_message(&sample_report()).contains("HRBP"));
    }
}
