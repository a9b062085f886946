//! Excel生成（共通ライブラリ）
//!
//! 分析結果を「Matches」「Pillars」の2シート構成で出力する。

use crate::analyzer::AnalysisReport;
use crate::error::{Error, Result};
use crate::pillar::Pillar;
use rust_xlsxwriter::*;

/// Matchesシートの列（見出し, 列幅）
const MATCH_COLUMNS: &[(&str, f64)] = &[
    ("#", 5.0),
    ("Employee Responsibility", 40.0),
    ("Matched Text", 40.0),
    ("Mapped Standard Responsibility", 48.0),
    ("Similarity", 11.0),
    ("HRCOE Score", 12.0),
    ("HRBP Score", 12.0),
    ("HRSSC Score", 12.0),
];

/// 分析結果のExcelをバッファに生成
pub fn generate_report_xlsx(report: &AnalysisReport) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let number_format = Format::new()
        .set_num_format("0.00")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let dominant_format = Format::new()
        .set_bold()
        .set_num_format("0.00")
        .set_background_color(Color::RGB(0xFFF2CC))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // 照合結果シート
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Matches")
        .map_err(|e| Error::Export(format!("シート名設定エラー: {}", e)))?;

    for (col, (title, width)) in MATCH_COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet
            .set_column_width(col, *width)
            .map_err(|e| Error::Export(format!("列幅設定エラー: {}", e)))?;
        sheet
            .write_string_with_format(0, col, *title, &header_format)
            .map_err(|e| Error::Export(format!("見出し書き込みエラー: {}", e)))?;
    }

    for (i, m) in report.matches.iter().enumerate() {
        let row = i as u32 + 1;
        sheet
            .write_number_with_format(row, 0, (m.input_index + 1) as f64, &text_format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        sheet
            .write_string_with_format(row, 1, &m.input_text, &text_format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        sheet
            .write_string_with_format(row, 2, &m.match_text, &text_format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        sheet
            .write_string_with_format(row, 3, &m.catalog_text, &text_format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        sheet
            .write_number_with_format(row, 4, m.similarity, &number_format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        for pillar in Pillar::ALL {
            sheet
                .write_number_with_format(row, 5 + pillar.index() as u16, m.weights.get(pillar), &number_format)
                .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        }
    }

    // 柱スコアシート
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Pillars")
        .map_err(|e| Error::Export(format!("シート名設定エラー: {}", e)))?;

    for (col, title) in ["Pillar", "Name", "Raw Score", "Percentage"].iter().enumerate() {
        sheet
            .set_column_width(col as u16, if col == 1 { 26.0 } else { 14.0 })
            .map_err(|e| Error::Export(format!("列幅設定エラー: {}", e)))?;
        sheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(|e| Error::Export(format!("見出し書き込みエラー: {}", e)))?;
    }

    for pillar in Pillar::ALL {
        let row = pillar.index() as u32 + 1;
        let format = if pillar == report.dominant { &dominant_format } else { &number_format };
        sheet
            .write_string_with_format(row, 0, pillar.label(), &text_format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        sheet
            .write_string_with_format(row, 1, pillar.display_name(), &text_format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        sheet
            .write_number_with_format(row, 2, report.tally.raw.get(pillar), format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
        sheet
            .write_number_with_format(row, 3, report.tally.percentages.get(pillar), format)
            .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
    }

    let summary_row = Pillar::ALL.len() as u32 + 2;
    sheet
        .write_string_with_format(summary_row, 0, "Dominant", &header_format)
        .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;
    sheet
        .write_string_with_format(summary_row, 1, report.dominant.label(), &text_format)
        .map_err(|e| Error::Export(format!("値書き込みエラー: {}", e)))?;

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| Error::Export(format!("Excel保存エラー: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, AnalyzeOptions};
    use crate::catalog::Catalog;

    #[test]
    fn test_generate_report_xlsx() {
        let lines = vec![
            "Organizational Diagnosis".to_string(),
            "External recruitment channels".to_string(),
        ];
        let report = analyze(&Catalog::builtin(), &lines, &AnalyzeOptions::default()).unwrap();
        let buffer = generate_report_xlsx(&report).unwrap();
        // xlsx は zip 形式
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_export_error_message() {
        let err = Error::Export(format!("Excel保存エラー: {}", "disk full"));
        assert_eq!(err.to_string(), "Export error: Excel保存エラー: disk full");
    }
}
