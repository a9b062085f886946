//! JSON/Excel出力の統合テスト

use hr_pillar_common::{analyze, AnalysisReport, AnalyzeOptions, Catalog};
use hr_pillar_rust::report;
use tempfile::tempdir;

fn sample_report() -> AnalysisReport {
    let lines = vec![
        "Organizational Diagnosis".to_string(),
        "HR Budget Management".to_string(),
    ];
    analyze(&Catalog::builtin(), &lines, &AnalyzeOptions::default())
        .unwrap()
        .stamped(chrono::Utc::now())
}

#[test]
fn test_json_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.json");

    report::write_json(&sample_report(), &output_path).expect("JSON出力失敗");

    let content = std::fs::read_to_string(&output_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["matches"].as_array().unwrap().len(), 2);
    assert_eq!(json["dominant"], "HRBP");
    assert!(json["generatedAt"].is_string());
    assert!(json["tally"]["percentages"]["HRCOE"].is_number());
}

#[test]
fn test_excel_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.xlsx");

    let result = report::write_excel(&sample_report(), &output_path);

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_json_output_to_missing_dir_fails() {
    let result = report::write_json(&sample_report(), std::path::Path::new("/nonexistent/dir/r.json"));
    assert!(result.is_err());
}
