//! エラーケーステスト

use hr_pillar_rust::error::PillarError;

/// PillarErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PillarError::Config("テスト設定エラー".to_string()),
        PillarError::FileNotFound("duties.txt".to_string()),
        PillarError::CliExecution("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PillarError = io_err.into();

    assert!(matches!(err, PillarError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PillarError = json_err.into();

    assert!(matches!(err, PillarError::JsonParse(_)));
}

/// 共通エラーは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let err: PillarError = hr_pillar_common::Error::EmptyInput.into();

    assert!(matches!(err, PillarError::Common(_)));
    assert_eq!(format!("{}", err), "No responsibilities were entered");
}

/// 共通ライブラリの出力・翻訳エラーはCommon経由で届く
#[test]
fn test_export_and_translation_errors_pass_through_common() {
    let export: PillarError = hr_pillar_common::Error::Export("Excel保存エラー: disk full".into()).into();
    assert!(matches!(export, PillarError::Common(hr_pillar_common::Error::Export(_))));
    assert_eq!(format!("{}", export), "Export error: Excel保存エラー: disk full");

    let translation: PillarError =
        hr_pillar_common::Error::Translation("claude の起動に失敗".into()).into();
    assert!(format!("{}", translation).starts_with("Translation failed"));
}
