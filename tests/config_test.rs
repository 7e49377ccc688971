//! 設定ファイルのテスト

use nominee_roster::config::Config;
use nominee_roster::error::RosterError;
use tempfile::tempdir;

/// ファイルがなければデフォルト値
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("load failed");

    assert_eq!(config, Config::default());
    assert!(config.confirm_delete);
    assert_eq!(config.form.preview_width_px, 100);
}

/// 保存時にフォルダを作り、同じ値を読み戻せる
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.form.title = "รายชื่อ".to_string();
    config.form.preview_width_px = 240;
    config.confirm_delete = false;
    config.save_to(&path).expect("save failed");

    let loaded = Config::load_from(&path).expect("load failed");
    assert_eq!(loaded, config);
}

/// ファイルにないキーはデフォルト値
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"form": {"previewWidthPx": 64}}"#).unwrap();

    let config = Config::load_from(&path).expect("load failed");
    assert_eq!(config.form.preview_width_px, 64);
    assert!(config.confirm_delete);
}

/// プレビュー幅0は保存しない
#[test]
fn test_zero_width_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.form.preview_width_px = 0;
    let err = config.save_to(&path).unwrap_err();

    assert!(matches!(err, RosterError::Config(_)));
    assert!(!path.exists());
}

/// 壊れたJSONは解析エラー
#[test]
fn test_broken_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ form: ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, RosterError::JsonParse(_)));
}
