//! 設定ファイルテスト

use artificer::config::{Config, PromptTheme};
use tempfile::tempdir;

/// ファイルがない場合はデフォルト
#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config, Config::default());
    assert_eq!(config.theme, PromptTheme::Colorful);
    assert!(config.shuffle_targets);
    assert!(config.show_descriptions);
}

/// 保存と読み込み（親ディレクトリも作成）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("artificer").join("config.json");

    let config = Config {
        theme: PromptTheme::Simple,
        shuffle_targets: false,
        show_descriptions: true,
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"theme\": \"simple\""));
}

/// 欠けたキーはデフォルトで補う
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "show_descriptions": false }"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert!(!config.show_descriptions);
    assert!(config.shuffle_targets);
    assert_eq!(config.theme, PromptTheme::Colorful);
}

/// テーマ名のパース
#[test]
fn test_theme_from_str() {
    assert_eq!("Colorful".parse::<PromptTheme>().unwrap(), PromptTheme::Colorful);
    assert_eq!("plain".parse::<PromptTheme>().unwrap(), PromptTheme::Simple);
    assert!("neon".parse::<PromptTheme>().is_err());
    assert_eq!(PromptTheme::Simple.to_string(), "simple");
}
