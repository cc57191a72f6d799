use crate::error::{ArtificerError, Result};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// プロンプトの表示テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptTheme {
    #[default]
    Colorful,
    Simple,
}

impl PromptTheme {
    pub fn dialoguer_theme(&self) -> Box<dyn Theme> {
        match self {
            PromptTheme::Colorful => Box::new(ColorfulTheme::default()),
            PromptTheme::Simple => Box::new(SimpleTheme),
        }
    }
}

impl std::str::FromStr for PromptTheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "colorful" | "color" => Ok(PromptTheme::Colorful),
            "simple" | "plain" => Ok(PromptTheme::Simple),
            _ => Err(format!("Unknown theme: {}. Use colorful or simple", s)),
        }
    }
}

impl std::fmt::Display for PromptTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptTheme::Colorful => write!(f, "colorful"),
            PromptTheme::Simple => write!(f, "simple"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: PromptTheme,
    /// ターゲット列を名前の長さ順に並べ替える
    pub shuffle_targets: bool,
    /// 選択肢に説明文を表示する
    pub show_descriptions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: PromptTheme::Colorful,
            shuffle_targets: true,
            show_descriptions: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArtificerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artificer").join("config.json"))
    }
}
