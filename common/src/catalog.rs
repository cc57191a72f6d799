//! エネルギー型カタログ
//!
//! パイプラインを流れるデータ型（MODEL, CLIP, ...）の定義と、
//! マッチングゲームで使う固定カタログ。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 接続線の色カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionColor {
    Model,
    Clip,
    Vae,
    Conditioning,
    Latent,
    Image,
    Mask,
    /// 未知のポート型
    Neutral,
}

impl ConnectionColor {
    /// CSSクラストークン
    pub fn css_class(&self) -> &'static str {
        match self {
            ConnectionColor::Model => "bg-purple-600",
            ConnectionColor::Clip => "bg-yellow-500",
            ConnectionColor::Vae => "bg-red-500",
            ConnectionColor::Conditioning => "bg-orange-500",
            ConnectionColor::Latent => "bg-pink-500",
            ConnectionColor::Image => "bg-blue-500",
            ConnectionColor::Mask => "bg-gray-400",
            ConnectionColor::Neutral => "bg-gray-500",
        }
    }

    /// 16進カラーコード
    pub fn hex(&self) -> &'static str {
        match self {
            ConnectionColor::Model => "#9333ea",
            ConnectionColor::Clip => "#eab308",
            ConnectionColor::Vae => "#ef4444",
            ConnectionColor::Conditioning => "#f97316",
            ConnectionColor::Latent => "#ec4899",
            ConnectionColor::Image => "#3b82f6",
            ConnectionColor::Mask => "#9ca3af",
            ConnectionColor::Neutral => "#6b7280",
        }
    }

    /// ポート型名から色を判定
    ///
    /// 大文字化した型名に含まれるキーワードで判定する（MODEL → CLIP → VAE →
    /// CONDITIONING → LATENT → IMAGE → MASK の順）。該当なしは `Neutral`。
    pub fn for_port_type(port_type: &str) -> Self {
        let upper = port_type.to_uppercase();
        const ORDER: &[(&str, ConnectionColor)] = &[
            ("MODEL", ConnectionColor::Model),
            ("CLIP", ConnectionColor::Clip),
            ("VAE", ConnectionColor::Vae),
            ("CONDITIONING", ConnectionColor::Conditioning),
            ("LATENT", ConnectionColor::Latent),
            ("IMAGE", ConnectionColor::Image),
            ("MASK", ConnectionColor::Mask),
        ];

        ORDER
            .iter()
            .find(|(keyword, _)| upper.contains(keyword))
            .map(|(_, color)| *color)
            .unwrap_or(ConnectionColor::Neutral)
    }
}

/// エネルギー型（接続可能なデータ型）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyType {
    pub name: String,
    pub color: ConnectionColor,
    pub analogy: String,
    pub description: String,
}

impl EnergyType {
    pub fn new(name: &str, color: ConnectionColor, analogy: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            color,
            analogy: analogy.to_string(),
            description: description.to_string(),
        }
    }
}

/// 標準の6種類のエネルギー型
pub fn standard_energy_types() -> Vec<EnergyType> {
    vec![
        EnergyType::new(
            "MODEL",
            ConnectionColor::Model,
            "The Neural Synapses",
            "Raw intelligence, weights, and training data.",
        ),
        EnergyType::new(
            "CLIP",
            ConnectionColor::Clip,
            "The Linguistics Module",
            "Translates language into mathematical concepts.",
        ),
        EnergyType::new(
            "VAE",
            ConnectionColor::Vae,
            "The Optical Sensor",
            "Translates between compressed dream world and pixel world.",
        ),
        EnergyType::new(
            "CONDITIONING",
            ConnectionColor::Conditioning,
            "The Command Signal",
            "Vector instructions: \"Move toward this concept\".",
        ),
        EnergyType::new(
            "LATENT",
            ConnectionColor::Latent,
            "The Dream State",
            "Compressed mathematical representation (Ghosts).",
        ),
        EnergyType::new(
            "IMAGE",
            ConnectionColor::Image,
            "The Visual Output",
            "Standard pixel data human eyes can see.",
        ),
    ]
}

/// 読み取り専用のカタログ
///
/// 名前の一意性は構築時に検証済み。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<EnergyType>,
}

impl Catalog {
    /// エントリ列からカタログを構築（空・名前重複はエラー）
    pub fn new(entries: Vec<EnergyType>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::DuplicateEnergyType(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<EnergyType> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// 組み込みの標準カタログ
    pub fn standard() -> Self {
        Self {
            entries: standard_energy_types(),
        }
    }

    pub fn entries(&self) -> &[EnergyType] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&EnergyType> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// ターゲット列の表示順
    ///
    /// 名前の長さで安定ソート（見た目のシャッフル用）。照合ロジックには影響しない。
    pub fn target_order(&self) -> Vec<&EnergyType> {
        let mut ordered: Vec<&EnergyType> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.name.len());
        ordered
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::new(standard_energy_types()).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog, Catalog::standard());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut entries = standard_energy_types();
        entries.push(EnergyType::new("VAE", ConnectionColor::Vae, "again", "again"));

        let err = Catalog::new(entries).unwrap_err();
        assert!(matches!(err, Error::DuplicateEnergyType(ref name) if name == "VAE"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_target_order_by_name_length() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.target_order().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["VAE", "CLIP", "MODEL", "IMAGE", "LATENT", "CONDITIONING"]);
    }

    #[test]
    fn test_get_and_contains() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("LATENT").unwrap().analogy, "The Dream State");
        assert!(catalog.contains("IMAGE"));
        assert!(!catalog.contains("MASK"));
    }

    #[test]
    fn test_for_port_type() {
        assert_eq!(ConnectionColor::for_port_type("MODEL"), ConnectionColor::Model);
        assert_eq!(ConnectionColor::for_port_type("clip_vision"), ConnectionColor::Clip);
        assert_eq!(ConnectionColor::for_port_type("latent"), ConnectionColor::Latent);
        assert_eq!(ConnectionColor::for_port_type("INT"), ConnectionColor::Neutral);
        assert_eq!(ConnectionColor::for_port_type("string"), ConnectionColor::Neutral);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "MODEL", "color": "MODEL", "analogy": "a", "description": "b"},
            {"name": "MASK", "color": "MASK", "analogy": "c", "description": "d"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("MASK").unwrap().color, ConnectionColor::Mask);
    }
}
