//! パーツ棚（ノード部品カタログ）

use crate::catalog::ConnectionColor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ノードの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Loader,
    Conditioning,
    Latent,
    Sampling,
    Image,
    Utils,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Loader => "loader",
            NodeCategory::Conditioning => "conditioning",
            NodeCategory::Latent => "latent",
            NodeCategory::Sampling => "sampling",
            NodeCategory::Image => "image",
            NodeCategory::Utils => "utils",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 入出力ポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub name: String,
    pub port_type: String,
}

impl Port {
    pub fn new(name: &str, port_type: &str) -> Self {
        Self {
            name: name.to_string(),
            port_type: port_type.to_string(),
        }
    }

    pub fn color(&self) -> ConnectionColor {
        ConnectionColor::for_port_type(&self.port_type)
    }
}

/// ノード部品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePart {
    pub title: String,
    pub category: NodeCategory,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    pub description: String,
}

fn part(
    title: &str,
    category: NodeCategory,
    inputs: &[(&str, &str)],
    outputs: &[(&str, &str)],
    description: &str,
) -> NodePart {
    NodePart {
        title: title.to_string(),
        category,
        inputs: inputs.iter().map(|(n, t)| Port::new(n, t)).collect(),
        outputs: outputs.iter().map(|(n, t)| Port::new(n, t)).collect(),
        description: description.to_string(),
    }
}

/// 棚に並ぶ全パーツ
pub fn all_parts() -> Vec<NodePart> {
    vec![
        part(
            "Load Checkpoint",
            NodeCategory::Loader,
            &[("ckpt_name", "string")],
            &[("MODEL", "MODEL"), ("CLIP", "CLIP"), ("VAE", "VAE")],
            "The Central Cortex. Unpacks the \"Model Bundle\" containing the Brain, Translator, and Eyes.",
        ),
        part(
            "Load LoRA",
            NodeCategory::Loader,
            &[("model", "MODEL"), ("clip", "CLIP")],
            &[("MODEL", "MODEL"), ("CLIP", "CLIP")],
            "The Skill Chip. Modifies the brain to specialize in a style (e.g., Anime, Charcoal).",
        ),
        part(
            "CLIP Text Encode",
            NodeCategory::Conditioning,
            &[("clip", "CLIP"), ("text", "string")],
            &[("CONDITIONING", "CONDITIONING")],
            "The Translator. Converts English words into \"Attractor\" (Positive) or \"Repulsor\" (Negative) signals.",
        ),
        part(
            "Empty Latent Image",
            NodeCategory::Latent,
            &[("width", "INT"), ("height", "INT")],
            &[("LATENT", "LATENT")],
            "The Blank Canvas. Generates a block of pure noise for the robot to sculpt.",
        ),
        part(
            "VAE Encode",
            NodeCategory::Latent,
            &[("pixels", "IMAGE"), ("vae", "VAE")],
            &[("LATENT", "LATENT")],
            "The Scanner. Compresses a pixel image into the \"Dream State\" (Latent).",
        ),
        part(
            "KSampler",
            NodeCategory::Sampling,
            &[
                ("model", "MODEL"),
                ("positive", "CONDITIONING"),
                ("negative", "CONDITIONING"),
                ("latent_image", "LATENT"),
            ],
            &[("LATENT", "LATENT")],
            "The Hand. The complex engine that performs the denoising process to create the image.",
        ),
        part(
            "VAE Decode",
            NodeCategory::Image,
            &[("samples", "LATENT"), ("vae", "VAE")],
            &[("IMAGE", "IMAGE")],
            "The Printer. Expands the finished dream back into viewable pixels.",
        ),
        part(
            "Save Image",
            NodeCategory::Image,
            &[("images", "IMAGE")],
            &[],
            "The Archive. Saves the final result to disk.",
        ),
    ]
}

/// 棚のフィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartFilter {
    #[default]
    All,
    Category(NodeCategory),
}

impl PartFilter {
    /// フィルタボタンの並び
    pub const CHOICES: [PartFilter; 5] = [
        PartFilter::All,
        PartFilter::Category(NodeCategory::Loader),
        PartFilter::Category(NodeCategory::Conditioning),
        PartFilter::Category(NodeCategory::Latent),
        PartFilter::Category(NodeCategory::Image),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PartFilter::All => "All Parts",
            PartFilter::Category(NodeCategory::Loader) => "Loaders (Source)",
            PartFilter::Category(NodeCategory::Conditioning) => "Conditioning (Directives)",
            PartFilter::Category(NodeCategory::Latent) => "Latent (Workshop)",
            PartFilter::Category(NodeCategory::Sampling) => "Sampling",
            PartFilter::Category(NodeCategory::Image) => "Image (Output)",
            PartFilter::Category(NodeCategory::Utils) => "Utilities",
        }
    }

    /// 潜在空間フィルタはサンプラーも含む
    pub fn accepts(&self, part: &NodePart) -> bool {
        match self {
            PartFilter::All => true,
            PartFilter::Category(NodeCategory::Latent) => {
                matches!(part.category, NodeCategory::Latent | NodeCategory::Sampling)
            }
            PartFilter::Category(category) => part.category == *category,
        }
    }
}

impl FromStr for PartFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(PartFilter::All),
            "loader" => Ok(PartFilter::Category(NodeCategory::Loader)),
            "conditioning" => Ok(PartFilter::Category(NodeCategory::Conditioning)),
            "latent" => Ok(PartFilter::Category(NodeCategory::Latent)),
            "image" => Ok(PartFilter::Category(NodeCategory::Image)),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// フィルタ適用後のパーツ
pub fn filter_parts(parts: &[NodePart], filter: PartFilter) -> Vec<&NodePart> {
    parts.iter().filter(|p| filter.accepts(p)).collect()
}
