//! ロボット組み立てシーケンサ
//!
//! テキストから画像を作る "The Scout" を1ステップずつ組み立てる。
//! ステップ番号から、取り付け済みのパーツと通電しているケーブルが決まる。

use crate::catalog::ConnectionColor;
use crate::parts::Port;
use serde::Serialize;

/// ロボットの部位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotPart {
    Torso,
    Antenna,
    Hologram,
    Head,
    Visor,
}

/// レッスンで扱うノード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonNode {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub analogy: &'static str,
    pub description: &'static str,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    pub part: RobotPart,
}

/// 組み立て手順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyStep {
    pub node_id: &'static str,
    pub instruction: &'static str,
}

/// パーツ間のケーブル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cable {
    pub from: &'static str,
    pub to: &'static str,
    pub color: ConnectionColor,
}

pub const CHECKPOINT: &str = "checkpoint";
pub const CLIP_TEXT: &str = "clip_text";
pub const EMPTY_LATENT: &str = "empty_latent";
pub const KSAMPLER: &str = "ksampler";
pub const VAE_DECODE: &str = "vae_decode";

pub static STEPS: [AssemblyStep; 5] = [
    AssemblyStep {
        node_id: CHECKPOINT,
        instruction: "Install the Power Core (Checkpoint). This provides the raw intelligence.",
    },
    AssemblyStep {
        node_id: CLIP_TEXT,
        instruction: "Attach the Antennae (CLIP). These translate your text prompts.",
    },
    AssemblyStep {
        node_id: EMPTY_LATENT,
        instruction: "Initialize the Hologram (Latent). This is the noise canvas.",
    },
    AssemblyStep {
        node_id: KSAMPLER,
        instruction: "Mount the Head (KSampler). This creates the processing unit.",
    },
    AssemblyStep {
        node_id: VAE_DECODE,
        instruction: "Equip the Visor (VAE). This allows the robot to \"see\" (render) the result.",
    },
];

/// 両端のパーツが揃うと通電するケーブル
const WIRING: [Cable; 6] = [
    Cable { from: CHECKPOINT, to: KSAMPLER, color: ConnectionColor::Model },
    Cable { from: CLIP_TEXT, to: KSAMPLER, color: ConnectionColor::Clip },
    Cable { from: CLIP_TEXT, to: KSAMPLER, color: ConnectionColor::Clip },
    Cable { from: EMPTY_LATENT, to: KSAMPLER, color: ConnectionColor::Latent },
    Cable { from: KSAMPLER, to: VAE_DECODE, color: ConnectionColor::Latent },
    Cable { from: CHECKPOINT, to: VAE_DECODE, color: ConnectionColor::Vae },
];

fn ports(list: &[(&str, &str)]) -> Vec<Port> {
    list.iter().map(|(n, t)| Port::new(n, t)).collect()
}

/// IDからレッスンノードを取得
pub fn lesson_node(id: &str) -> Option<LessonNode> {
    let node = match id {
        CHECKPOINT => LessonNode {
            id: CHECKPOINT,
            title: "Load Checkpoint",
            category: "Loader",
            analogy: "The Power Core & Torso",
            description: "The central hub that contains the model weights (The Brain), the CLIP model (The Translator), and the VAE (The Eyes). Without this, the robot has no knowledge.",
            inputs: Vec::new(),
            outputs: ports(&[("MODEL", "MODEL"), ("CLIP", "CLIP"), ("VAE", "VAE")]),
            part: RobotPart::Torso,
        },
        CLIP_TEXT => LessonNode {
            id: CLIP_TEXT,
            title: "CLIP Text Encode",
            category: "Conditioning",
            analogy: "The Antennae (Sensors)",
            description: "Receives human language (prompts) and converts it into \"Conditioning\" - mathematical vectors that guide the robot toward or away from concepts.",
            inputs: ports(&[("clip", "CLIP"), ("text", "string")]),
            outputs: ports(&[("CONDITIONING", "CONDITIONING")]),
            part: RobotPart::Antenna,
        },
        EMPTY_LATENT => LessonNode {
            id: EMPTY_LATENT,
            title: "Empty Latent Image",
            category: "Latent",
            analogy: "The Holographic Canvas",
            description: "Generates a \"Latent\" field of pure noise. This is the raw material from which the image will be sculpted. It is not yet visible pixels.",
            inputs: Vec::new(),
            outputs: ports(&[("LATENT", "LATENT")]),
            part: RobotPart::Hologram,
        },
        KSAMPLER => LessonNode {
            id: KSAMPLER,
            title: "KSampler",
            category: "Sampling",
            analogy: "The Brain (Processor)",
            description: "The engine of the robot. It takes the Model (intelligence), Conditioning (instructions), and Latent (canvas) to iteratively remove noise and reveal the image.",
            inputs: ports(&[
                ("model", "MODEL"),
                ("positive", "CONDITIONING"),
                ("negative", "CONDITIONING"),
                ("latent", "LATENT"),
            ]),
            outputs: ports(&[("LATENT", "LATENT")]),
            part: RobotPart::Head,
        },
        VAE_DECODE => LessonNode {
            id: VAE_DECODE,
            title: "VAE Decode",
            category: "Image",
            analogy: "The Visor (Eyes)",
            description: "The Variational Autoencoder. It takes the finished Latent \"dream\" and expands it into actual RGB pixels that humans can see.",
            inputs: ports(&[("samples", "LATENT"), ("vae", "VAE")]),
            outputs: ports(&[("IMAGE", "IMAGE")]),
            part: RobotPart::Visor,
        },
        _ => return None,
    };
    Some(node)
}

/// 組み立ての進行状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyState {
    step_index: usize,
    inspected: Option<&'static str>,
}

impl AssemblyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn current_step(&self) -> &'static AssemblyStep {
        &STEPS[self.step_index]
    }

    pub fn is_first_step(&self) -> bool {
        self.step_index == 0
    }

    pub fn is_final_step(&self) -> bool {
        self.step_index == STEPS.len() - 1
    }

    /// 次のパーツを取り付ける（最終ステップでは何もしない）
    pub fn next(&mut self) -> bool {
        if self.is_final_step() {
            return false;
        }
        self.step_index += 1;
        self.inspected = Some(STEPS[self.step_index].node_id);
        true
    }

    /// 1ステップ戻す（最初のステップでは何もしない）
    pub fn prev(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.step_index -= 1;
        if self.inspected.is_some_and(|id| !self.is_active(id)) {
            self.inspected = None;
        }
        true
    }

    /// パーツ詳細を開く（未取り付けのパーツは開けない）
    pub fn inspect(&mut self, node_id: &str) -> bool {
        match self.active_nodes().into_iter().find(|id| *id == node_id) {
            Some(id) => {
                self.inspected = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn close_inspector(&mut self) {
        self.inspected = None;
    }

    pub fn inspected(&self) -> Option<LessonNode> {
        self.inspected.and_then(lesson_node)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 取り付け済みノードID（ステップ順）
    pub fn active_nodes(&self) -> Vec<&'static str> {
        STEPS[..=self.step_index].iter().map(|s| s.node_id).collect()
    }

    pub fn is_active(&self, node_id: &str) -> bool {
        self.active_nodes().contains(&node_id)
    }

    /// 通電中のケーブル
    pub fn cables(&self) -> Vec<Cable> {
        let active = self.active_nodes();
        WIRING
            .iter()
            .filter(|c| active.contains(&c.from) && active.contains(&c.to))
            .copied()
            .collect()
    }

    /// 進捗率（0-100）
    pub fn progress_percent(&self) -> u8 {
        (((self.step_index + 1) * 100 + STEPS.len() / 2) / STEPS.len()) as u8
    }
}
