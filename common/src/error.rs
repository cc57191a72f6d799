//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate energy type in catalog: {0}")]
    DuplicateEnergyType(String),

    #[error("Catalog has no entries")]
    EmptyCatalog,

    #[error("Unknown part category: {0} (all/loader/conditioning/latent/image)")]
    UnknownCategory(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
