use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtificerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] artificer_common::Error),
}

pub type Result<T> = std::result::Result<T, ArtificerError>;
