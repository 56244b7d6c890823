//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("Fetch error: {0}")]
    Fetch(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
