//! Error types for the DraftKings lineup CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Player source not provided and {env_var} environment variable not set")]
    MissingSource { env_var: String },

    #[error("Unsupported player source: {source_name}")]
    UnsupportedSource { source_name: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid roster slot: {slot}")]
    InvalidSlot { slot: String },

    #[error("No players available for optimization")]
    EmptyPool,

    #[error("Unable to build a valid lineup under a salary cap of {salary_cap}")]
    Infeasible { salary_cap: u32 },
}
