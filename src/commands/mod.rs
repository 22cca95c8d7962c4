//! Command implementations for the DraftKings lineup CLI

pub mod common;
pub mod config;
pub mod generate;
pub mod rank;
pub mod sweep;

pub use config::handle_config;
pub use generate::handle_generate;
pub use rank::{handle_rank, RankParams};
pub use sweep::handle_sweep;
