//! Core utilities for the DraftKings lineup CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching utilities
//! - `config`: Optimizer configuration
//! - `logging`: Tracing subscriber setup

pub mod cache;
pub mod config;
pub mod logging;

// Re-export commonly used items for convenience
pub use cache::{default_config_path, players_cache_path, try_read_to_string, write_string};
pub use config::{OptimizerConfig, ScoreWeights};
pub use logging::init_logging;
