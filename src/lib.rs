//! DraftKings NBA Lineup Library
//!
//! Builds salary-cap-constrained DraftKings NBA classic lineups from a pool of
//! player projections.
//!
//! ## Features
//!
//! - **Player Ingestion**: JSON player exports and DraftKings salary CSVs, local or remote
//! - **Weighted Scoring**: Rank players by a blend of projection and salary value
//! - **Lineup Optimization**: Bounded exhaustive search with a greedy fallback
//! - **Cap Sweeps**: Optimise one slate under many salary caps in parallel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dk_lineup::{draftkings::load_players, optimizer::optimize, OptimizerConfig, PlayerSource};
//!
//! # async fn example() -> dk_lineup::Result<()> {
//! let source: PlayerSource = "players-2025-11-14-last5.json".parse()?;
//! let players = load_players(&source, false).await?;
//!
//! let lineup = optimize(&players, &OptimizerConfig::default())?;
//! for entry in &lineup.lineup {
//!     println!("{:<5} {}", entry.slot, entry.player.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your player export to avoid passing it in every command:
//! ```bash
//! export DK_LINEUP_PLAYERS=./players-2025-11-14-last5.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod draftkings;
pub mod error;
pub mod optimizer;

// Re-export commonly used types
pub use crate::cli::types::{Position, PositionSet, Slot};
pub use crate::core::config::{OptimizerConfig, ScoreWeights};
pub use crate::draftkings::{Player, PlayerSource};
pub use crate::error::{LineupError, Result};
pub use crate::optimizer::{Lineup, LineupEntry, SearchOutcome};

pub const PLAYERS_SOURCE_ENV_VAR: &str = "DK_LINEUP_PLAYERS";
