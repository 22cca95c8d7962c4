//! DraftKings player data: record types, salary CSV ingestion, and retrieval.

pub mod http;
pub mod salaries;
pub mod source;
pub mod types;

pub use source::{load_players, resolve_source, PlayerSource, SourceFormat};
pub use types::{Player, PlayersPayload, RecentGame};
