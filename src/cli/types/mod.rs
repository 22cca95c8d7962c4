//! Type-safe wrappers and enums for DraftKings NBA data.

pub mod position;
pub mod rank;
pub mod slot;

pub use position::{Position, PositionSet};
pub use rank::RankBy;
pub use slot::Slot;
