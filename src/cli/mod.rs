//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::draftkings::PlayerSource;
use types::{Position, RankBy, Slot};

/// Where to read players from, shared between commands
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Player export: a .json/.csv path or an http(s) URL (or set `DK_LINEUP_PLAYERS`).
    #[clap(long = "players", short = 'P')]
    pub players: Option<PlayerSource>,

    /// Re-download remote exports even if a cached copy exists.
    #[clap(long)]
    pub refresh: bool,
}

/// Optimizer settings that override the config file
#[derive(Debug, Clone, Default, Args)]
pub struct OptimizerArgs {
    /// Config file (defaults to `~/.config/dk-lineup/config.json` when present).
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Salary cap.
    #[clap(long)]
    pub cap: Option<u32>,

    /// Roster slots in search order, comma separated: `--slots PG,SG,G,UTIL`.
    #[clap(long, value_delimiter = ',')]
    pub slots: Option<Vec<Slot>>,

    /// Players kept after ranking.
    #[clap(long)]
    pub pool_size: Option<usize>,

    /// Candidates kept per slot.
    #[clap(long)]
    pub per_slot: Option<usize>,

    /// Weight on the projection (avgDK).
    #[clap(long)]
    pub projection_weight: Option<f64>,

    /// Weight on the value figure (efficiency).
    #[clap(long)]
    pub value_weight: Option<f64>,

    /// Search node budget before falling back.
    #[clap(long, conflicts_with = "unbounded")]
    pub max_nodes: Option<u64>,

    /// Disable the search node budget.
    #[clap(long)]
    pub unbounded: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the highest-scoring lineup under the salary cap.
    Generate {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        optimizer: OptimizerArgs,

        /// Output the lineup as JSON.
        #[clap(long)]
        json: bool,
    },

    /// List players ranked by score, projection, efficiency or salary.
    Rank {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        optimizer: OptimizerArgs,

        /// Filter by position (repeatable): `-p PG -p C`.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,

        /// Sort key.
        #[clap(long, value_enum, default_value_t = RankBy::Score)]
        sort_by: RankBy,

        /// Show at most this many players.
        #[clap(long, short = 'n')]
        limit: Option<usize>,

        /// Show only the most efficient player at each base position.
        #[clap(long)]
        best_per_position: bool,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Optimise the same slate under several salary caps in parallel.
    Sweep {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        optimizer: OptimizerArgs,

        /// Caps to try, comma separated: `--caps 40000,45000,50000`.
        #[clap(long, value_delimiter = ',', required = true)]
        caps: Vec<u32>,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Show the effective optimizer configuration.
    Config {
        #[clap(flatten)]
        optimizer: OptimizerArgs,

        /// Write the effective configuration to the default config path.
        #[clap(long)]
        init: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "dk-lineup",
    about = "DraftKings NBA projections and salary-cap lineup optimizer"
)]
pub struct DkLineup {
    /// Increase log verbosity (`-v` info, `-vv` debug). `RUST_LOG` overrides.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}
