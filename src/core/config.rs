//! Optimizer configuration: salary cap, slot template, pool bounds and score weights.
//!
//! Configuration is plain JSON. Every field has a default, so a partial file
//! (or no file at all) is valid:
//!
//! ```json
//! { "salaryCap": 50000, "weights": { "projection": 1.0, "value": 0.0 } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    cli::types::Slot,
    core::cache::{try_read_to_string, write_string},
    LineupError, Result,
};

pub const DEFAULT_SALARY_CAP: u32 = 50_000;
pub const DEFAULT_POOL_SIZE: usize = 60;
pub const DEFAULT_PER_SLOT: usize = 12;
/// Search node budget. A full slate (K=60, N=12) can need a few hundred
/// million nodes to finish, so default runs there report `Truncated`.
pub const DEFAULT_MAX_NODES: u64 = 5_000_000;

/// Linear combination coefficients for the weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Coefficient on the projection (avgDK).
    pub projection: f64,
    /// Coefficient on the secondary value figure (efficiency).
    pub value: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            projection: 0.7,
            value: 0.3,
        }
    }
}

impl ScoreWeights {
    pub fn new(projection: f64, value: f64) -> Self {
        Self { projection, value }
    }

    pub fn score(&self, projection: f64, value: f64) -> f64 {
        self.projection * projection + self.value * value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    pub salary_cap: u32,
    pub slots: Vec<Slot>,
    /// Players kept globally after ranking (K).
    pub pool_size: usize,
    /// Players kept per slot after the eligibility filter (N).
    pub per_slot: usize,
    pub weights: ScoreWeights,
    /// Search nodes visited before giving up on exhaustive search. `None` is unbounded.
    pub max_nodes: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            salary_cap: DEFAULT_SALARY_CAP,
            slots: Slot::classic_template(),
            pool_size: DEFAULT_POOL_SIZE,
            per_slot: DEFAULT_PER_SLOT,
            weights: ScoreWeights::default(),
            max_nodes: Some(DEFAULT_MAX_NODES),
        }
    }
}

impl OptimizerConfig {
    pub fn with_salary_cap(mut self, salary_cap: u32) -> Self {
        self.salary_cap = salary_cap;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_slots(mut self, slots: Vec<Slot>) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<u64>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| {
            Err(LineupError::InvalidConfig {
                message: message.to_string(),
            })
        };

        if self.salary_cap == 0 {
            return invalid("salary cap must be positive");
        }
        if self.slots.is_empty() {
            return invalid("slot template must contain at least one slot");
        }
        if self.pool_size == 0 {
            return invalid("pool size must be positive");
        }
        if self.per_slot == 0 {
            return invalid("per-slot candidate count must be positive");
        }
        let ScoreWeights { projection, value } = self.weights;
        if !projection.is_finite() || !value.is_finite() || projection < 0.0 || value < 0.0 {
            return invalid("score weights must be finite and non-negative");
        }
        if self.max_nodes == Some(0) {
            return invalid("node budget must be positive when set");
        }
        Ok(())
    }

    /// Read a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given; otherwise the default location, falling back to
    /// defaults when nothing is stored there.
    pub fn load_or_default(path: Option<&Path>, default_path: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match try_read_to_string(default_path) {
            Some(contents) => {
                tracing::debug!(path = %default_path.display(), "loading stored config");
                let config: Self = serde_json::from_str(&contents)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_string(path, &serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
