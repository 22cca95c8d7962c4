//! Common utilities and helper functions shared across commands.

use crate::{
    cli::{OptimizerArgs, SourceArgs},
    core::{cache::default_config_path, config::OptimizerConfig},
    draftkings::{load_players, resolve_source, Player},
    Result,
};

/// Effective configuration: config file (explicit or default location) with
/// command-line overrides applied on top.
pub fn resolve_config(args: &OptimizerArgs) -> Result<OptimizerConfig> {
    let config =
        OptimizerConfig::load_or_default(args.config.as_deref(), &default_config_path())?;
    apply_overrides(config, args)
}

/// Apply command-line overrides to `config` and validate the result.
pub fn apply_overrides(mut config: OptimizerConfig, args: &OptimizerArgs) -> Result<OptimizerConfig> {
    if let Some(cap) = args.cap {
        config.salary_cap = cap;
    }
    if let Some(slots) = &args.slots {
        config.slots = slots.clone();
    }
    if let Some(pool_size) = args.pool_size {
        config.pool_size = pool_size;
    }
    if let Some(per_slot) = args.per_slot {
        config.per_slot = per_slot;
    }
    if let Some(weight) = args.projection_weight {
        config.weights.projection = weight;
    }
    if let Some(weight) = args.value_weight {
        config.weights.value = weight;
    }
    if args.unbounded {
        config.max_nodes = None;
    } else if let Some(max_nodes) = args.max_nodes {
        config.max_nodes = Some(max_nodes);
    }

    config.validate()?;
    Ok(config)
}

/// Resolve the player source and load every record from it.
pub async fn load_pool(args: &SourceArgs) -> Result<Vec<Player>> {
    let source = resolve_source(args.players.clone())?;
    load_players(&source, args.refresh).await
}

/// `$49,800`
pub fn format_salary(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

/// Truncate a display name to a column width.
pub fn truncate_name(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}
