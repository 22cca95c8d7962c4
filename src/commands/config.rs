//! Config command implementation

use std::path::{Path, PathBuf};

use crate::{
    cli::OptimizerArgs,
    core::{cache::default_config_path, config::OptimizerConfig},
    Result,
};

use super::common::{apply_overrides, resolve_config};

/// Handle the config command: print the effective configuration, or write it
/// out with `--init`.
pub fn handle_config(optimizer: OptimizerArgs, init: bool) -> Result<()> {
    let path = optimizer.config.clone().unwrap_or_else(default_config_path);
    // `--init` may target a file that does not exist yet.
    let config = if init && !path.exists() {
        apply_overrides(OptimizerConfig::default(), &optimizer)?
    } else {
        resolve_config(&optimizer)?
    };

    if init {
        write_config(&config, &path)?;
        println!("✓ Wrote configuration to {}", path.display()); // tarpaulin::skip
        return Ok(());
    }

    println!("# {}", path.display()); // tarpaulin::skip
    println!("{}", serde_json::to_string_pretty(&config)?); // tarpaulin::skip
    Ok(())
}

/// Save `config` to `path`, creating parent directories.
pub fn write_config(config: &OptimizerConfig, path: &Path) -> Result<PathBuf> {
    config.save(path)?;
    tracing::info!(path = %path.display(), "saved optimizer config");
    Ok(path.to_path_buf())
}
