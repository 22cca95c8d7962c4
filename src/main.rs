//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use dk_lineup::{
    cli::{Commands, DkLineup},
    commands::{handle_config, handle_generate, handle_rank, handle_sweep, RankParams},
    core::logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = DkLineup::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Generate {
            source,
            optimizer,
            json,
        } => handle_generate(source, optimizer, json)
            .await
            .context("failed to generate lineup")?,

        Commands::Rank {
            source,
            optimizer,
            positions,
            sort_by,
            limit,
            best_per_position,
            json,
        } => handle_rank(RankParams {
            source,
            optimizer,
            positions,
            sort_by,
            limit,
            best_per_position,
            as_json: json,
        })
        .await
        .context("failed to rank players")?,

        Commands::Sweep {
            source,
            optimizer,
            caps,
            json,
        } => handle_sweep(source, optimizer, caps, json)
            .await
            .context("failed to sweep salary caps")?,

        Commands::Config { optimizer, init } => {
            handle_config(optimizer, init).context("failed to resolve configuration")?
        }
    }

    Ok(())
}
