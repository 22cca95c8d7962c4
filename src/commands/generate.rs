//! Lineup generation command implementation

use crate::{
    cli::{OptimizerArgs, SourceArgs},
    optimizer::{optimize, Lineup, SearchOutcome},
    Result,
};

use super::common::{format_salary, load_pool, resolve_config, truncate_name};

/// Handle the generate command
pub async fn handle_generate(
    source: SourceArgs,
    optimizer: OptimizerArgs,
    as_json: bool,
) -> Result<()> {
    let config = resolve_config(&optimizer)?;
    let players = load_pool(&source).await?;

    let lineup = optimize(&players, &config)?;

    if lineup.is_partial() {
        eprintln!(
            "⚠ Only {} of {} slots could be filled under the cap",
            lineup.len(),
            config.slots.len()
        );
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&lineup)?); // tarpaulin::skip
    } else {
        print!("{}", render_lineup(&lineup)); // tarpaulin::skip
    }

    Ok(())
}

fn outcome_label(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Optimal => "optimal".to_string(),
        SearchOutcome::Truncated => {
            "complete, best found within node budget (--unbounded to prove optimal)".to_string()
        }
        SearchOutcome::Greedy { filled, total } => {
            format!("greedy fallback ({}/{} slots)", filled, total)
        }
    }
}

/// Text table for a lineup.
pub fn render_lineup(lineup: &Lineup) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<5} {:<22} {:<7} {:<5} {:>8} {:>7} {:>6} {:>7}\n",
        "Slot", "Name", "Pos", "Team", "Salary", "Proj", "Eff", "Score"
    ));
    out.push_str(&format!(
        "{:<5} {:<22} {:<7} {:<5} {:>8} {:>7} {:>6} {:>7}\n",
        "----", "----", "---", "----", "------", "----", "---", "-----"
    ));

    for entry in &lineup.lineup {
        out.push_str(&format!(
            "{:<5} {:<22} {:<7} {:<5} {:>8} {:>7.1} {:>6.2} {:>7.2}\n",
            entry.slot.to_string(),
            truncate_name(&entry.player.name, 22),
            entry.player.position,
            entry.player.team,
            format_salary(u64::from(entry.player.salary)),
            entry.player.avg_dk,
            entry.player.efficiency,
            entry.score
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Salary: {} / {} ({} left)\n",
        format_salary(lineup.total_salary),
        format_salary(u64::from(lineup.salary_cap)),
        format_salary(lineup.remaining_salary().max(0) as u64)
    ));
    out.push_str(&format!(
        "Projection: {:.1}  Value: {:.2}  Score: {:.2}\n",
        lineup.total_projection, lineup.total_secondary_value, lineup.total_score
    ));
    out.push_str(&format!(
        "Search: {} ({} nodes)\n",
        outcome_label(&lineup.outcome),
        lineup.nodes_visited
    ));

    out
}
