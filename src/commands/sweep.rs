//! Salary cap sweep command implementation

use serde::Serialize;

use crate::{
    cli::{OptimizerArgs, SourceArgs},
    optimizer::{sweep_caps, Lineup, SearchOutcome},
    Result,
};

use super::common::{format_salary, load_pool, resolve_config};

/// One cap's result, as printed or serialised.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub salary_cap: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineup: Option<Lineup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Collapse per-cap results into rows, keeping failures as messages.
pub fn sweep_rows(results: Vec<(u32, Result<Lineup>)>) -> Vec<SweepRow> {
    results
        .into_iter()
        .map(|(salary_cap, result)| match result {
            Ok(lineup) => SweepRow {
                salary_cap,
                lineup: Some(lineup),
                error: None,
            },
            Err(e) => SweepRow {
                salary_cap,
                lineup: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

/// Handle the sweep command
pub async fn handle_sweep(
    source: SourceArgs,
    optimizer: OptimizerArgs,
    caps: Vec<u32>,
    as_json: bool,
) -> Result<()> {
    let config = resolve_config(&optimizer)?;
    let players = load_pool(&source).await?;

    tracing::info!(caps = caps.len(), "sweeping salary caps");
    let rows = sweep_rows(sweep_caps(&players, &config, &caps));

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?); // tarpaulin::skip
    } else {
        print!("{}", render_sweep(&rows)); // tarpaulin::skip
    }

    Ok(())
}

fn status(outcome: &SearchOutcome) -> &'static str {
    match outcome {
        SearchOutcome::Optimal => "optimal",
        SearchOutcome::Truncated => "truncated",
        SearchOutcome::Greedy { .. } => "greedy",
    }
}

/// Text table, one line per cap.
pub fn render_sweep(rows: &[SweepRow]) -> String {
    let mut out = format!(
        "{:>9} {:<10} {:>8} {:>9} {:>7}\n",
        "Cap", "Status", "Score", "Salary", "Filled"
    );

    for row in rows {
        let cap = format_salary(u64::from(row.salary_cap));
        match (&row.lineup, &row.error) {
            (Some(lineup), _) => out.push_str(&format!(
                "{:>9} {:<10} {:>8.2} {:>9} {:>7}\n",
                cap,
                status(&lineup.outcome),
                lineup.total_score,
                format_salary(lineup.total_salary),
                lineup.len()
            )),
            (None, Some(error)) => out.push_str(&format!("{:>9} {}\n", cap, error)),
            (None, None) => out.push_str(&format!("{:>9} -\n", cap)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::Slot,
        core::config::ScoreWeights,
        draftkings::Player,
        optimizer::{LineupEntry, ScoredPlayer},
        LineupError,
    };

    fn one_player_lineup(cap: u32) -> Lineup {
        let player = Player::new("1", "Center", "C", "T", 9000, 45.0, 5.0);
        let entry = LineupEntry::new(Slot::C, &ScoredPlayer::new(&player, &ScoreWeights::default()));
        Lineup::assemble(vec![entry], cap, SearchOutcome::Optimal, 3)
    }

    #[test]
    fn test_sweep_rows_keep_order_and_errors() {
        let rows = sweep_rows(vec![
            (9000, Ok(one_player_lineup(9000))),
            (100, Err(LineupError::Infeasible { salary_cap: 100 })),
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].salary_cap, 9000);
        assert!(rows[0].lineup.is_some());
        assert!(rows[0].error.is_none());
        assert_eq!(rows[1].salary_cap, 100);
        assert!(rows[1].error.as_deref().unwrap().contains("100"));
    }

    #[test]
    fn test_render_sweep() {
        let rows = sweep_rows(vec![
            (9000, Ok(one_player_lineup(9000))),
            (100, Err(LineupError::EmptyPool)),
        ]);
        let text = render_sweep(&rows);

        assert!(text.contains("$9,000"));
        assert!(text.contains("optimal"));
        assert!(text.contains("No players available for optimization"));
    }

    #[test]
    fn test_sweep_row_json() {
        let rows = sweep_rows(vec![(100, Err(LineupError::EmptyPool))]);
        let json = serde_json::to_value(&rows).unwrap();

        assert_eq!(json[0]["salaryCap"], 100);
        assert!(json[0].get("lineup").is_none());
        assert!(json[0]["error"].is_string());
    }
}
