//! Player rankings.
//!
//! Lists the player pool ordered by weighted score, projection, efficiency or
//! salary. Invalid records (no salary, no projection, no position listing)
//! are left out, the same way the optimizer leaves them out.

use serde::Serialize;

use crate::{
    cli::{
        types::{Position, RankBy},
        OptimizerArgs, SourceArgs,
    },
    core::config::ScoreWeights,
    draftkings::Player,
    optimizer::{score_players, ScoredPlayer},
    Result,
};

use super::common::{format_salary, load_pool, resolve_config, truncate_name};

/// Options for the rank command.
#[derive(Debug)]
pub struct RankParams {
    pub source: SourceArgs,
    pub optimizer: OptimizerArgs,
    pub positions: Option<Vec<Position>>,
    pub sort_by: RankBy,
    pub limit: Option<usize>,
    pub best_per_position: bool,
    pub as_json: bool,
}

/// A ranked row as printed or serialised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub salary: u32,
    #[serde(rename = "avgDK")]
    pub avg_dk: f64,
    pub efficiency: f64,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_average: Option<f64>,
}

impl RankedPlayer {
    fn new(rank: usize, candidate: &ScoredPlayer<'_>) -> Self {
        let p = candidate.player;
        Self {
            rank,
            id: p.id.clone(),
            name: p.name.clone(),
            position: p.position.clone(),
            team: p.team.clone(),
            salary: p.salary,
            avg_dk: p.avg_dk,
            efficiency: p.efficiency,
            score: candidate.score,
            recent_average: p.recent_average(),
        }
    }
}

/// Valid players matching any of `positions`, sorted by `sort_by` and cut to
/// `limit`.
pub fn rank_players(
    players: &[Player],
    weights: &ScoreWeights,
    positions: Option<&[Position]>,
    sort_by: RankBy,
    limit: Option<usize>,
) -> Vec<RankedPlayer> {
    let mut scored: Vec<ScoredPlayer<'_>> = score_players(players, weights)
        .into_iter()
        .filter(|s| match positions {
            Some(wanted) if !wanted.is_empty() => {
                wanted.iter().any(|&pos| s.player.positions.contains(pos))
            }
            _ => true,
        })
        .collect();

    scored.sort_by(|a, b| sort_by.compare(a, b));
    if let Some(limit) = limit {
        scored.truncate(limit);
    }

    scored
        .iter()
        .enumerate()
        .map(|(i, s)| RankedPlayer::new(i + 1, s))
        .collect()
}

/// The most efficient valid player listed at each base position. A
/// multi-position player can top more than one position.
pub fn best_per_position(
    players: &[Player],
    weights: &ScoreWeights,
) -> Vec<(Position, RankedPlayer)> {
    let scored = score_players(players, weights);

    Position::ALL
        .iter()
        .filter_map(|&pos| {
            scored
                .iter()
                .filter(|s| s.player.positions.contains(pos))
                // Earlier (higher scored) player wins ties.
                .reduce(|best, s| {
                    if s.player.efficiency > best.player.efficiency {
                        s
                    } else {
                        best
                    }
                })
                .map(|s| (pos, RankedPlayer::new(1, s)))
        })
        .collect()
}

/// Handle the rank command
pub async fn handle_rank(params: RankParams) -> Result<()> {
    let config = resolve_config(&params.optimizer)?;
    let players = load_pool(&params.source).await?;

    if params.best_per_position {
        let best = best_per_position(&players, &config.weights);
        if params.as_json {
            let rows: Vec<_> = best
                .iter()
                .map(|(pos, row)| serde_json::json!({ "position": pos, "player": row }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?); // tarpaulin::skip
        } else {
            for (pos, row) in &best {
                println!(
                    "{:<3} {:<24} {:>8} {:>6.2} pts/$1k",
                    pos.to_string(),
                    truncate_name(&row.name, 24),
                    format_salary(u64::from(row.salary)),
                    row.efficiency
                ); // tarpaulin::skip
            }
        }
        return Ok(());
    }

    let ranked = rank_players(
        &players,
        &config.weights,
        params.positions.as_deref(),
        params.sort_by,
        params.limit,
    );

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?); // tarpaulin::skip
    } else {
        print!("{}", render_rankings(&ranked, params.sort_by)); // tarpaulin::skip
    }

    Ok(())
}

/// Text table for ranked players.
pub fn render_rankings(rows: &[RankedPlayer], sort_by: RankBy) -> String {
    if rows.is_empty() {
        return "No players match.\n".to_string();
    }

    let mut out = format!("Ranked by {}\n", sort_by);
    out.push_str(&format!(
        "{:>4} {:<24} {:<7} {:<5} {:>8} {:>7} {:>6} {:>7} {:>7}\n",
        "#", "Name", "Pos", "Team", "Salary", "Proj", "Eff", "Score", "Last5"
    ));
    for row in rows {
        let recent = row
            .recent_average
            .map(|avg| format!("{:.1}", avg))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>4} {:<24} {:<7} {:<5} {:>8} {:>7.1} {:>6.2} {:>7.2} {:>7}\n",
            row.rank,
            truncate_name(&row.name, 24),
            row.position,
            row.team,
            format_salary(u64::from(row.salary)),
            row.avg_dk,
            row.efficiency,
            row.score,
            recent
        ));
    }
    out
}
