//! Integration tests for command handlers

use dk_lineup::{
    cli::{types::RankBy, OptimizerArgs, SourceArgs},
    commands::{
        common::resolve_config,
        handle_generate, handle_rank, handle_sweep,
        rank::rank_players,
        RankParams,
    },
    LineupError, Player, PlayerSource, Position,
};
use tempfile::TempDir;

const PLAYERS: &str = r#"[
  {"id":"1","name":"Point","position":"PG","team":"AAA","salary":7000,"avgDK":38,"efficiency":5.4},
  {"id":"2","name":"Shooter","position":"SG","team":"AAA","salary":6500,"avgDK":33,"efficiency":5.1},
  {"id":"3","name":"Wing","position":"SF","team":"BBB","salary":6000,"avgDK":30,"efficiency":5.0},
  {"id":"4","name":"Stretch","position":"PF","team":"BBB","salary":5500,"avgDK":28,"efficiency":5.1},
  {"id":"5","name":"Big","position":"C","team":"CCC","salary":8000,"avgDK":42,"efficiency":5.25},
  {"id":"6","name":"Combo","position":"PG/SG","team":"CCC","salary":4500,"avgDK":23,"efficiency":5.1},
  {"id":"7","name":"Forward","position":"SF/PF","team":"DDD","salary":4000,"avgDK":20,"efficiency":5.0},
  {"id":"8","name":"Backup","position":"C","team":"DDD","salary":3500,"avgDK":17,"efficiency":4.9}
]"#;

struct Fixture {
    _dir: TempDir,
    source: SourceArgs,
    optimizer: OptimizerArgs,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let players = dir.path().join("players.json");
    let config = dir.path().join("config.json");
    std::fs::write(&players, PLAYERS).unwrap();
    std::fs::write(&config, "{}").unwrap();

    Fixture {
        source: SourceArgs {
            players: Some(PlayerSource::File(players)),
            refresh: false,
        },
        optimizer: OptimizerArgs {
            config: Some(config),
            ..OptimizerArgs::default()
        },
        _dir: dir,
    }
}

#[tokio::test]
async fn test_generate_with_file_source() {
    let f = fixture();
    handle_generate(f.source.clone(), f.optimizer.clone(), true)
        .await
        .unwrap();
    handle_generate(f.source, f.optimizer, false).await.unwrap();
}

#[tokio::test]
async fn test_generate_fails_under_tiny_cap() {
    let f = fixture();
    let optimizer = OptimizerArgs {
        cap: Some(1000),
        ..f.optimizer.clone()
    };
    let result = handle_generate(f.source.clone(), optimizer, false).await;
    assert!(matches!(result, Err(LineupError::Infeasible { salary_cap: 1000 })));
}

#[tokio::test]
async fn test_rank_and_sweep_run() {
    let f = fixture();
    handle_rank(RankParams {
        source: f.source.clone(),
        optimizer: f.optimizer.clone(),
        positions: Some(vec![Position::C]),
        sort_by: RankBy::Efficiency,
        limit: Some(3),
        best_per_position: false,
        as_json: true,
    })
    .await
    .unwrap();

    handle_rank(RankParams {
        source: f.source.clone(),
        optimizer: f.optimizer.clone(),
        positions: None,
        sort_by: RankBy::Score,
        limit: None,
        best_per_position: true,
        as_json: false,
    })
    .await
    .unwrap();

    handle_sweep(f.source, f.optimizer, vec![40_000, 50_000], false)
        .await
        .unwrap();
}

#[test]
fn test_rank_uses_configured_weights() {
    let f = fixture();
    let players: Vec<Player> = serde_json::from_str(PLAYERS).unwrap();

    let optimizer = OptimizerArgs {
        projection_weight: Some(0.0),
        value_weight: Some(1.0),
        ..f.optimizer
    };
    let config = resolve_config(&optimizer).unwrap();
    let ranked = rank_players(&players, &config.weights, None, RankBy::Score, Some(2));

    let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
}
