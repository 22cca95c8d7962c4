use super::*;
use crate::cli::types::Position;
use serde_json::json;

#[test]
fn test_player_deserialization_full_record() {
    let json = json!({
        "id": "1628983",
        "name": "Shai Gilgeous-Alexander",
        "position": "PG/SG",
        "team": "OKC",
        "salary": 10400,
        "avgDK": 54.2,
        "efficiency": 5.21,
        "image": "https://example.com/sga.png",
        "gameInfo": "OKC@SAC 11/14/2025 10:00PM ET",
        "last5": [
            { "date": "2025-11-12", "opp": "vs LAL", "dk": 61.5 },
            { "date": "2025-11-10", "opp": "@ MEM", "dk": 48.0 }
        ]
    });

    let player: Player = serde_json::from_value(json).unwrap();
    assert_eq!(player.id, "1628983");
    assert_eq!(player.salary, 10400);
    assert_eq!(player.avg_dk, 54.2);
    assert_eq!(player.efficiency, 5.21);
    assert!(player.positions.contains(Position::PG));
    assert!(player.positions.contains(Position::SG));
    assert_eq!(player.last5.len(), 2);
    assert_eq!(player.last5[0].opp, "vs LAL");
    assert!(player.is_valid());
}

#[test]
fn test_player_deserialization_lenient_numbers() {
    let json = json!({
        "id": 42,
        "name": "Numeric Strings",
        "position": "C",
        "team": "DEN",
        "salary": "$7,500",
        "avgDK": "38.5",
        "efficiency": null
    });

    let player: Player = serde_json::from_value(json).unwrap();
    assert_eq!(player.id, "42");
    assert_eq!(player.salary, 7500);
    assert_eq!(player.avg_dk, 38.5);
    assert_eq!(player.efficiency, 0.0);
    assert!(player.last5.is_empty());
}

#[test]
fn test_player_missing_fields_default_and_invalidate() {
    let player: Player = serde_json::from_value(json!({ "id": "x" })).unwrap();
    assert_eq!(player.name, "");
    assert_eq!(player.position, "");
    assert_eq!(player.salary, 0);
    assert_eq!(player.avg_dk, 0.0);
    assert!(!player.is_valid());
}

#[test]
fn test_player_garbage_numbers_coerce_to_zero() {
    let json = json!({
        "id": "g",
        "name": "Garbage",
        "position": "SF",
        "salary": "n/a",
        "avgDK": -4.0,
        "efficiency": "oops"
    });

    let player: Player = serde_json::from_value(json).unwrap();
    assert_eq!(player.salary, 0);
    assert_eq!(player.avg_dk, 0.0);
    assert_eq!(player.efficiency, 0.0);
    assert!(!player.is_valid());
}

#[test]
fn test_missing_position_listing_is_invalid() {
    let player = Player::new("1", "Mystery", " / ", "NYK", 5000, 20.0, 4.0);
    assert!(player.positions.is_empty());
    assert!(!player.is_valid());
}

#[test]
fn test_non_base_position_listing_is_valid() {
    let player = Player::new("1", "Swingman", "G", "NYK", 5000, 20.0, 4.0);
    assert!(!player.positions.is_empty());
    assert!(player.is_valid());
}

#[test]
fn test_recent_history_truncated_to_five() {
    let games: Vec<_> = (0..7)
        .map(|i| json!({ "opp": format!("G{}", i), "dk": i as f64 }))
        .collect();
    let json = json!({
        "id": "1",
        "name": "Busy Schedule",
        "position": "PF",
        "salary": 6000,
        "avgDK": 30.0,
        "last5": games
    });

    let player: Player = serde_json::from_value(json).unwrap();
    assert_eq!(player.last5.len(), RECENT_GAMES);
    // Most recent first is preserved
    assert_eq!(player.last5[0].opp, "G0");
}

#[test]
fn test_recent_average() {
    let player = Player::new("1", "Form", "SG", "MIA", 6000, 30.0, 5.0).with_recent(vec![
        RecentGame::new("vs BOS", 30.0),
        RecentGame::new("@ NYK", 40.0),
        RecentGame::new("vs CHI", 20.0),
    ]);
    assert_eq!(player.recent_average(), Some(30.0));

    let no_history = Player::new("2", "Rookie", "SG", "MIA", 3000, 10.0, 3.3);
    assert_eq!(no_history.recent_average(), None);
}

#[test]
fn test_payload_envelope_and_bare_list() {
    let envelope = json!({
        "count": 1,
        "data": [{ "id": "1", "name": "A", "position": "C", "salary": 5000, "avgDK": 25.0 }]
    });
    let players = serde_json::from_value::<PlayersPayload>(envelope)
        .unwrap()
        .into_players();
    assert_eq!(players.len(), 1);

    let bare = json!([
        { "id": "1", "name": "A", "position": "C", "salary": 5000, "avgDK": 25.0 },
        { "id": "2", "name": "B", "position": "PG", "salary": 4000, "avgDK": 20.0 }
    ]);
    let players = serde_json::from_value::<PlayersPayload>(bare)
        .unwrap()
        .into_players();
    assert_eq!(players.len(), 2);
    assert_eq!(players[1].name, "B");
}

#[test]
fn test_player_serialization_uses_export_field_names() {
    let player = Player::new("7", "Out", "SF/PF", "BOS", 8000, 40.0, 5.0);
    let json = serde_json::to_value(&player).unwrap();

    assert_eq!(json["id"], "7");
    assert_eq!(json["position"], "SF/PF");
    assert_eq!(json["avgDK"], 40.0);
    assert!(json.get("positions").is_none());
    assert!(json.get("image").is_none());
    assert!(json["last5"].as_array().unwrap().is_empty());
}
