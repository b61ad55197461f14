use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

mod common;
use common::utils::{create_match, create_team, spawn_app, TestApp};

async fn fetch_standings(test_app: &TestApp, client: &Client) -> Vec<Value> {
    let response = client
        .get(format!("{}/teams/standings", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response.");
    body["data"].as_array().unwrap().clone()
}

fn row_for<'a>(standings: &'a [Value], team_id: Uuid) -> &'a Value {
    standings
        .iter()
        .find(|row| row["id"] == team_id.to_string().as_str())
        .expect("team missing from standings")
}

#[tokio::test]
async fn team_without_matches_appears_with_zeros() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&test_app, &client, "Nuevo").await;
    let standings = fetch_standings(&test_app, &client).await;

    let row = row_for(&standings, team_id);
    assert_eq!(row["played"], 0);
    assert_eq!(row["points"], 0);
    assert_eq!(row["goal_difference"], 0);
}

#[tokio::test]
async fn home_win_credits_both_sides() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let winner = create_team(&test_app, &client, "Ganador").await;
    let loser = create_team(&test_app, &client, "Perdedor").await;
    create_match(&test_app, &client, winner, loser, "2025-09-20T18:00:00Z", 2, 1).await;

    let standings = fetch_standings(&test_app, &client).await;

    let winner_row = row_for(&standings, winner);
    assert_eq!(winner_row["points"], 3);
    assert_eq!(winner_row["goal_difference"], 1);
    assert_eq!(winner_row["wins"], 1);

    let loser_row = row_for(&standings, loser);
    assert_eq!(loser_row["points"], 0);
    assert_eq!(loser_row["goal_difference"], -1);
    assert_eq!(loser_row["losses"], 1);
}

#[tokio::test]
async fn point_ties_order_by_goal_difference() {
    let test_app = spawn_app().await;
    let client = Client::new();

    // b is created first so raw insertion order would put it ahead of a.
    let b = create_team(&test_app, &client, "Segundo").await;
    let a = create_team(&test_app, &client, "Primero").await;
    let c = create_team(&test_app, &client, "Tercero").await;
    let d = create_team(&test_app, &client, "Cuarto").await;

    // a: 6 points, +3 goal difference; b: 6 points, +2.
    create_match(&test_app, &client, a, c, "2025-09-06T18:00:00Z", 2, 0).await;
    create_match(&test_app, &client, a, c, "2025-09-13T18:00:00Z", 2, 1).await;
    create_match(&test_app, &client, b, d, "2025-09-06T20:00:00Z", 1, 0).await;
    create_match(&test_app, &client, b, d, "2025-09-13T20:00:00Z", 2, 1).await;

    let standings = fetch_standings(&test_app, &client).await;

    assert_eq!(standings[0]["id"], a.to_string().as_str());
    assert_eq!(standings[1]["id"], b.to_string().as_str());
    assert_eq!(standings[0]["points"], 6);
    assert_eq!(standings[1]["points"], 6);
}

#[tokio::test]
async fn scheduled_match_counts_as_a_played_draw() {
    // Matches are tallied whatever their status; a scheduled 0-0 shows up
    // as a draw for both sides.
    let test_app = spawn_app().await;
    let client = Client::new();

    let home = create_team(&test_app, &client, "Local").await;
    let away = create_team(&test_app, &client, "Visitante").await;

    let response = client
        .post(format!("{}/matches", &test_app.address))
        .json(&serde_json::json!({
            "home_team_id": home,
            "away_team_id": away,
            "match_date": "2025-12-01T18:00:00Z",
            "status": "scheduled",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let standings = fetch_standings(&test_app, &client).await;
    let home_row = row_for(&standings, home);
    assert_eq!(home_row["played"], 1);
    assert_eq!(home_row["draws"], 1);
    assert_eq!(home_row["points"], 1);
}
