use reqwest::Client;
use serde_json::Value;

mod common;
use common::utils::{attach_player_stats, create_match, create_player, create_team, spawn_app, TestApp};

async fn fetch_clean_sheets(test_app: &TestApp, client: &Client) -> Vec<Value> {
    let response = client
        .get(format!("{}/clean-sheets", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response.");
    body["data"].as_array().unwrap().clone()
}

#[tokio::test]
async fn home_keeper_of_a_shutout_counts_once() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let home = create_team(&test_app, &client, "Local").await;
    let away = create_team(&test_app, &client, "Visitante").await;
    let keeper = create_player(&test_app, &client, "Cancerbero", Some("Portero"), Some(home)).await;

    let match_id =
        create_match(&test_app, &client, home, away, "2025-09-20T18:00:00Z", 1, 0).await;
    attach_player_stats(&test_app, &client, match_id, keeper, 0, true).await;

    let rows = fetch_clean_sheets(&test_app, &client).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Cancerbero");
    assert_eq!(rows[0]["clean_sheets_count"].as_i64(), Some(1));
}

#[tokio::test]
async fn conceding_keeper_does_not_count() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let home = create_team(&test_app, &client, "Local").await;
    let away = create_team(&test_app, &client, "Visitante").await;
    let keeper = create_player(&test_app, &client, "Cancerbero", Some("Portero"), Some(away)).await;

    // The keeper's (away) side concedes two goals.
    let match_id =
        create_match(&test_app, &client, home, away, "2025-09-20T18:00:00Z", 2, 1).await;
    attach_player_stats(&test_app, &client, match_id, keeper, 0, true).await;

    let rows = fetch_clean_sheets(&test_app, &client).await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn away_keeper_counts_when_home_side_scores_zero() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let home = create_team(&test_app, &client, "Local").await;
    let away = create_team(&test_app, &client, "Visitante").await;
    let keeper = create_player(&test_app, &client, "Cancerbero", Some("Portero"), Some(away)).await;

    let match_id =
        create_match(&test_app, &client, home, away, "2025-09-20T18:00:00Z", 0, 3).await;
    attach_player_stats(&test_app, &client, match_id, keeper, 0, true).await;

    let rows = fetch_clean_sheets(&test_app, &client).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["clean_sheets_count"].as_i64(), Some(1));
}

#[tokio::test]
async fn partial_match_and_other_positions_are_ignored() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let home = create_team(&test_app, &client, "Local").await;
    let away = create_team(&test_app, &client, "Visitante").await;
    let keeper = create_player(&test_app, &client, "Suplente", Some("Portero"), Some(home)).await;
    let striker = create_player(&test_app, &client, "Ariete", Some("Delantero"), Some(home)).await;

    let match_id =
        create_match(&test_app, &client, home, away, "2025-09-20T18:00:00Z", 1, 0).await;
    // Keeper was substituted, striker is not a goalkeeper at all.
    attach_player_stats(&test_app, &client, match_id, keeper, 0, false).await;
    attach_player_stats(&test_app, &client, match_id, striker, 1, true).await;

    let rows = fetch_clean_sheets(&test_app, &client).await;
    assert!(rows.is_empty());
}
