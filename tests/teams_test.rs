use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{create_player, create_team, spawn_app};

#[tokio::test]
async fn create_team_persists_normalized_name() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/teams", &test_app.address))
        .json(&json!({ "name": "  Real Madrid ", "city": "Madrid" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    assert_eq!(body["data"]["name"], "real madrid");

    let saved: (String, Option<String>) =
        sqlx::query_as("SELECT name, city FROM teams")
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch saved team.");
    assert_eq!(saved.0, "real madrid");
    assert_eq!(saved.1.as_deref(), Some("Madrid"));
}

#[tokio::test]
async fn create_team_rejects_blank_name() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/teams", &test_app.address))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn duplicate_team_name_conflicts_case_insensitively() {
    let test_app = spawn_app().await;
    let client = Client::new();

    create_team(&test_app, &client, "Barcelona").await;

    let response = client
        .post(format!("{}/teams", &test_app.address))
        .json(&json!({ "name": "BARCELONA" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn get_team_returns_team_and_unknown_id_is_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&test_app, &client, "Valencia").await;

    let response = client
        .get(format!("{}/teams/{}", &test_app.address, team_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    assert_eq!(body["data"]["name"], "valencia");

    let response = client
        .get(format!("{}/teams/{}", &test_app.address, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn update_team_changes_name_and_city() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&test_app, &client, "Sevilla").await;

    let response = client
        .put(format!("{}/teams/{}", &test_app.address, team_id))
        .json(&json!({ "name": "Sevilla FC", "city": "Sevilla" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    assert_eq!(body["data"]["name"], "sevilla fc");
    assert_eq!(body["data"]["city"], "Sevilla");
}

#[tokio::test]
async fn list_teams_embeds_players_only_on_request() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&test_app, &client, "Girona").await;
    create_player(&test_app, &client, "Gazzaniga", Some("Portero"), Some(team_id)).await;

    let response = client
        .get(format!("{}/teams", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    assert!(body["data"][0].get("players").is_none());

    let response = client
        .get(format!("{}/teams?withPlayers=true", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    assert_eq!(body["data"][0]["players"][0]["name"], "Gazzaniga");
}

#[tokio::test]
async fn delete_team_unassigns_players_and_cascades_matches() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let team_id = create_team(&test_app, &client, "Betis").await;
    let other_id = create_team(&test_app, &client, "Celta").await;
    let player_id = create_player(&test_app, &client, "Bravo", None, Some(team_id)).await;
    common::utils::create_match(
        &test_app,
        &client,
        team_id,
        other_id,
        "2025-09-01T18:00:00Z",
        1,
        0,
    )
    .await;

    let response = client
        .delete(format!("{}/teams/{}", &test_app.address, team_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 204);

    let team_fk: (Option<Uuid>,) = sqlx::query_as("SELECT team_id FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to fetch player.");
    assert_eq!(team_fk.0, None);

    let matches: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM matches")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count matches.");
    assert_eq!(matches.0, 0);
}
