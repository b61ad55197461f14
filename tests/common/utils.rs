use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use liga_backend::config::settings::{get_config, DatabaseSettings};
use liga_backend::run;
use liga_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;

    let server = run(listener, connection_pool.clone()).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

pub async fn create_team(app: &TestApp, client: &Client, name: &str) -> Uuid {
    let response = client
        .post(format!("{}/teams", app.address))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201, "team creation failed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
}

pub async fn create_player(
    app: &TestApp,
    client: &Client,
    name: &str,
    position: Option<&str>,
    team_id: Option<Uuid>,
) -> Uuid {
    let response = client
        .post(format!("{}/players", app.address))
        .json(&json!({
            "name": name,
            "position": position,
            "team_id": team_id,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201, "player creation failed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
}

pub async fn create_match(
    app: &TestApp,
    client: &Client,
    home_team_id: Uuid,
    away_team_id: Uuid,
    match_date: &str,
    home_team_score: i32,
    away_team_score: i32,
) -> Uuid {
    let response = client
        .post(format!("{}/matches", app.address))
        .json(&json!({
            "home_team_id": home_team_id,
            "away_team_id": away_team_id,
            "match_date": match_date,
            "home_team_score": home_team_score,
            "away_team_score": away_team_score,
            "status": "finished",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201, "match creation failed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
}

pub async fn attach_player_stats(
    app: &TestApp,
    client: &Client,
    match_id: Uuid,
    player_id: Uuid,
    goals: i32,
    played_full_match: bool,
) {
    let response = client
        .post(format!("{}/matches/{}/players", app.address, match_id))
        .json(&json!({
            "players": [{
                "player_id": player_id,
                "goals": goals,
                "played_full_match": played_full_match,
            }]
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "attaching stats failed");
}
