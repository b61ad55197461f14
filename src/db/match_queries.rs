use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::matches::{Match, MatchStatus, MatchWithTeams};

const MATCH_WITH_TEAMS: &str = r#"
    SELECT m.id, m.home_team_id, home.name AS home_team_name,
           m.away_team_id, away.name AS away_team_name,
           m.match_date, m.location, m.home_team_score, m.away_team_score,
           m.status, m.created_at, m.updated_at
    FROM matches m
    JOIN teams home ON m.home_team_id = home.id
    JOIN teams away ON m.away_team_id = away.id
"#;

/// Bare match rows, as consumed by the standings fold.
pub async fn all_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches ORDER BY match_date")
        .fetch_all(pool)
        .await
}

pub async fn all_matches_with_teams(pool: &PgPool) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let query = format!("{} ORDER BY m.match_date DESC", MATCH_WITH_TEAMS);
    sqlx::query_as::<_, MatchWithTeams>(&query).fetch_all(pool).await
}

pub async fn find_match(pool: &PgPool, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_match_with_teams(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Option<MatchWithTeams>, sqlx::Error> {
    let query = format!("{} WHERE m.id = $1", MATCH_WITH_TEAMS);
    sqlx::query_as::<_, MatchWithTeams>(&query)
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_match(
    pool: &PgPool,
    home_team_id: Uuid,
    away_team_id: Uuid,
    match_date: DateTime<Utc>,
    location: Option<&str>,
    home_team_score: i32,
    away_team_score: i32,
    status: MatchStatus,
) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (
            id, home_team_id, away_team_id, match_date, location,
            home_team_score, away_team_score, status
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(home_team_id)
    .bind(away_team_id)
    .bind(match_date)
    .bind(location)
    .bind(home_team_score)
    .bind(away_team_score)
    .bind(status)
    .fetch_one(pool)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update_match(
    pool: &PgPool,
    match_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    match_date: DateTime<Utc>,
    location: Option<&str>,
    home_team_score: i32,
    away_team_score: i32,
    status: MatchStatus,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET home_team_id = $2, away_team_id = $3, match_date = $4, location = $5,
            home_team_score = $6, away_team_score = $7, status = $8, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(home_team_id)
    .bind(away_team_id)
    .bind(match_date)
    .bind(location)
    .bind(home_team_score)
    .bind(away_team_score)
    .bind(status)
    .fetch_optional(pool)
    .await
}

/// Physical delete; stat rows cascade with the match.
pub async fn delete_match(pool: &PgPool, match_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
