use sqlx::PgPool;
use uuid::Uuid;

use crate::models::match_player::{MatchPlayer, MatchPlayerWithPlayer, PlayerStatLine};

const ROW_WITH_PLAYER: &str = r#"
    SELECT mp.id, mp.match_id, mp.player_id, p.name AS player_name,
           p.position AS player_position, p.team_id, t.name AS team_name,
           mp.goals, mp.assists, mp.played_full_match, mp.created_at, mp.updated_at
    FROM match_players mp
    JOIN players p ON mp.player_id = p.id
    LEFT JOIN teams t ON p.team_id = t.id
"#;

pub async fn rows_for_match(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<MatchPlayerWithPlayer>, sqlx::Error> {
    let query = format!("{} WHERE mp.match_id = $1 ORDER BY p.name", ROW_WITH_PLAYER);
    sqlx::query_as::<_, MatchPlayerWithPlayer>(&query)
        .bind(match_id)
        .fetch_all(pool)
        .await
}

pub async fn find_row_with_player(
    pool: &PgPool,
    match_id: Uuid,
    player_id: Uuid,
) -> Result<Option<MatchPlayerWithPlayer>, sqlx::Error> {
    let query = format!(
        "{} WHERE mp.match_id = $1 AND mp.player_id = $2",
        ROW_WITH_PLAYER
    );
    sqlx::query_as::<_, MatchPlayerWithPlayer>(&query)
        .bind(match_id)
        .bind(player_id)
        .fetch_optional(pool)
        .await
}

/// Update-or-create a stat row, keyed on the unique (match_id, player_id)
/// pair. Absent fields of the line fall back to the column defaults.
pub async fn upsert_stat_line<'e, E>(
    executor: E,
    match_id: Uuid,
    line: &PlayerStatLine,
) -> Result<MatchPlayer, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, MatchPlayer>(
        r#"
        INSERT INTO match_players (id, match_id, player_id, goals, assists, played_full_match)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (match_id, player_id) DO UPDATE SET
            goals = EXCLUDED.goals,
            assists = EXCLUDED.assists,
            played_full_match = EXCLUDED.played_full_match,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(line.player_id)
    .bind(line.goals.unwrap_or(0))
    .bind(line.assists.unwrap_or(0))
    .bind(line.played_full_match.unwrap_or(false))
    .fetch_one(executor)
    .await
}

/// Partial update of one stat row; absent fields keep their stored values.
pub async fn update_stat_row(
    pool: &PgPool,
    match_id: Uuid,
    player_id: Uuid,
    goals: Option<i32>,
    assists: Option<i32>,
    played_full_match: Option<bool>,
) -> Result<Option<MatchPlayer>, sqlx::Error> {
    sqlx::query_as::<_, MatchPlayer>(
        r#"
        UPDATE match_players
        SET goals = COALESCE($3, goals),
            assists = COALESCE($4, assists),
            played_full_match = COALESCE($5, played_full_match),
            updated_at = now()
        WHERE match_id = $1 AND player_id = $2
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(player_id)
    .bind(goals)
    .bind(assists)
    .bind(played_full_match)
    .fetch_optional(pool)
    .await
}

pub async fn delete_stat_row(
    pool: &PgPool,
    match_id: Uuid,
    player_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM match_players WHERE match_id = $1 AND player_id = $2")
        .bind(match_id)
        .bind(player_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
