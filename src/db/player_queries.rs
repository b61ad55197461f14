use sqlx::PgPool;
use uuid::Uuid;

use crate::models::player::{Player, PlayerWithTeam};

const PLAYER_WITH_TEAM: &str = r#"
    SELECT p.id, p.name, p.position, p.team_id, t.name AS team_name,
           p.created_at, p.updated_at
    FROM players p
    LEFT JOIN teams t ON p.team_id = t.id
"#;

pub async fn all_players(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players ORDER BY created_at, id")
        .fetch_all(pool)
        .await
}

pub async fn all_players_with_team(pool: &PgPool) -> Result<Vec<PlayerWithTeam>, sqlx::Error> {
    let query = format!("{} ORDER BY p.created_at, p.id", PLAYER_WITH_TEAM);
    sqlx::query_as::<_, PlayerWithTeam>(&query).fetch_all(pool).await
}

pub async fn find_player_with_team(
    pool: &PgPool,
    player_id: Uuid,
) -> Result<Option<PlayerWithTeam>, sqlx::Error> {
    let query = format!("{} WHERE p.id = $1", PLAYER_WITH_TEAM);
    sqlx::query_as::<_, PlayerWithTeam>(&query)
        .bind(player_id)
        .fetch_optional(pool)
        .await
}

/// Whether every id in `player_ids` references an existing player.
pub async fn all_players_exist(pool: &PgPool, player_ids: &[Uuid]) -> Result<bool, sqlx::Error> {
    let mut unique: Vec<Uuid> = player_ids.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE id = ANY($1)")
        .bind(&unique)
        .fetch_one(pool)
        .await?;
    Ok(count as usize == unique.len())
}

pub async fn insert_player(
    pool: &PgPool,
    name: &str,
    position: Option<&str>,
    team_id: Option<Uuid>,
) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        "INSERT INTO players (id, name, position, team_id) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(position)
    .bind(team_id)
    .fetch_one(pool)
    .await
}

pub async fn update_player(
    pool: &PgPool,
    player_id: Uuid,
    name: &str,
    position: Option<&str>,
    team_id: Option<Uuid>,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        UPDATE players
        SET name = $2, position = $3, team_id = $4, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(player_id)
    .bind(name)
    .bind(position)
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

/// Physical delete; the player's stat rows cascade with it.
pub async fn delete_player(pool: &PgPool, player_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(player_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
