use sqlx::PgPool;
use uuid::Uuid;

use crate::models::team::Team;

/// All teams in creation order. The standings fold relies on this order
/// being deterministic for exact ties.
pub async fn all_teams(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY created_at, id")
        .fetch_all(pool)
        .await
}

pub async fn find_team(pool: &PgPool, team_id: Uuid) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool)
        .await
}

pub async fn team_exists(pool: &PgPool, team_id: Uuid) -> Result<bool, sqlx::Error> {
    let id: Option<Uuid> = sqlx::query_scalar("SELECT id FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool)
        .await?;
    Ok(id.is_some())
}

/// Case-insensitive lookup by name. Takes any executor so the import can
/// run it inside its batch transaction.
pub async fn find_team_id_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Uuid>, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT id FROM teams WHERE LOWER(name) = LOWER($1)")
        .bind(name)
        .fetch_optional(executor)
        .await
}

/// Whether a (normalized) name is already taken, optionally ignoring one id.
pub async fn team_name_taken(
    pool: &PgPool,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<bool, sqlx::Error> {
    let id: Option<Uuid> = match exclude {
        Some(team_id) => {
            sqlx::query_scalar("SELECT id FROM teams WHERE LOWER(name) = LOWER($1) AND id <> $2")
                .bind(name)
                .bind(team_id)
                .fetch_optional(pool)
                .await?
        }
        None => {
            sqlx::query_scalar("SELECT id FROM teams WHERE LOWER(name) = LOWER($1)")
                .bind(name)
                .fetch_optional(pool)
                .await?
        }
    };
    Ok(id.is_some())
}

pub async fn insert_team(
    pool: &PgPool,
    name: &str,
    city: Option<&str>,
) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "INSERT INTO teams (id, name, city) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(city)
    .fetch_one(pool)
    .await
}

pub async fn update_team(
    pool: &PgPool,
    team_id: Uuid,
    name: &str,
    city: Option<&str>,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "UPDATE teams SET name = $2, city = $3, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(team_id)
    .bind(name)
    .bind(city)
    .fetch_optional(pool)
    .await
}

/// Physical delete; match rows cascade, players fall back to unassigned.
pub async fn delete_team(pool: &PgPool, team_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
