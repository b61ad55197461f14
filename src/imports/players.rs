use sqlx::PgPool;
use uuid::Uuid;

use super::{cell, header_indices, row_is_empty, ImportError, ImportReport};
use crate::db::team_queries;

/// Import players from parsed rows (first row = header, `name` required,
/// `position` and `team_name` optional). A `team_name` is resolved to a
/// team id case-insensitively; rows whose team cannot be resolved are
/// skipped and recorded, never aborting the batch. Player names are not
/// unique at the database level, so the upsert is a select-then-write
/// inside the batch transaction, keyed on the lower-cased name.
pub async fn import_players(
    pool: &PgPool,
    mut rows: Vec<Vec<String>>,
) -> Result<ImportReport, ImportError> {
    if rows.is_empty() {
        return Err(ImportError::MissingColumn("name"));
    }
    let headers = header_indices(&rows.remove(0));
    let name_idx = *headers.get("name").ok_or(ImportError::MissingColumn("name"))?;
    let position_idx = headers.get("position").copied();
    let team_name_idx = headers.get("team_name").copied();

    let mut imported = 0usize;
    let mut errors = Vec::new();
    let mut tx = pool.begin().await?;

    for row in &rows {
        if row_is_empty(row) {
            continue;
        }

        let name = cell(row, name_idx);
        let position = position_idx
            .map(|idx| cell(row, idx))
            .filter(|position| !position.is_empty());

        let mut team_id: Option<Uuid> = None;
        if let Some(idx) = team_name_idx {
            let team_name = cell(row, idx);
            if !team_name.is_empty() {
                match team_queries::find_team_id_by_name(&mut *tx, team_name).await? {
                    Some(id) => team_id = Some(id),
                    None => {
                        errors.push(format!(
                            "Skipped player '{}': team '{}' not found.",
                            name, team_name
                        ));
                        continue;
                    }
                }
            }
        }

        if name.is_empty() {
            errors.push("Skipped a row with an empty player name.".to_string());
            continue;
        }
        let normalized_name = name.to_lowercase();

        let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM players WHERE name = $1")
            .bind(&normalized_name)
            .fetch_optional(&mut *tx)
            .await?;

        match existing {
            Some(player_id) => {
                sqlx::query(
                    r#"
                    UPDATE players
                    SET position = $2, team_id = $3, updated_at = now()
                    WHERE id = $1
                    "#,
                )
                .bind(player_id)
                .bind(position)
                .bind(team_id)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO players (id, name, position, team_id) VALUES ($1, $2, $3, $4)",
                )
                .bind(Uuid::new_v4())
                .bind(&normalized_name)
                .bind(position)
                .bind(team_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        imported += 1;
    }

    tx.commit().await?;
    tracing::info!(
        "Imported {} players ({} rows skipped)",
        imported,
        errors.len()
    );
    Ok(ImportReport { imported, errors })
}
