use sqlx::PgPool;
use uuid::Uuid;

use super::{cell, header_indices, row_is_empty, ImportError, ImportReport};

/// Import teams from parsed rows (first row = header, `name` required,
/// `city` optional). Names are trimmed and lower-cased before the upsert,
/// so differently-cased duplicates collapse onto one row. The whole batch
/// is one transaction; only row-level business errors are tolerated.
pub async fn import_teams(
    pool: &PgPool,
    mut rows: Vec<Vec<String>>,
) -> Result<ImportReport, ImportError> {
    if rows.is_empty() {
        return Err(ImportError::MissingColumn("name"));
    }
    let headers = header_indices(&rows.remove(0));
    let name_idx = *headers.get("name").ok_or(ImportError::MissingColumn("name"))?;
    let city_idx = headers.get("city").copied();

    let mut imported = 0usize;
    let mut errors = Vec::new();
    let mut tx = pool.begin().await?;

    for row in &rows {
        if row_is_empty(row) {
            continue;
        }

        let original_name = cell(row, name_idx);
        let normalized_name = original_name.to_lowercase();
        if normalized_name.is_empty() {
            errors.push("Skipped a row with an empty team name.".to_string());
            continue;
        }

        let city = city_idx
            .map(|idx| cell(row, idx))
            .filter(|city| !city.is_empty());

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, city) VALUES ($1, $2, $3)
            ON CONFLICT (name) DO UPDATE SET
                city = EXCLUDED.city,
                updated_at = now()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&normalized_name)
        .bind(city)
        .execute(&mut *tx)
        .await?;

        imported += 1;
    }

    tx.commit().await?;
    tracing::info!("Imported {} teams ({} rows skipped)", imported, errors.len());
    Ok(ImportReport { imported, errors })
}
