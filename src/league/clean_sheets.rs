use sqlx::PgPool;

use crate::models::player::GOALKEEPER_POSITION;
use crate::models::stats::CleanSheetRow;

/// Count, per goalkeeper, the distinct matches in which the keeper played
/// the full match and the opposing side scored zero.
///
/// Side membership is judged against the player's *current* team_id, so a
/// keeper who switched teams mid-season has past matches re-evaluated
/// against the new team. Known data-model limitation, kept as-is.
pub async fn clean_sheet_counts(pool: &PgPool) -> Result<Vec<CleanSheetRow>, sqlx::Error> {
    sqlx::query_as::<_, CleanSheetRow>(
        r#"
        SELECT p.id, p.name, t.name AS team_name,
               COUNT(DISTINCT m.id) AS clean_sheets_count
        FROM players p
        JOIN teams t ON p.team_id = t.id
        JOIN match_players mp ON mp.player_id = p.id
        JOIN matches m ON mp.match_id = m.id
        WHERE p.position = $1
          AND mp.played_full_match = TRUE
          AND (
              (m.home_team_id = p.team_id AND m.away_team_score = 0)
              OR (m.away_team_id = p.team_id AND m.home_team_score = 0)
          )
        GROUP BY p.id, p.name, t.name
        ORDER BY clean_sheets_count DESC
        "#,
    )
    .bind(GOALKEEPER_POSITION)
    .fetch_all(pool)
    .await
}
