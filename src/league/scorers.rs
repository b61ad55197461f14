use sqlx::PgPool;

use crate::models::stats::TopScorer;

/// Sum goals over every stat row, grouped by player. Inner joins mean a
/// player with no stat rows (or no current team) never appears.
pub async fn top_scorers(pool: &PgPool, limit: i64) -> Result<Vec<TopScorer>, sqlx::Error> {
    sqlx::query_as::<_, TopScorer>(
        r#"
        SELECT p.id, p.name, t.name AS team_name, SUM(mp.goals) AS total_goals
        FROM players p
        JOIN teams t ON p.team_id = t.id
        JOIN match_players mp ON mp.player_id = p.id
        GROUP BY p.id, p.name, t.name
        ORDER BY total_goals DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
