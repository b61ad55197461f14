use sqlx::PgPool;

use crate::db::{match_queries, team_queries};
use crate::models::matches::Match;
use crate::models::stats::StandingRow;
use crate::models::team::Team;

/// Service responsible for computing the league standings table.
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load every team and every match and fold them into the standings
    /// table. Matches are counted whatever their status: a scheduled 0-0
    /// shows up as a played draw, which mirrors how results have always
    /// been tallied here.
    pub async fn get_standings(&self) -> Result<Vec<StandingRow>, sqlx::Error> {
        let teams = team_queries::all_teams(&self.pool).await?;
        let matches = match_queries::all_matches(&self.pool).await?;
        Ok(compute_standings(&teams, &matches))
    }
}

/// Fold all matches into one standings row per team and rank them.
///
/// Win = 3 points, draw = 1, loss = 0. Teams without a single match get an
/// all-zero row rather than being dropped. Ranking is points, then goal
/// difference, then goals for, all descending; `sort_by` is stable, so
/// teams tied on every key keep their input (creation) order.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingRow> {
    let mut standings: Vec<StandingRow> = teams
        .iter()
        .map(|team| {
            let mut row = StandingRow {
                id: team.id,
                name: team.name.clone(),
                played: 0,
                wins: 0,
                draws: 0,
                losses: 0,
                goals_for: 0,
                goals_against: 0,
                goal_difference: 0,
                points: 0,
            };

            for m in matches.iter().filter(|m| m.home_team_id == team.id) {
                tally(&mut row, m.home_team_score, m.away_team_score);
            }
            for m in matches.iter().filter(|m| m.away_team_id == team.id) {
                tally(&mut row, m.away_team_score, m.home_team_score);
            }

            row.goal_difference = row.goals_for - row.goals_against;
            row
        })
        .collect();

    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });

    standings
}

fn tally(row: &mut StandingRow, own_score: i32, opponent_score: i32) {
    row.played += 1;
    row.goals_for += own_score;
    row.goals_against += opponent_score;

    if own_score > opponent_score {
        row.wins += 1;
        row.points += 3;
    } else if own_score < opponent_score {
        row.losses += 1;
    } else {
        row.draws += 1;
        row.points += 1;
    }
}
