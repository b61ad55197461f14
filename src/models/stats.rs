// src/models/stats.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the league standings table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub id: Uuid,
    pub name: String,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

/// One row of the top-scorers leaderboard.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TopScorer {
    pub id: Uuid,
    pub name: String,
    pub team_name: String,
    pub total_goals: i64,
}

/// One row of the goalkeeper clean-sheet ranking.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct CleanSheetRow {
    pub id: Uuid,
    pub name: String,
    pub team_name: String,
    pub clean_sheets_count: i64,
}
