// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::match_player::{MatchPlayerWithPlayer, PlayerStatLine};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub location: Option<String>,
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match row with both team names resolved, as returned by the list and
/// detail endpoints.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchWithTeams {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub home_team_name: String,
    pub away_team_id: Uuid,
    pub away_team_name: String,
    pub match_date: DateTime<Utc>,
    pub location: Option<String>,
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detail view: the match plus its per-player stat rows.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub match_info: MatchWithTeams,
    pub players: Vec<MatchPlayerWithPlayer>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchCreateRequest {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub location: Option<String>,
    pub home_team_score: Option<i32>,
    pub away_team_score: Option<i32>,
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub players_stats: Option<Vec<PlayerStatLine>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchUpdateRequest {
    pub home_team_id: Option<Uuid>,
    pub away_team_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub home_team_score: Option<i32>,
    pub away_team_score: Option<i32>,
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub players_stats: Option<Vec<PlayerStatLine>>,
}

fn validate_match_fields(
    home_team_id: Uuid,
    away_team_id: Uuid,
    home_team_score: Option<i32>,
    away_team_score: Option<i32>,
    location: Option<&str>,
    players_stats: Option<&[PlayerStatLine]>,
) -> Result<(), String> {
    if home_team_id == away_team_id {
        return Err("A team cannot play against itself".to_string());
    }
    if home_team_score.is_some_and(|s| s < 0) || away_team_score.is_some_and(|s| s < 0) {
        return Err("Scores cannot be negative".to_string());
    }
    if location.is_some_and(|l| l.len() > 255) {
        return Err("Location cannot exceed 255 characters".to_string());
    }
    if let Some(stats) = players_stats {
        for line in stats {
            line.validate()?;
        }
    }
    Ok(())
}

impl MatchCreateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_match_fields(
            self.home_team_id,
            self.away_team_id,
            self.home_team_score,
            self.away_team_score,
            self.location.as_deref(),
            self.players_stats.as_deref(),
        )
    }
}

impl MatchUpdateRequest {
    /// Partial update: side equality is checked against the stored row in
    /// the handler once absent fields are filled in.
    pub fn validate(&self) -> Result<(), String> {
        if self.home_team_score.is_some_and(|s| s < 0) || self.away_team_score.is_some_and(|s| s < 0)
        {
            return Err("Scores cannot be negative".to_string());
        }
        if self.location.as_deref().is_some_and(|l| l.len() > 255) {
            return Err("Location cannot exceed 255 characters".to_string());
        }
        if let Some(stats) = self.players_stats.as_deref() {
            for line in stats {
                line.validate()?;
            }
        }
        Ok(())
    }
}
