// src/models/match_player.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchPlayer {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub goals: i32,
    pub assists: i32,
    pub played_full_match: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stat row joined with the player (and the player's current team).
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchPlayerWithPlayer {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub player_position: Option<String>,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
    pub goals: i32,
    pub assists: i32,
    pub played_full_match: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of a `players_stats` array: a player attached to a match with
/// optional initial statistics.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerStatLine {
    pub player_id: Uuid,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub played_full_match: Option<bool>,
}

impl PlayerStatLine {
    pub fn validate(&self) -> Result<(), String> {
        if self.goals.is_some_and(|g| g < 0) {
            return Err("Goals cannot be negative".to_string());
        }
        if self.assists.is_some_and(|a| a < 0) {
            return Err("Assists cannot be negative".to_string());
        }
        Ok(())
    }
}

/// Body of `POST /matches/{id}/players`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttachPlayersRequest {
    pub players: Vec<PlayerStatLine>,
}

impl AttachPlayersRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.players.is_empty() {
            return Err("At least one player is required".to_string());
        }
        for line in &self.players {
            line.validate()?;
        }
        Ok(())
    }
}

/// Body of `PUT /matches/{id}/players/{playerId}`; absent fields keep
/// their stored values.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchPlayerUpdateRequest {
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub played_full_match: Option<bool>,
}

impl MatchPlayerUpdateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.goals.is_some_and(|g| g < 0) {
            return Err("Goals cannot be negative".to_string());
        }
        if self.assists.is_some_and(|a| a < 0) {
            return Err("Assists cannot be negative".to_string());
        }
        Ok(())
    }
}
