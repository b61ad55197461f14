// src/models/player.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Position value that marks a player as a goalkeeper, used by the
/// clean-sheet query.
pub const GOALKEEPER_POSITION: &str = "Portero";

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Player with the owning team's name embedded (left join; unassigned
/// players carry `team_name: null`).
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerWithTeam {
    pub id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerCreateRequest {
    pub name: String,
    pub position: Option<String>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerUpdateRequest {
    pub name: String,
    pub position: Option<String>,
    pub team_id: Option<Uuid>,
}

fn validate_player_fields(name: &str, position: Option<&str>) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Player name cannot be empty".to_string());
    }
    if name.len() > 255 {
        return Err("Player name cannot exceed 255 characters".to_string());
    }
    if let Some(position) = position {
        if position.len() > 255 {
            return Err("Position cannot exceed 255 characters".to_string());
        }
    }
    Ok(())
}

impl PlayerCreateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_player_fields(&self.name, self.position.as_deref())
    }
}

impl PlayerUpdateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_player_fields(&self.name, self.position.as_deref())
    }
}
