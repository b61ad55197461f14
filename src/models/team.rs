// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::player::Player;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Team with its roster embedded, for `GET /teams?withPlayers=true`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamWithPlayers {
    #[serde(flatten)]
    pub team: Team,
    pub players: Vec<Player>,
}

/// Request to create a new team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamCreateRequest {
    pub name: String,
    pub city: Option<String>,
}

/// Request to update an existing team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamUpdateRequest {
    pub name: String,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamListQuery {
    #[serde(default, rename = "withPlayers")]
    pub with_players: Option<bool>,
}

fn validate_team_fields(name: &str, city: Option<&str>) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Team name cannot be empty".to_string());
    }
    if name.len() > 255 {
        return Err("Team name cannot exceed 255 characters".to_string());
    }
    if let Some(city) = city {
        if city.len() > 255 {
            return Err("City cannot exceed 255 characters".to_string());
        }
    }
    Ok(())
}

impl TeamCreateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_team_fields(&self.name, self.city.as_deref())
    }

    /// Team names are stored trimmed and lower-cased so "Real Madrid" and
    /// "real madrid" collapse to the same row.
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

impl TeamUpdateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_team_fields(&self.name, self.city.as_deref())
    }

    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_lower_cased() {
        let request = TeamCreateRequest {
            name: "  Real Madrid ".to_string(),
            city: None,
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.normalized_name(), "real madrid");
    }

    #[test]
    fn blank_name_is_rejected() {
        let request = TeamCreateRequest {
            name: "   ".to_string(),
            city: None,
        };
        assert!(request.validate().is_err());
    }
}
