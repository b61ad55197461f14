//! Change notifications for external subscribers.
//!
//! No broker is wired up: events serialize to the structured log, keeping
//! the emission points in place so a transport can be attached later
//! without touching the handlers.

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LeagueEvent {
    TeamCreated { team_id: Uuid, name: String },
    TeamUpdated { team_id: Uuid },
    TeamDeleted { team_id: Uuid },
    PlayerCreated { player_id: Uuid, name: String },
    PlayerUpdated { player_id: Uuid },
    PlayerDeleted { player_id: Uuid },
    MatchCreated { match_id: Uuid },
    MatchUpdated { match_id: Uuid },
    MatchDeleted { match_id: Uuid },
    MatchPlayerStatsUpdated { match_id: Uuid, player_id: Uuid },
    MatchPlayerDetached { match_id: Uuid, player_id: Uuid },
}

pub fn publish(event: LeagueEvent) {
    match serde_json::to_string(&event) {
        Ok(payload) => tracing::info!(event = %payload, "league event"),
        Err(e) => tracing::error!("Failed to serialize league event: {}", e),
    }
}
