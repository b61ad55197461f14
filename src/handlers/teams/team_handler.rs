use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::helpers::{is_unique_violation, require_ok, require_record};
use crate::db::{player_queries, team_queries};
use crate::models::common::ApiResponse;
use crate::models::player::Player;
use crate::models::team::{
    TeamCreateRequest, TeamListQuery, TeamUpdateRequest, TeamWithPlayers,
};
use crate::ok_or_return;
use crate::services::events::{self, LeagueEvent};

/// List all teams, optionally with each team's roster embedded.
pub async fn get_all_teams(
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let teams = ok_or_return!(require_ok(team_queries::all_teams(pool.get_ref()).await));

    if !query.with_players.unwrap_or(false) {
        return Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": teams
        })));
    }

    let players = ok_or_return!(require_ok(player_queries::all_players(pool.get_ref()).await));
    let mut by_team: HashMap<Uuid, Vec<Player>> = HashMap::new();
    for player in players {
        if let Some(team_id) = player.team_id {
            by_team.entry(team_id).or_default().push(player);
        }
    }

    let data: Vec<TeamWithPlayers> = teams
        .into_iter()
        .map(|team| {
            let players = by_team.remove(&team.id).unwrap_or_default();
            TeamWithPlayers { team, players }
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": data
    })))
}

#[tracing::instrument(
    name = "Create team",
    skip(request, pool),
    fields(team_name = %request.name)
)]
pub async fn create_team(
    request: web::Json<TeamCreateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Team validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    let name = request.normalized_name();
    let taken = ok_or_return!(require_ok(
        team_queries::team_name_taken(pool.get_ref(), &name, None).await
    ));
    if taken {
        return Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error("Team name already taken")));
    }

    match team_queries::insert_team(pool.get_ref(), &name, request.city.as_deref()).await {
        Ok(team) => {
            events::publish(LeagueEvent::TeamCreated {
                team_id: team.id,
                name: team.name.clone(),
            });
            Ok(HttpResponse::Created().json(ApiResponse::success("Team created", team)))
        }
        Err(e) if is_unique_violation(&e) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error("Team name already taken")))
        }
        Err(e) => {
            tracing::error!("Failed to create team: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create team")))
        }
    }
}

pub async fn get_team(team_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let team = ok_or_return!(require_record(
        team_queries::find_team(pool.get_ref(), team_id).await,
        "Team not found"
    ));
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": team
    })))
}

#[tracing::instrument(
    name = "Update team",
    skip(request, pool),
    fields(team_id = %team_id, team_name = %request.name)
)]
pub async fn update_team(
    team_id: Uuid,
    request: web::Json<TeamUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Team validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    let name = request.normalized_name();
    let taken = ok_or_return!(require_ok(
        team_queries::team_name_taken(pool.get_ref(), &name, Some(team_id)).await
    ));
    if taken {
        return Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error("Team name already taken")));
    }

    match team_queries::update_team(pool.get_ref(), team_id, &name, request.city.as_deref()).await {
        Ok(Some(team)) => {
            events::publish(LeagueEvent::TeamUpdated { team_id: team.id });
            Ok(HttpResponse::Ok().json(ApiResponse::success("Team updated", team)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Team not found"))),
        Err(e) if is_unique_violation(&e) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error("Team name already taken")))
        }
        Err(e) => {
            tracing::error!("Failed to update team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update team")))
        }
    }
}

#[tracing::instrument(name = "Delete team", skip(pool), fields(team_id = %team_id))]
pub async fn delete_team(team_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let deleted = ok_or_return!(require_ok(
        team_queries::delete_team(pool.get_ref(), team_id).await
    ));
    if deleted == 0 {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Team not found")));
    }
    events::publish(LeagueEvent::TeamDeleted { team_id });
    Ok(HttpResponse::NoContent().finish())
}
