use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{require_ok, require_record};
use crate::db::{player_queries, team_queries};
use crate::models::common::ApiResponse;
use crate::models::player::{PlayerCreateRequest, PlayerUpdateRequest};
use crate::ok_or_return;
use crate::services::events::{self, LeagueEvent};

/// List all players with their current team embedded.
pub async fn get_all_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let players = ok_or_return!(require_ok(
        player_queries::all_players_with_team(pool.get_ref()).await
    ));
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": players
    })))
}

#[tracing::instrument(
    name = "Create player",
    skip(request, pool),
    fields(player_name = %request.name)
)]
pub async fn create_player(
    request: web::Json<PlayerCreateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Player validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    if let Some(team_id) = request.team_id {
        let exists = ok_or_return!(require_ok(
            team_queries::team_exists(pool.get_ref(), team_id).await
        ));
        if !exists {
            return Ok(
                HttpResponse::BadRequest().json(ApiResponse::<()>::error("Team does not exist"))
            );
        }
    }

    match player_queries::insert_player(
        pool.get_ref(),
        request.name.trim(),
        request.position.as_deref(),
        request.team_id,
    )
    .await
    {
        Ok(player) => {
            events::publish(LeagueEvent::PlayerCreated {
                player_id: player.id,
                name: player.name.clone(),
            });
            let player = ok_or_return!(require_record(
                player_queries::find_player_with_team(pool.get_ref(), player.id).await,
                "Player not found"
            ));
            Ok(HttpResponse::Created().json(ApiResponse::success("Player created", player)))
        }
        Err(e) => {
            tracing::error!("Failed to create player: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create player")))
        }
    }
}

pub async fn get_player(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let player = ok_or_return!(require_record(
        player_queries::find_player_with_team(pool.get_ref(), player_id).await,
        "Player not found"
    ));
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": player
    })))
}

#[tracing::instrument(
    name = "Update player",
    skip(request, pool),
    fields(player_id = %player_id, player_name = %request.name)
)]
pub async fn update_player(
    player_id: Uuid,
    request: web::Json<PlayerUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Player validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    if let Some(team_id) = request.team_id {
        let exists = ok_or_return!(require_ok(
            team_queries::team_exists(pool.get_ref(), team_id).await
        ));
        if !exists {
            return Ok(
                HttpResponse::BadRequest().json(ApiResponse::<()>::error("Team does not exist"))
            );
        }
    }

    let updated = ok_or_return!(require_ok(
        player_queries::update_player(
            pool.get_ref(),
            player_id,
            request.name.trim(),
            request.position.as_deref(),
            request.team_id,
        )
        .await
    ));
    match updated {
        Some(_) => {
            events::publish(LeagueEvent::PlayerUpdated { player_id });
            let player = ok_or_return!(require_record(
                player_queries::find_player_with_team(pool.get_ref(), player_id).await,
                "Player not found"
            ));
            Ok(HttpResponse::Ok().json(ApiResponse::success("Player updated", player)))
        }
        None => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Player not found"))),
    }
}

#[tracing::instrument(name = "Delete player", skip(pool), fields(player_id = %player_id))]
pub async fn delete_player(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let deleted = ok_or_return!(require_ok(
        player_queries::delete_player(pool.get_ref(), player_id).await
    ));
    if deleted == 0 {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Player not found")));
    }
    events::publish(LeagueEvent::PlayerDeleted { player_id });
    Ok(HttpResponse::NoContent().finish())
}
