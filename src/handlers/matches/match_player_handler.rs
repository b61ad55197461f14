use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{require_ok, require_record};
use crate::db::{match_player_queries, match_queries};
use crate::models::common::ApiResponse;
use crate::models::match_player::{AttachPlayersRequest, MatchPlayerUpdateRequest};
use crate::ok_or_return;
use crate::services::events::{self, LeagueEvent};

use super::match_handler::{check_players_exist, upsert_stat_lines};

const NOT_IN_MATCH_MESSAGE: &str = "Player not found in this match.";

/// List the stat rows of a match with player names and teams.
pub async fn get_match_players(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    ok_or_return!(require_record(
        match_queries::find_match(pool.get_ref(), match_id).await,
        "Match not found"
    ));
    let players = ok_or_return!(require_ok(
        match_player_queries::rows_for_match(pool.get_ref(), match_id).await
    ));
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": players
    })))
}

/// Attach players to a match with their initial statistics; entries for
/// already-attached players overwrite the stored row.
#[tracing::instrument(name = "Attach players to match", skip(request, pool), fields(match_id = %match_id))]
pub async fn attach_players(
    match_id: Uuid,
    request: web::Json<AttachPlayersRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Attach players validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    ok_or_return!(require_record(
        match_queries::find_match(pool.get_ref(), match_id).await,
        "Match not found"
    ));
    ok_or_return!(check_players_exist(pool.get_ref(), &request.players).await);
    ok_or_return!(upsert_stat_lines(pool.get_ref(), match_id, &request.players).await);

    let mut attached = Vec::with_capacity(request.players.len());
    for line in &request.players {
        let row = ok_or_return!(require_record(
            match_player_queries::find_row_with_player(pool.get_ref(), match_id, line.player_id)
                .await,
            NOT_IN_MATCH_MESSAGE
        ));
        attached.push(row);
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": attached
    })))
}

#[tracing::instrument(
    name = "Update match player stats",
    skip(request, pool),
    fields(match_id = %match_id, player_id = %player_id)
)]
pub async fn update_match_player_stats(
    match_id: Uuid,
    player_id: Uuid,
    request: web::Json<MatchPlayerUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Match player stats validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    let updated = ok_or_return!(require_ok(
        match_player_queries::update_stat_row(
            pool.get_ref(),
            match_id,
            player_id,
            request.goals,
            request.assists,
            request.played_full_match,
        )
        .await
    ));
    if updated.is_none() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(NOT_IN_MATCH_MESSAGE)));
    }

    events::publish(LeagueEvent::MatchPlayerStatsUpdated {
        match_id,
        player_id,
    });

    let row = ok_or_return!(require_record(
        match_player_queries::find_row_with_player(pool.get_ref(), match_id, player_id).await,
        NOT_IN_MATCH_MESSAGE
    ));
    Ok(HttpResponse::Ok().json(ApiResponse::success("Stats updated", row)))
}

#[tracing::instrument(
    name = "Detach player from match",
    skip(pool),
    fields(match_id = %match_id, player_id = %player_id)
)]
pub async fn detach_player(
    match_id: Uuid,
    player_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let deleted = ok_or_return!(require_ok(
        match_player_queries::delete_stat_row(pool.get_ref(), match_id, player_id).await
    ));
    if deleted == 0 {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(NOT_IN_MATCH_MESSAGE)));
    }
    events::publish(LeagueEvent::MatchPlayerDetached {
        match_id,
        player_id,
    });
    Ok(HttpResponse::NoContent().finish())
}
