use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{is_unique_violation, require_ok, require_record};
use crate::db::{match_player_queries, match_queries, player_queries, team_queries};
use crate::models::common::ApiResponse;
use crate::models::match_player::PlayerStatLine;
use crate::models::matches::{
    MatchCreateRequest, MatchDetail, MatchStatus, MatchUpdateRequest,
};
use crate::ok_or_return;
use crate::services::events::{self, LeagueEvent};

const DUPLICATE_MATCH_MESSAGE: &str =
    "A match between these teams on this date already exists";

/// List all matches, most recent first, with team names resolved.
pub async fn get_all_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let matches = ok_or_return!(require_ok(
        match_queries::all_matches_with_teams(pool.get_ref()).await
    ));
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": matches
    })))
}

#[tracing::instrument(
    name = "Create match",
    skip(request, pool),
    fields(home = %request.home_team_id, away = %request.away_team_id)
)]
pub async fn create_match(
    request: web::Json<MatchCreateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Match validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    ok_or_return!(
        check_teams_exist(pool.get_ref(), request.home_team_id, request.away_team_id).await
    );
    if let Some(stats) = request.players_stats.as_deref() {
        ok_or_return!(check_players_exist(pool.get_ref(), stats).await);
    }

    let created = match match_queries::insert_match(
        pool.get_ref(),
        request.home_team_id,
        request.away_team_id,
        request.match_date,
        request.location.as_deref(),
        request.home_team_score.unwrap_or(0),
        request.away_team_score.unwrap_or(0),
        request.status.unwrap_or(MatchStatus::Scheduled),
    )
    .await
    {
        Ok(created) => created,
        Err(e) if is_unique_violation(&e) => {
            return Ok(
                HttpResponse::Conflict().json(ApiResponse::<()>::error(DUPLICATE_MATCH_MESSAGE))
            );
        }
        Err(e) => {
            tracing::error!("Failed to create match: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create match")));
        }
    };

    if let Some(stats) = request.players_stats.as_deref() {
        ok_or_return!(upsert_stat_lines(pool.get_ref(), created.id, stats).await);
    }

    events::publish(LeagueEvent::MatchCreated { match_id: created.id });

    let detail = ok_or_return!(require_record(
        load_match_detail(pool.get_ref(), created.id).await,
        "Match not found"
    ));
    Ok(HttpResponse::Created().json(ApiResponse::success("Match created", detail)))
}

pub async fn get_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let detail = ok_or_return!(require_record(
        load_match_detail(pool.get_ref(), match_id).await,
        "Match not found"
    ));
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": detail
    })))
}

#[tracing::instrument(name = "Update match", skip(request, pool), fields(match_id = %match_id))]
pub async fn update_match(
    match_id: Uuid,
    request: web::Json<MatchUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Match validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(validation_error)));
    }

    let existing = ok_or_return!(require_record(
        match_queries::find_match(pool.get_ref(), match_id).await,
        "Match not found"
    ));

    // Partial update: absent fields keep their stored values. Location is
    // replaced when present, like the other scalar fields.
    let home_team_id = request.home_team_id.unwrap_or(existing.home_team_id);
    let away_team_id = request.away_team_id.unwrap_or(existing.away_team_id);
    let match_date = request.match_date.unwrap_or(existing.match_date);
    let location = request.location.clone().or(existing.location);
    let home_team_score = request.home_team_score.unwrap_or(existing.home_team_score);
    let away_team_score = request.away_team_score.unwrap_or(existing.away_team_score);
    let status = request.status.unwrap_or(existing.status);

    if home_team_id == away_team_id {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("A team cannot play against itself")));
    }
    if request.home_team_id.is_some() || request.away_team_id.is_some() {
        ok_or_return!(check_teams_exist(pool.get_ref(), home_team_id, away_team_id).await);
    }
    if let Some(stats) = request.players_stats.as_deref() {
        ok_or_return!(check_players_exist(pool.get_ref(), stats).await);
    }

    match match_queries::update_match(
        pool.get_ref(),
        match_id,
        home_team_id,
        away_team_id,
        match_date,
        location.as_deref(),
        home_team_score,
        away_team_score,
        status,
    )
    .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found")))
        }
        Err(e) if is_unique_violation(&e) => {
            return Ok(
                HttpResponse::Conflict().json(ApiResponse::<()>::error(DUPLICATE_MATCH_MESSAGE))
            );
        }
        Err(e) => {
            tracing::error!("Failed to update match {}: {}", match_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update match")));
        }
    }

    if let Some(stats) = request.players_stats.as_deref() {
        ok_or_return!(upsert_stat_lines(pool.get_ref(), match_id, stats).await);
    }

    events::publish(LeagueEvent::MatchUpdated { match_id });

    let detail = ok_or_return!(require_record(
        load_match_detail(pool.get_ref(), match_id).await,
        "Match not found"
    ));
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match updated", detail)))
}

#[tracing::instrument(name = "Delete match", skip(pool), fields(match_id = %match_id))]
pub async fn delete_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let deleted = ok_or_return!(require_ok(
        match_queries::delete_match(pool.get_ref(), match_id).await
    ));
    if deleted == 0 {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found")));
    }
    events::publish(LeagueEvent::MatchDeleted { match_id });
    Ok(HttpResponse::NoContent().finish())
}

pub(super) async fn load_match_detail(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Option<MatchDetail>, sqlx::Error> {
    let Some(match_info) = match_queries::find_match_with_teams(pool, match_id).await? else {
        return Ok(None);
    };
    let players = match_player_queries::rows_for_match(pool, match_id).await?;
    Ok(Some(MatchDetail {
        match_info,
        players,
    }))
}

async fn check_teams_exist(
    pool: &PgPool,
    home_team_id: Uuid,
    away_team_id: Uuid,
) -> Result<(), HttpResponse> {
    for (team_id, side) in [(home_team_id, "Home"), (away_team_id, "Away")] {
        let exists = require_ok(team_queries::team_exists(pool, team_id).await)?;
        if !exists {
            return Err(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error(format!("{} team does not exist", side))));
        }
    }
    Ok(())
}

pub(super) async fn check_players_exist(
    pool: &PgPool,
    stats: &[PlayerStatLine],
) -> Result<(), HttpResponse> {
    let player_ids: Vec<Uuid> = stats.iter().map(|line| line.player_id).collect();
    let all_exist = require_ok(player_queries::all_players_exist(pool, &player_ids).await)?;
    if !all_exist {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("One or more players do not exist")));
    }
    Ok(())
}

pub(super) async fn upsert_stat_lines(
    pool: &PgPool,
    match_id: Uuid,
    stats: &[PlayerStatLine],
) -> Result<(), HttpResponse> {
    for line in stats {
        require_ok(match_player_queries::upsert_stat_line(pool, match_id, line).await)?;
        events::publish(LeagueEvent::MatchPlayerStatsUpdated {
            match_id,
            player_id: line.player_id,
        });
    }
    Ok(())
}
