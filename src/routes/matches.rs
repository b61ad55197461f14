// src/routes/matches.rs
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::matches::{match_handler, match_player_handler};
use crate::models::match_player::{AttachPlayersRequest, MatchPlayerUpdateRequest};
use crate::models::matches::{MatchCreateRequest, MatchUpdateRequest};

/// List all matches, most recent first
#[get("")]
async fn get_all_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_all_matches(pool).await
}

/// Create a new match (optionally with player stats)
#[post("")]
async fn create_match(
    request: web::Json<MatchCreateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, pool).await
}

/// List the player stat rows of a match
#[get("/{match_id}/players")]
async fn get_match_players(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_player_handler::get_match_players(path.into_inner(), pool).await
}

/// Attach players to a match with their initial stats
#[post("/{match_id}/players")]
async fn attach_players(
    path: web::Path<Uuid>,
    request: web::Json<AttachPlayersRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_player_handler::attach_players(path.into_inner(), request, pool).await
}

/// Update one player's stats in a match
#[put("/{match_id}/players/{player_id}")]
async fn update_match_player_stats(
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<MatchPlayerUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (match_id, player_id) = path.into_inner();
    match_player_handler::update_match_player_stats(match_id, player_id, request, pool).await
}

/// Detach a player from a match
#[delete("/{match_id}/players/{player_id}")]
async fn detach_player(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (match_id, player_id) = path.into_inner();
    match_player_handler::detach_player(match_id, player_id, pool).await
}

/// Get one match with teams and player stats
#[get("/{match_id}")]
async fn get_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_match(path.into_inner(), pool).await
}

/// Update a match (partial; optionally with player stats)
#[put("/{match_id}")]
async fn update_match(
    path: web::Path<Uuid>,
    request: web::Json<MatchUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::update_match(path.into_inner(), request, pool).await
}

/// Delete a match
#[delete("/{match_id}")]
async fn delete_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::delete_match(path.into_inner(), pool).await
}
