// src/routes/players.rs
use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::imports::upload_handler::{self, SpreadsheetUploadForm};
use crate::handlers::players::player_handler;
use crate::handlers::stats::stats_handler;
use crate::models::player::{PlayerCreateRequest, PlayerUpdateRequest};

/// Top ten players by total goals
#[get("/top-scorers")]
async fn get_top_scorers(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    stats_handler::get_top_scorers(pool).await
}

/// Bulk import players from a spreadsheet file
#[post("/upload")]
async fn upload_players(
    form: MultipartForm<SpreadsheetUploadForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    upload_handler::upload_players(form, pool).await
}

/// List all players with their teams
#[get("")]
async fn get_all_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::get_all_players(pool).await
}

/// Create a new player
#[post("")]
async fn create_player(
    request: web::Json<PlayerCreateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    player_handler::create_player(request, pool).await
}

/// Get one player by id
#[get("/{player_id}")]
async fn get_player(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::get_player(path.into_inner(), pool).await
}

/// Update a player
#[put("/{player_id}")]
async fn update_player(
    path: web::Path<Uuid>,
    request: web::Json<PlayerUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    player_handler::update_player(path.into_inner(), request, pool).await
}

/// Delete a player
#[delete("/{player_id}")]
async fn delete_player(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::delete_player(path.into_inner(), pool).await
}
