// src/routes/teams.rs
use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::imports::upload_handler::{self, SpreadsheetUploadForm};
use crate::handlers::stats::stats_handler;
use crate::handlers::teams::team_handler;
use crate::models::team::{TeamCreateRequest, TeamListQuery, TeamUpdateRequest};

/// League standings over all recorded matches
#[get("/standings")]
async fn get_standings(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    stats_handler::get_standings(pool).await
}

/// Bulk import teams from a spreadsheet file
#[post("/upload")]
async fn upload_teams(
    form: MultipartForm<SpreadsheetUploadForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    upload_handler::upload_teams(form, pool).await
}

/// List all teams (optionally with rosters)
#[get("")]
async fn get_all_teams(
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    team_handler::get_all_teams(query, pool).await
}

/// Create a new team
#[post("")]
async fn create_team(
    request: web::Json<TeamCreateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    team_handler::create_team(request, pool).await
}

/// Get one team by id
#[get("/{team_id}")]
async fn get_team(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    team_handler::get_team(path.into_inner(), pool).await
}

/// Update a team
#[put("/{team_id}")]
async fn update_team(
    path: web::Path<Uuid>,
    request: web::Json<TeamUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    team_handler::update_team(path.into_inner(), request, pool).await
}

/// Delete a team
#[delete("/{team_id}")]
async fn delete_team(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    team_handler::delete_team(path.into_inner(), pool).await
}
