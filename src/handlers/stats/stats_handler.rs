use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::league::clean_sheets;
use crate::league::scorers;
use crate::league::standings::StandingsService;
use crate::models::common::ApiResponse;

const TOP_SCORERS_LIMIT: i64 = 10;

/// League standings over all recorded matches.
pub async fn get_standings(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = StandingsService::new(pool.get_ref().clone());
    match service.get_standings().await {
        Ok(standings) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": standings
        }))),
        Err(e) => {
            tracing::error!("Failed to compute standings: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to compute standings")))
        }
    }
}

/// Top ten players by total goals.
pub async fn get_top_scorers(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match scorers::top_scorers(pool.get_ref(), TOP_SCORERS_LIMIT).await {
        Ok(scorers) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": scorers
        }))),
        Err(e) => {
            tracing::error!("Failed to compute top scorers: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to compute top scorers")))
        }
    }
}

/// Goalkeeper clean-sheet ranking.
pub async fn get_clean_sheets(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match clean_sheets::clean_sheet_counts(pool.get_ref()).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rows
        }))),
        Err(e) => {
            tracing::error!("Failed to compute clean sheets: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to compute clean sheets")))
        }
    }
}
