// src/routes/stats.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::stats::stats_handler;

/// Goalkeeper clean-sheet ranking
#[get("/clean-sheets")]
async fn get_clean_sheets(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    stats_handler::get_clean_sheets(pool).await
}
