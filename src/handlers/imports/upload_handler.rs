use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::imports::spreadsheet::{self, ALLOWED_EXTENSIONS};
use crate::imports::{self, ImportError};
use crate::models::common::ApiResponse;
use crate::ok_or_return;

/// Multipart upload form for spreadsheet imports. The temp file is
/// removed on drop, whichever way the request ends.
#[derive(Debug, MultipartForm)]
pub struct SpreadsheetUploadForm {
    #[multipart(limit = "2MB")]
    pub file: TempFile,
}

#[tracing::instrument(
    name = "Upload teams file",
    skip(form, pool),
    fields(file_name = %form.file.file_name.as_deref().unwrap_or("unknown"))
)]
pub async fn upload_teams(
    MultipartForm(form): MultipartForm<SpreadsheetUploadForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let extension = ok_or_return!(validate_extension(&form.file));
    let rows = match spreadsheet::read_rows(form.file.file.path(), &extension) {
        Ok(rows) => rows,
        Err(e) => return Ok(import_error_response(e)),
    };

    match imports::teams::import_teams(pool.get_ref(), rows).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Team import completed. {} teams processed.", report.imported),
            report,
        ))),
        Err(e) => Ok(import_error_response(e)),
    }
}

#[tracing::instrument(
    name = "Upload players file",
    skip(form, pool),
    fields(file_name = %form.file.file_name.as_deref().unwrap_or("unknown"))
)]
pub async fn upload_players(
    MultipartForm(form): MultipartForm<SpreadsheetUploadForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let extension = ok_or_return!(validate_extension(&form.file));
    let rows = match spreadsheet::read_rows(form.file.file.path(), &extension) {
        Ok(rows) => rows,
        Err(e) => return Ok(import_error_response(e)),
    };

    match imports::players::import_players(pool.get_ref(), rows).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!(
                "Player import completed. {} players processed.",
                report.imported
            ),
            report,
        ))),
        Err(e) => Ok(import_error_response(e)),
    }
}

fn validate_extension(file: &TempFile) -> Result<String, HttpResponse> {
    let file_name = file.file_name.as_deref().unwrap_or("");
    match spreadsheet::file_extension(file_name) {
        Some(extension) if ALLOWED_EXTENSIONS.contains(&extension.as_str()) => Ok(extension),
        _ => Err(HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!(
            "Invalid file type. Allowed extensions: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )))),
    }
}

/// Processing and database failures abort the batch: the transaction has
/// already rolled back by the time we get here.
fn import_error_response(error: ImportError) -> HttpResponse {
    match error {
        ImportError::UnsupportedExtension(_) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(error.to_string()))
        }
        ImportError::Database(e) => {
            tracing::error!("Import aborted by database error: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Database error during import; nothing was written",
            ))
        }
        other => {
            tracing::error!("Import failed: {}", other);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(format!(
                "Error processing file: {}",
                other
            )))
        }
    }
}
