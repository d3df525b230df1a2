//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::extraction::Document;
use crate::screening::export::{to_csv, EXPORT_FILE_NAME};
use crate::screening::models::{AnalysisRecord, RankedResultSet};
use crate::screening::pipeline::{run_batch, DocumentFailure};
use crate::screening::ranking::rank;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub summary: RankedResultSet,
    pub failures: Vec<DocumentFailure>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub records: Vec<AnalysisRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screenings
///
/// Multipart form: `job_description` (text), `api_key` (text), and one or
/// more `files` parts (the resumes, name taken from the part's filename).
///
/// All three inputs are validated before any processing begins; after
/// that, per-document errors only shrink the result, never abort the run.
/// The credential lives for this request only — it is not stored and must
/// never be logged.
pub async fn handle_screen(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreenResponse>, AppError> {
    let mut job_description = String::new();
    let mut api_key = String::new();
    let mut documents: Vec<Document> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid job_description: {e}")))?;
            }
            "api_key" => {
                api_key = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid api_key: {e}")))?;
            }
            "files" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid file upload: {e}")))?;
                documents.push(Document::new(file_name, bytes));
            }
            // Only a missing credential, job description, or file set
            // aborts a run; stray fields are skipped.
            other => warn!("ignoring unexpected multipart field: {other}"),
        }
    }

    // Pre-flight validation: the only abort-before-start conditions.
    if api_key.trim().is_empty() {
        return Err(AppError::Validation("api_key cannot be empty".to_string()));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if documents.is_empty() {
        return Err(AppError::Validation(
            "at least one resume file is required".to_string(),
        ));
    }

    let report = run_batch(
        &documents,
        &job_description,
        &api_key,
        state.analyzer.as_ref(),
    )
    .await;

    Ok(Json(ScreenResponse {
        summary: rank(report.records),
        failures: report.failures,
    }))
}

/// POST /api/v1/screenings/export
///
/// Re-ranks the supplied records and returns the CSV table as a download.
/// Stateless by design: nothing from the screening run is persisted, so
/// the caller sends the records back for export.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let ranked = rank(request.records);
    let csv = to_csv(&ranked)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV rendering failed: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
