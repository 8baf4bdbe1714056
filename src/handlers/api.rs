//! JSON API over the complaint service and department directory

use crate::models::*;
use crate::services::departments;
use crate::validation::validate_draft;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::AppState;

/// Issue an identifier for a complaint draft
pub async fn create_complaint(
    State(state): State<AppState>,
    Json(input): Json<ComplaintDraft>,
) -> impl IntoResponse {
    let draft = input.normalized();

    if let Err(e) = validate_draft(&draft) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<IssuedComplaint>::error(e.to_string())),
        );
    }

    let complaint_id = state.complaints.issue_identifier().await;
    tracing::info!(
        complaint_id = %complaint_id,
        category = ?draft.category,
        "Complaint submitted via API"
    );

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(IssuedComplaint { complaint_id })),
    )
}

/// Look up a complaint by identifier
pub async fn get_complaint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.complaints.lookup(&id).await {
        Some(record) => (StatusCode::OK, Json(ApiResponse::success(record))),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Complaint not found")),
        ),
    }
}

/// Department directory
pub async fn list_departments() -> impl IntoResponse {
    Json(ApiResponse::success(departments::directory()))
}
