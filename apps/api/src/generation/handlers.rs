//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::case_study::{generate_case_study, CaseStudyRequest, CaseStudyResult};
use crate::generation::export::{
    export_case_study, export_review, CaseStudyExportRequest, Download, ReviewExportRequest,
};
use crate::generation::review::{generate_review, ReviewRequest, ReviewResult};
use crate::state::AppState;

/// Maps an undecodable body to a 400 with the usual `{error}` shape.
pub(crate) fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
}

/// POST /api/case-study
///
/// Generates a case study from an interview transcript and returns the
/// Problem / Solution / Results sections. Missing sections come back empty.
pub async fn handle_case_study(
    State(state): State<AppState>,
    payload: Result<Json<CaseStudyRequest>, JsonRejection>,
) -> Result<Json<CaseStudyResult>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let input = request.validate()?;

    let result = generate_case_study(state.completion.as_ref(), &input).await?;

    Ok(Json(result))
}

/// POST /api/g2-review
pub async fn handle_review(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResult>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let input = request.validate()?;

    let result = generate_review(state.completion.as_ref(), &input).await?;

    Ok(Json(result))
}

/// POST /api/case-study/export
pub async fn handle_case_study_export(
    payload: Result<Json<CaseStudyExportRequest>, JsonRejection>,
) -> Result<Download, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    export_case_study(request)
}

/// POST /api/g2-review/export
pub async fn handle_review_export(
    payload: Result<Json<ReviewExportRequest>, JsonRejection>,
) -> Result<Download, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    export_review(request)
}
