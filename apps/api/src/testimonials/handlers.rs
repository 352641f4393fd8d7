//! Axum route handlers for the Testimonial Sorter API. All handlers read the
//! static sample set; nothing here mutates server state.

use axum::{
    extract::{rejection::JsonRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::export::Download;
use crate::generation::handlers::invalid_body;
use crate::testimonials::dataset::sample_testimonials;
use crate::testimonials::export::export_testimonials;
use crate::testimonials::filter::TestimonialFilter;
use crate::testimonials::models::{Facets, Testimonial};
use crate::testimonials::selection::Selection;

#[derive(Debug, Serialize)]
pub struct TestimonialListResponse {
    pub testimonials: Vec<&'static Testimonial>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct SelectAllRequest {
    #[serde(flatten)]
    pub filter: TestimonialFilter,
    #[serde(default)]
    pub selected: Vec<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAllResponse {
    pub selected: Vec<u32>,
    pub all_selected: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: u32,
    #[serde(default)]
    pub selected: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub selected: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub ids: Vec<u32>,
}

/// GET /api/testimonials?search=&industry=&persona=
pub async fn handle_list(Query(filter): Query<TestimonialFilter>) -> Json<TestimonialListResponse> {
    let testimonials = filter.apply(sample_testimonials());
    Json(TestimonialListResponse {
        total: testimonials.len(),
        testimonials,
    })
}

/// GET /api/testimonials/facets
pub async fn handle_facets() -> Json<Facets> {
    Json(Facets::from_testimonials(sample_testimonials()))
}

/// POST /api/testimonials/toggle
///
/// Flips one id in the caller's current selection.
pub async fn handle_toggle(
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<ToggleResponse>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;

    let mut selection = Selection::new(request.selected);
    selection.toggle(request.id);

    Ok(Json(ToggleResponse {
        selected: selection.ids(),
    }))
}

/// POST /api/testimonials/select-all
///
/// Applies the "select all" toggle for the filtered view to the caller's
/// current selection and returns the new selection.
pub async fn handle_select_all(
    payload: Result<Json<SelectAllRequest>, JsonRejection>,
) -> Result<Json<SelectAllResponse>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;

    let view = request.filter.apply(sample_testimonials());
    let mut selection = Selection::new(request.selected);
    selection.toggle_all(&view);

    Ok(Json(SelectAllResponse {
        all_selected: selection.all_selected(&view),
        selected: selection.ids(),
    }))
}

/// POST /api/testimonials/export
pub async fn handle_export(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Download, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let selection = Selection::new(request.ids);

    let download = export_testimonials(sample_testimonials(), &selection)?;
    tracing::info!("Exported {} testimonials", selection.len());

    Ok(download)
}
