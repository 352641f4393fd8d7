pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::testimonials::handlers as testimonials;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/case-study", post(generation::handle_case_study))
        .route(
            "/api/case-study/export",
            post(generation::handle_case_study_export),
        )
        .route("/api/g2-review", post(generation::handle_review))
        .route(
            "/api/g2-review/export",
            post(generation::handle_review_export),
        )
        // Testimonial Sorter API
        .route("/api/testimonials", get(testimonials::handle_list))
        .route("/api/testimonials/facets", get(testimonials::handle_facets))
        .route("/api/testimonials/toggle", post(testimonials::handle_toggle))
        .route(
            "/api/testimonials/select-all",
            post(testimonials::handle_select_all),
        )
        .route("/api/testimonials/export", post(testimonials::handle_export))
        .with_state(state)
}
