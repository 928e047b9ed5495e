//! # Route Table
//!
//! One router for the whole performance surface. Handlers live in one
//! module per aggregate and delegate to the domain crates.

pub mod assignments;
pub mod cycles;
pub mod disputes;
pub mod templates;

use axum::routing::{get, post};
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assemble the performance routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route(
            "/performance/templates",
            post(templates::create_template).get(templates::list_templates),
        )
        .route(
            "/performance/templates/{template_id}/toggle",
            post(templates::toggle_template),
        )
        .route(
            "/performance/cycles",
            post(cycles::create_cycle).get(cycles::list_cycles),
        )
        .route(
            "/performance/cycles/{cycle_id}",
            get(cycles::get_cycle).patch(cycles::edit_cycle),
        )
        .route(
            "/performance/cycles/{cycle_id}/activate",
            post(cycles::activate_cycle),
        )
        .route(
            "/performance/cycles/{cycle_id}/close",
            post(cycles::close_cycle),
        )
        .route(
            "/performance/cycles/{cycle_id}/archive",
            post(cycles::archive_cycle),
        )
        .route(
            "/performance/cycles/{cycle_id}/assignments",
            get(cycles::list_cycle_assignments),
        )
        .route("/performance/assignments/bulk", post(assignments::bulk_assign))
        .route("/performance/disputes", post(disputes::file_dispute))
        .route("/performance/disputes/{dispute_id}", get(disputes::get_dispute))
        .route(
            "/performance/disputes/{dispute_id}/review",
            post(disputes::review_dispute),
        )
        .route(
            "/performance/disputes/{dispute_id}/resolve",
            post(disputes::resolve_dispute),
        )
}

/// Liveness probe. Unauthenticated.
async fn health() -> &'static str {
    "ok"
}

/// The generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}
