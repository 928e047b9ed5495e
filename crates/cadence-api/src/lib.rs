//! # cadence-api — Axum API Service
//!
//! The REST surface of the Cadence appraisal stack, built on
//! Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `/performance/templates` — template creation, listing, toggling
//! - `/performance/cycles` — cycle CRUD and lifecycle transitions
//! - `/performance/assignments/bulk` — bulk assignment
//! - `/performance/disputes` — dispute filing, review, resolution
//! - `/health` — liveness probe (unauthenticated)
//! - `/api-docs/openapi.json` — generated OpenAPI document
//!
//! ## Role Gating
//!
//! The caller's role arrives in the `X-Role` header (session handling
//! is an upstream concern). Every handler checks the central
//! authorization table in `cadence-core` — there are no per-route role
//! lists.
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - No business logic in route handlers — they delegate to the domain
//!   crates and translate errors.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod auth;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppState, TracingNotifier};

use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
