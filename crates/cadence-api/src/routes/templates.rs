//! # Template Routes
//!
//! - `POST /performance/templates` — validate and create
//! - `GET  /performance/templates` — list
//! - `POST /performance/templates/{template_id}/toggle` — set active flag

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use cadence_core::{Operation, TemplateId};
use cadence_template::{validate, Template, TemplateDraft};

use crate::auth::{authorize, CallerRole};
use crate::error::AppError;
use crate::state::AppState;

/// Body for the active-flag toggle.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleTemplateRequest {
    /// The desired active state. Re-applying the current state is a
    /// no-op, not an error.
    pub active: bool,
}

/// Create a template from a draft. The draft is validated first;
/// rejected drafts persist nothing.
#[utoipa::path(
    post,
    path = "/performance/templates",
    tag = "templates",
    responses(
        (status = 201, description = "Template validated and created"),
        (status = 422, description = "Draft failed validation"),
        (status = 403, description = "Caller may not create templates"),
    ),
)]
pub async fn create_template(
    State(state): State<AppState>,
    caller: CallerRole,
    Json(draft): Json<TemplateDraft>,
) -> Result<(StatusCode, Json<Template>), AppError> {
    authorize(caller, Operation::CreateTemplate)?;
    let template = validate(draft)?;
    state.templates.create(template.clone());
    tracing::info!(template = %template.id, "template created");
    Ok((StatusCode::CREATED, Json(template)))
}

/// List all templates, newest first.
#[utoipa::path(
    get,
    path = "/performance/templates",
    tag = "templates",
    responses((status = 200, description = "All templates")),
)]
pub async fn list_templates(
    State(state): State<AppState>,
    caller: CallerRole,
) -> Result<Json<Vec<Template>>, AppError> {
    authorize(caller, Operation::ListTemplates)?;
    Ok(Json(state.templates.list()))
}

/// Set a template's active flag. Idempotent; never touches existing
/// assignments.
#[utoipa::path(
    post,
    path = "/performance/templates/{template_id}/toggle",
    tag = "templates",
    params(("template_id" = Uuid, Path, description = "Template to toggle")),
    request_body = ToggleTemplateRequest,
    responses(
        (status = 200, description = "Template updated"),
        (status = 404, description = "Unknown template"),
    ),
)]
pub async fn toggle_template(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(template_id): Path<Uuid>,
    Json(body): Json<ToggleTemplateRequest>,
) -> Result<Json<Template>, AppError> {
    authorize(caller, Operation::ToggleTemplate)?;
    let template = state
        .templates
        .set_active(TemplateId::from_uuid(template_id), body.active)?;
    Ok(Json(template))
}
