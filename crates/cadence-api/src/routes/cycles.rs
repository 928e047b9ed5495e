//! # Cycle Routes
//!
//! - `POST  /performance/cycles` — create (Planned)
//! - `GET   /performance/cycles` — list
//! - `GET   /performance/cycles/{cycle_id}` — fetch
//! - `PATCH /performance/cycles/{cycle_id}` — edit (Planned only)
//! - `POST  /performance/cycles/{cycle_id}/activate|close|archive`
//! - `GET   /performance/cycles/{cycle_id}/assignments`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use cadence_core::{CycleId, NotificationEvent, Operation, ReviewKind, Timestamp};
use cadence_cycle::{Assignment, Cycle, CycleError, CyclePatch, CycleTimeline, TemplateDepartmentMap};

use crate::auth::{authorize, CallerRole};
use crate::error::AppError;
use crate::state::AppState;

/// Body for cycle creation.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCycleRequest {
    /// Display name (e.g., "Q1 2025 Review").
    pub name: String,
    /// Review category.
    pub kind: ReviewKind,
    /// First day of the review window.
    pub start_date: Timestamp,
    /// Last day of the review window.
    pub end_date: Timestamp,
    /// Manager submission deadline; must follow the end date.
    #[serde(default)]
    pub manager_due_date: Option<Timestamp>,
    /// Employee acknowledgement deadline; must follow the manager
    /// deadline (or the end date when none is set).
    #[serde(default)]
    pub employee_ack_due_date: Option<Timestamp>,
    /// Which templates apply to which departments.
    #[serde(default)]
    pub template_assignments: Vec<TemplateDepartmentMap>,
}

/// Create a cycle in the Planned state.
#[utoipa::path(
    post,
    path = "/performance/cycles",
    tag = "cycles",
    responses(
        (status = 201, description = "Cycle created in PLANNED"),
        (status = 422, description = "Timeline ordering violated"),
    ),
)]
pub async fn create_cycle(
    State(state): State<AppState>,
    caller: CallerRole,
    Json(body): Json<CreateCycleRequest>,
) -> Result<(StatusCode, Json<Cycle>), AppError> {
    authorize(caller, Operation::CreateCycle)?;
    let cycle = Cycle::create(
        body.name,
        body.kind,
        CycleTimeline {
            start_date: body.start_date,
            end_date: body.end_date,
            manager_due_date: body.manager_due_date,
            employee_ack_due_date: body.employee_ack_due_date,
        },
        body.template_assignments,
    )?;
    state.cycles.create(cycle.clone());
    tracing::info!(cycle = %cycle.id, "cycle created");
    Ok((StatusCode::CREATED, Json(cycle)))
}

/// List all cycles, newest first.
#[utoipa::path(
    get,
    path = "/performance/cycles",
    tag = "cycles",
    responses((status = 200, description = "All cycles")),
)]
pub async fn list_cycles(
    State(state): State<AppState>,
    caller: CallerRole,
) -> Result<Json<Vec<Cycle>>, AppError> {
    authorize(caller, Operation::ViewCycles)?;
    Ok(Json(state.cycles.list()))
}

/// Fetch one cycle.
#[utoipa::path(
    get,
    path = "/performance/cycles/{cycle_id}",
    tag = "cycles",
    params(("cycle_id" = Uuid, Path, description = "Cycle to fetch")),
    responses(
        (status = 200, description = "The cycle"),
        (status = 404, description = "Unknown cycle"),
    ),
)]
pub async fn get_cycle(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Cycle>, AppError> {
    authorize(caller, Operation::ViewCycles)?;
    let id = CycleId::from_uuid(cycle_id);
    let cycle = state.cycles.get(id).ok_or(CycleError::NotFound { id })?;
    Ok(Json(cycle))
}

/// Edit a Planned cycle. Active and later cycles reject edits.
#[utoipa::path(
    patch,
    path = "/performance/cycles/{cycle_id}",
    tag = "cycles",
    params(("cycle_id" = Uuid, Path, description = "Cycle to edit")),
    responses(
        (status = 200, description = "Cycle updated"),
        (status = 409, description = "Cycle is no longer PLANNED"),
        (status = 422, description = "Patched timeline ordering violated"),
    ),
)]
pub async fn edit_cycle(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(cycle_id): Path<Uuid>,
    Json(patch): Json<CyclePatch>,
) -> Result<Json<Cycle>, AppError> {
    authorize(caller, Operation::EditCycle)?;
    let id = CycleId::from_uuid(cycle_id);
    let cycle = state
        .cycles
        .update(id, &|c| c.apply_edit(patch.clone()))?;
    Ok(Json(cycle))
}

/// Activate a Planned cycle and notify the eventual participants.
#[utoipa::path(
    post,
    path = "/performance/cycles/{cycle_id}/activate",
    tag = "cycles",
    params(("cycle_id" = Uuid, Path, description = "Cycle to activate")),
    responses(
        (status = 200, description = "Cycle is now ACTIVE"),
        (status = 409, description = "Not activatable from the current state"),
    ),
)]
pub async fn activate_cycle(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Cycle>, AppError> {
    authorize(caller, Operation::ActivateCycle)?;
    let id = CycleId::from_uuid(cycle_id);
    let cycle = state.cycles.update(id, &|c| c.activate("activated"))?;
    state
        .notifier
        .notify(NotificationEvent::CycleActivated { cycle_id: id });
    Ok(Json(cycle))
}

/// Close an Active cycle. Irreversible.
#[utoipa::path(
    post,
    path = "/performance/cycles/{cycle_id}/close",
    tag = "cycles",
    params(("cycle_id" = Uuid, Path, description = "Cycle to close")),
    responses(
        (status = 200, description = "Cycle is now CLOSED"),
        (status = 409, description = "Not closable from the current state"),
    ),
)]
pub async fn close_cycle(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Cycle>, AppError> {
    authorize(caller, Operation::CloseCycle)?;
    let id = CycleId::from_uuid(cycle_id);
    let cycle = state.cycles.update(id, &|c| c.close("closed"))?;
    state
        .notifier
        .notify(NotificationEvent::CycleClosed { cycle_id: id });
    Ok(Json(cycle))
}

/// Archive a Closed cycle.
#[utoipa::path(
    post,
    path = "/performance/cycles/{cycle_id}/archive",
    tag = "cycles",
    params(("cycle_id" = Uuid, Path, description = "Cycle to archive")),
    responses(
        (status = 200, description = "Cycle is now ARCHIVED"),
        (status = 409, description = "Not archivable from the current state"),
    ),
)]
pub async fn archive_cycle(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Cycle>, AppError> {
    authorize(caller, Operation::ArchiveCycle)?;
    let id = CycleId::from_uuid(cycle_id);
    let cycle = state.cycles.update(id, &|c| c.archive("archived"))?;
    Ok(Json(cycle))
}

/// All assignments in a cycle, for UI display after a bulk call.
#[utoipa::path(
    get,
    path = "/performance/cycles/{cycle_id}/assignments",
    tag = "cycles",
    params(("cycle_id" = Uuid, Path, description = "Cycle whose assignments to list")),
    responses(
        (status = 200, description = "Assignments in the cycle"),
        (status = 404, description = "Unknown cycle"),
    ),
)]
pub async fn list_cycle_assignments(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    authorize(caller, Operation::ViewCycles)?;
    let id = CycleId::from_uuid(cycle_id);
    if state.cycles.get(id).is_none() {
        return Err(CycleError::NotFound { id }.into());
    }
    Ok(Json(state.assignments.list_for_cycle(id)))
}
