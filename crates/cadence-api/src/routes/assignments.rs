//! # Bulk Assignment Route
//!
//! - `POST /performance/assignments/bulk`
//!
//! The request names the cycle, the template, and exactly one target
//! kind. The response reports both what was created and who was
//! skipped, so the caller can audit the difference.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use cadence_assign::{BulkAssignOptions, BulkTarget};
use cadence_core::{
    CycleId, DepartmentId, EmployeeId, NotificationEvent, Operation, TemplateId, Timestamp,
};
use cadence_cycle::Assignment;

use crate::auth::{authorize, CallerRole};
use crate::error::AppError;
use crate::state::AppState;

/// Body for a bulk assignment call.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkAssignRequest {
    /// The cycle to assign into. Must be ACTIVE.
    pub cycle_id: Uuid,
    /// The template to evaluate against. Must be active.
    pub template_id: Uuid,
    /// Explicit employee target list. Mutually exclusive with
    /// `department_ids`.
    #[serde(default)]
    pub employee_ids: Option<Vec<Uuid>>,
    /// Department target list. Mutually exclusive with `employee_ids`.
    #[serde(default)]
    pub department_ids: Option<Vec<Uuid>>,
    /// Evaluate every candidate under this manager instead of their
    /// reporting-line manager.
    #[serde(default)]
    pub manager_employee_id: Option<Uuid>,
    /// Completion deadline stamped on every created assignment.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub due_date: Option<Timestamp>,
}

/// What the bulk call did.
#[derive(Debug, Serialize)]
pub struct BulkAssignResponse {
    /// Assignments created by this call.
    pub created: Vec<Assignment>,
    /// Employees skipped because they were already assigned.
    pub skipped: Vec<EmployeeId>,
}

/// Create assignments for every member of the target set.
#[utoipa::path(
    post,
    path = "/performance/assignments/bulk",
    tag = "assignments",
    request_body = BulkAssignRequest,
    responses(
        (status = 201, description = "Assignments created; skips reported"),
        (status = 409, description = "Cycle is not ACTIVE"),
        (status = 422, description = "Bad target selection or empty target set"),
    ),
)]
pub async fn bulk_assign(
    State(state): State<AppState>,
    caller: CallerRole,
    Json(body): Json<BulkAssignRequest>,
) -> Result<(StatusCode, Json<BulkAssignResponse>), AppError> {
    authorize(caller, Operation::BulkAssign)?;

    let target = BulkTarget::from_parts(
        body.employee_ids
            .map(|ids| ids.into_iter().map(EmployeeId::from_uuid).collect()),
        body.department_ids
            .map(|ids| ids.into_iter().map(DepartmentId::from_uuid).collect()),
    )?;
    let cycle_id = CycleId::from_uuid(body.cycle_id);
    let outcome = state.engine.bulk_assign(
        cycle_id,
        TemplateId::from_uuid(body.template_id),
        target,
        BulkAssignOptions {
            manager_override: body.manager_employee_id.map(EmployeeId::from_uuid),
            due_date: body.due_date,
        },
    )?;

    for assignment in &outcome.created {
        state.notifier.notify(NotificationEvent::AssignmentCreated {
            cycle_id,
            employee_id: assignment.employee_id,
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(BulkAssignResponse {
            created: outcome.created,
            skipped: outcome.skipped,
        }),
    ))
}
