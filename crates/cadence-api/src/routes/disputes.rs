//! # Dispute Routes
//!
//! - `POST /performance/disputes` — file against a finalized appraisal
//! - `GET  /performance/disputes/{dispute_id}` — fetch
//! - `POST /performance/disputes/{dispute_id}/review` — move under review
//! - `POST /performance/disputes/{dispute_id}/resolve` — adjust or reject

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use cadence_core::{AppraisalId, DisputeId, EmployeeId, Operation};
use cadence_dispute::{Dispute, DisputeDecision, DisputeError};

use crate::auth::{authorize, CallerRole};
use crate::error::AppError;
use crate::state::AppState;

/// Body for filing a dispute.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FileDisputeRequest {
    /// The finalized appraisal being disputed.
    pub appraisal_id: Uuid,
    /// The filing employee; must be the appraisal's subject.
    pub employee_id: Uuid,
    /// Why the employee objects.
    pub reason: String,
    /// Free-text commentary.
    #[serde(default)]
    pub employee_comments: Option<String>,
}

/// Body for resolving a dispute.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResolveDisputeRequest {
    /// ADJUSTED or REJECTED.
    #[schema(value_type = String)]
    pub decision: DisputeDecision,
    /// Why the resolver decided this way. Required.
    pub resolution_summary: String,
    /// The corrected score; required for ADJUSTED, ignored for REJECTED.
    #[serde(default)]
    pub adjusted_total_score: Option<f64>,
    /// The resolving HR user.
    pub resolved_by: Uuid,
}

/// A dispute as the UI consumes it: the record plus the display label
/// (`OPEN` renders as `PENDING`).
#[derive(Debug, Serialize)]
pub struct DisputeResponse {
    /// The dispute record.
    #[serde(flatten)]
    pub dispute: Dispute,
    /// The user-facing status label.
    pub status_label: &'static str,
}

impl From<Dispute> for DisputeResponse {
    fn from(dispute: Dispute) -> Self {
        let status_label = dispute.state.display_label();
        Self {
            dispute,
            status_label,
        }
    }
}

/// File a dispute against a finalized appraisal.
#[utoipa::path(
    post,
    path = "/performance/disputes",
    tag = "disputes",
    request_body = FileDisputeRequest,
    responses(
        (status = 201, description = "Dispute filed"),
        (status = 403, description = "Filer is not the appraisal subject"),
        (status = 409, description = "A live dispute already exists"),
        (status = 422, description = "Appraisal is not finalized"),
    ),
)]
pub async fn file_dispute(
    State(state): State<AppState>,
    caller: CallerRole,
    Json(body): Json<FileDisputeRequest>,
) -> Result<(StatusCode, Json<DisputeResponse>), AppError> {
    authorize(caller, Operation::FileDispute)?;
    let dispute = state.resolution.file(
        AppraisalId::from_uuid(body.appraisal_id),
        EmployeeId::from_uuid(body.employee_id),
        body.reason,
        body.employee_comments.unwrap_or_default(),
    )?;
    Ok((StatusCode::CREATED, Json(dispute.into())))
}

/// Fetch one dispute.
#[utoipa::path(
    get,
    path = "/performance/disputes/{dispute_id}",
    tag = "disputes",
    params(("dispute_id" = Uuid, Path, description = "Dispute to fetch")),
    responses(
        (status = 200, description = "The dispute"),
        (status = 404, description = "Unknown dispute"),
    ),
)]
pub async fn get_dispute(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(dispute_id): Path<Uuid>,
) -> Result<Json<DisputeResponse>, AppError> {
    authorize(caller, Operation::ViewDispute)?;
    let id = DisputeId::from_uuid(dispute_id);
    let dispute = state
        .disputes
        .get(id)
        .ok_or(DisputeError::NotFound { id })?;
    Ok(Json(dispute.into()))
}

/// Move a dispute under review.
#[utoipa::path(
    post,
    path = "/performance/disputes/{dispute_id}/review",
    tag = "disputes",
    params(("dispute_id" = Uuid, Path, description = "Dispute to review")),
    responses(
        (status = 200, description = "Dispute is UNDER_REVIEW"),
        (status = 409, description = "Dispute is not reviewable"),
    ),
)]
pub async fn review_dispute(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(dispute_id): Path<Uuid>,
) -> Result<Json<DisputeResponse>, AppError> {
    authorize(caller, Operation::ReviewDispute)?;
    let dispute = state
        .resolution
        .begin_review(DisputeId::from_uuid(dispute_id))?;
    Ok(Json(dispute.into()))
}

/// Resolve a dispute. An ADJUSTED decision also writes the corrected
/// score to the appraisal record; if that write fails the dispute is
/// left in its prior state.
#[utoipa::path(
    post,
    path = "/performance/disputes/{dispute_id}/resolve",
    tag = "disputes",
    params(("dispute_id" = Uuid, Path, description = "Dispute to resolve")),
    request_body = ResolveDisputeRequest,
    responses(
        (status = 200, description = "Dispute resolved"),
        (status = 409, description = "Already resolved"),
        (status = 422, description = "Missing summary or score, or score out of bounds"),
        (status = 502, description = "Score propagation failed; dispute compensated"),
    ),
)]
pub async fn resolve_dispute(
    State(state): State<AppState>,
    caller: CallerRole,
    Path(dispute_id): Path<Uuid>,
    Json(body): Json<ResolveDisputeRequest>,
) -> Result<Json<DisputeResponse>, AppError> {
    authorize(caller, Operation::ResolveDispute)?;
    let dispute = state.resolution.resolve(
        DisputeId::from_uuid(dispute_id),
        body.decision,
        &body.resolution_summary,
        body.adjusted_total_score,
        EmployeeId::from_uuid(body.resolved_by),
    )?;
    Ok(Json(dispute.into()))
}
