//! # Application Error
//!
//! Maps domain errors to structured HTTP responses. The body shape is
//! `{"error": {"code", "message"}}` with a message detailed enough to
//! render a user-facing explanation — nothing is swallowed on the way
//! out.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use cadence_assign::AssignError;
use cadence_core::CoreError;
use cadence_cycle::CycleError;
use cadence_dispute::DisputeError;
use cadence_template::TemplateError;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Illegal lifecycle move; the record is unchanged.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Idempotency guard tripped (already resolved / already assigned).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Authentication required or role header unusable.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The caller's role may not perform this operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A collaborator write failed after the local step was compensated.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidState(_) | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound { .. } => AppError::NotFound(err.to_string()),
            _ => AppError::Validation(err.to_string()),
        }
    }
}

impl From<CycleError> for AppError {
    fn from(err: CycleError) -> Self {
        match err {
            CycleError::NotFound { .. } => AppError::NotFound(err.to_string()),
            CycleError::TimelineOrder { .. } => AppError::Validation(err.to_string()),
            CycleError::InvalidTransition { .. }
            | CycleError::TerminalState { .. }
            | CycleError::EditForbidden { .. } => AppError::InvalidState(err.to_string()),
        }
    }
}

impl From<AssignError> for AppError {
    fn from(err: AssignError) -> Self {
        match err {
            AssignError::CycleNotFound { .. }
            | AssignError::TemplateNotFound { .. }
            | AssignError::UnknownEmployee { .. } => AppError::NotFound(err.to_string()),
            AssignError::CycleNotActive { .. } => AppError::InvalidState(err.to_string()),
            AssignError::AlreadyAssigned { .. } => AppError::Conflict(err.to_string()),
            AssignError::InvalidArgument(_)
            | AssignError::TemplateInactive { .. }
            | AssignError::DepartmentNotMapped { .. }
            | AssignError::ManagerUnresolved { .. }
            | AssignError::EmptyTargetSet => AppError::Validation(err.to_string()),
        }
    }
}

impl From<DisputeError> for AppError {
    fn from(err: DisputeError) -> Self {
        match err {
            DisputeError::NotFound { .. }
            | DisputeError::AppraisalNotFound { .. }
            | DisputeError::TemplateMissing { .. } => AppError::NotFound(err.to_string()),
            DisputeError::AlreadyResolved { .. } | DisputeError::AlreadyDisputed { .. } => {
                AppError::Conflict(err.to_string())
            }
            DisputeError::InvalidTransition { .. } => AppError::InvalidState(err.to_string()),
            DisputeError::NotAppraisalOwner { .. } => AppError::Forbidden(err.to_string()),
            DisputeError::ScorePropagationFailed { .. } => AppError::Upstream(err.to_string()),
            DisputeError::MissingResolution
            | DisputeError::MissingAdjustedScore
            | DisputeError::ScoreOutOfBounds { .. }
            | DisputeError::NotDisputable { .. } => AppError::Validation(err.to_string()),
        }
    }
}
