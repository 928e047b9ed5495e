//! # Caller Role Extraction
//!
//! Authentication and session handling live upstream; by the time a
//! request reaches this service, the caller's role arrives in the
//! `X-Role` header. The extractor turns it into a typed [`Role`], and
//! [`authorize`] checks it against the central table.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cadence_core::{allowed_roles, is_allowed, Operation, Role};

use crate::error::AppError;

/// Header carrying the caller's role.
pub const ROLE_HEADER: &str = "x-role";

/// The caller's role, extracted from the `X-Role` header.
#[derive(Debug, Clone, Copy)]
pub struct CallerRole(pub Role);

impl<S> FromRequestParts<S> for CallerRole
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(ROLE_HEADER)
            .ok_or_else(|| AppError::Unauthorized("missing X-Role header".to_string()))?;
        let text = value
            .to_str()
            .map_err(|_| AppError::Unauthorized("unreadable X-Role header".to_string()))?;
        let role = Role::parse(text)
            .map_err(|err| AppError::Unauthorized(err.to_string()))?;
        Ok(CallerRole(role))
    }
}

/// Check the caller against the authorization table.
///
/// # Errors
///
/// Returns [`AppError::Forbidden`] naming the operation and the roles
/// that may perform it.
pub fn authorize(caller: CallerRole, op: Operation) -> Result<(), AppError> {
    if is_allowed(caller.0, op) {
        return Ok(());
    }
    let allowed: Vec<&str> = allowed_roles(op).iter().map(|r| r.as_str()).collect();
    Err(AppError::Forbidden(format!(
        "{} may not perform {op}; allowed roles: {}",
        caller.0,
        allowed.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_allows_listed_role() {
        assert!(authorize(CallerRole(Role::Hr), Operation::CreateCycle).is_ok());
    }

    #[test]
    fn test_authorize_rejects_unlisted_role() {
        let err = authorize(CallerRole(Role::Employee), Operation::CreateCycle).unwrap_err();
        match err {
            AppError::Forbidden(msg) => {
                assert!(msg.contains("CREATE_CYCLE"));
                assert!(msg.contains("HR"));
            }
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }
}
