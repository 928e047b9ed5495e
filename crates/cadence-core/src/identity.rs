//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the Cadence stack.
//! These prevent accidental identifier confusion — you cannot pass an
//! `EmployeeId` where a `CycleId` is expected.
//!
//! Each identifier renders with a namespace prefix (`cycle:<uuid>`,
//! `dispute:<uuid>`) so log lines and error messages are unambiguous
//! about which kind of record they reference.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an evaluation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemplateId(pub Uuid);

/// Unique identifier for an appraisal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CycleId(pub Uuid);

/// Unique identifier for an assignment within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignmentId(pub Uuid);

/// Unique identifier for a rating dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DisputeId(pub Uuid);

/// Unique identifier for a finalized appraisal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AppraisalId(pub Uuid);

/// Unique identifier for an employee profile in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeId(pub Uuid);

/// Unique identifier for a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DepartmentId(pub Uuid);

macro_rules! impl_id {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

impl_id!(TemplateId, "template");
impl_id!(CycleId, "cycle");
impl_id!(AssignmentId, "assignment");
impl_id!(DisputeId, "dispute");
impl_id!(AppraisalId, "appraisal");
impl_id!(EmployeeId, "employee");
impl_id!(DepartmentId, "department");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_namespace_prefix() {
        let id = CycleId::new();
        assert!(id.to_string().starts_with("cycle:"));
        let id = DisputeId::new();
        assert!(id.to_string().starts_with("dispute:"));
    }

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(EmployeeId::new(), EmployeeId::new());
    }

    #[test]
    fn test_from_uuid_roundtrip() {
        let raw = Uuid::new_v4();
        let id = TemplateId::from_uuid(raw);
        assert_eq!(id.as_uuid(), &raw);
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = AssignmentId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: AssignmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
