//! # cadence-core — Foundational Types for the Cadence Appraisal Stack
//!
//! This crate is the bedrock of the Cadence workspace. It defines the
//! type-system primitives every other crate builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CycleId`, `TemplateId`,
//!    `EmployeeId`, `DisputeId` — all newtypes over `Uuid`. No bare strings
//!    or raw uuids for identifiers; you cannot pass an `EmployeeId` where a
//!    `DepartmentId` is expected.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so audit trails and timeline
//!    comparisons are deterministic across services.
//!
//! 3. **Single authorization table.** One declarative map from operation to
//!    allowed role set, checked centrally by the API layer. No role arrays
//!    scattered across call sites.
//!
//! 4. **Collaborator ports as traits.** Notification dispatch is a
//!    fire-and-forget trait; delivery is someone else's problem.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cadence-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross a boundary.

pub mod authz;
pub mod error;
pub mod identity;
pub mod kind;
pub mod notify;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use authz::{allowed_roles, is_allowed, Operation, Role};
pub use error::CoreError;
pub use identity::{
    AppraisalId, AssignmentId, CycleId, DepartmentId, DisputeId, EmployeeId, TemplateId,
};
pub use kind::ReviewKind;
pub use notify::{NotificationEvent, Notifier, NullNotifier};
pub use temporal::Timestamp;
