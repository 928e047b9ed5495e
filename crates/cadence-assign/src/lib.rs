//! # cadence-assign — Bulk Assignment Engine
//!
//! Creates evaluation assignments in bulk: given an active cycle, an
//! active template, and a target set (an explicit employee list or a
//! department list, never both), the engine resolves candidates,
//! determines each employee's manager, and creates one assignment per
//! employee — skipping, never duplicating, employees that already hold
//! one for the same cycle and template.
//!
//! ## Modules
//!
//! - **Directory** (`directory.rs`): the employee directory port —
//!   department membership and reporting-line manager lookup live
//!   outside this system.
//!
//! - **Store** (`store.rs`): assignment persistence with an atomic
//!   uniqueness claim on `(cycle, employee, template)`. The claim, not
//!   a read-then-write check, is what keeps concurrent bulk calls from
//!   double-assigning.
//!
//! - **Engine** (`engine.rs`): the bulk assignment algorithm and its
//!   `{created, skipped}` outcome.

pub mod directory;
pub mod engine;
pub mod error;
pub mod store;

pub use directory::{EmployeeDirectory, EmployeeRecord, EmploymentStatus, InMemoryDirectory};
pub use engine::{BulkAssignOptions, BulkAssignOutcome, BulkAssignmentEngine, BulkTarget};
pub use error::AssignError;
pub use store::{AssignmentStore, InMemoryAssignmentStore};
