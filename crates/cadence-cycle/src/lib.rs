//! # cadence-cycle — Appraisal Cycle Lifecycle
//!
//! Owns the cycle state machine and its timeline invariants, plus the
//! assignment records created inside a cycle.
//!
//! ## State Machine
//!
//! ```text
//! Planned ──activate()──▶ Active ──close()──▶ Closed ──archive()──▶ Archived
//! ```
//!
//! Strictly one-way: no transition skips a state, closing is
//! irreversible, and `Archived` is terminal. Invalid transitions are
//! rejected at runtime with structured errors naming the current state
//! and the attempted target.
//!
//! ## Modules
//!
//! - **Cycle** (`cycle.rs`): the cycle aggregate, timeline validation,
//!   Planned-only editing, and the template-department map.
//!
//! - **Assignment** (`assignment.rs`): one employee + one manager + one
//!   template within one cycle, with the
//!   `NotStarted → InProgress → Submitted → Acknowledged` progression.
//!
//! - **Store** (`store.rs`): cycle persistence port. Transitions run as
//!   state-guarded conditional updates under the store lock, so a cycle
//!   cannot be activated or closed twice even under concurrent requests.

pub mod assignment;
pub mod cycle;
pub mod error;
pub mod store;

pub use assignment::{Assignment, AssignmentStatus};
pub use cycle::{Cycle, CyclePatch, CycleState, CycleTimeline, CycleTransitionRecord, TemplateDepartmentMap};
pub use error::{AssignmentError, CycleError};
pub use store::{CycleStore, InMemoryCycleStore};
