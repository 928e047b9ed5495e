//! # cadence-dispute — Dispute Resolution
//!
//! An employee's formal objection to a finalized appraisal rating, and
//! what HR does about it.
//!
//! ## States
//!
//! ```text
//! Open ──begin_review()──▶ UnderReview
//!   │                          │
//!   ├──resolve(ADJUSTED)──▶ Adjusted (terminal)
//!   └──resolve(REJECTED)──▶ Rejected (terminal)
//!                (both also legal from UnderReview)
//! ```
//!
//! ## Modules
//!
//! - **Appraisal** (`appraisal.rs`): the appraisal record as a rating
//!   source, and the store port whose `write_score` is the one
//!   cross-aggregate write in the workflow.
//!
//! - **Dispute** (`dispute.rs`): the dispute aggregate and its
//!   validated-enum state machine.
//!
//! - **Resolution** (`resolution.rs`): the resolution service — filing
//!   guards, score-bounds checks against the appraisal's template, and
//!   the two-step resolve/propagate saga with compensation.

pub mod appraisal;
pub mod dispute;
pub mod error;
pub mod resolution;

pub use appraisal::{Appraisal, AppraisalStore, AppraisalWriteError, InMemoryAppraisalStore};
pub use dispute::{Dispute, DisputeDecision, DisputeState, DisputeTransitionRecord, Resolution};
pub use error::DisputeError;
pub use resolution::{DisputeResolutionService, DisputeStore, InMemoryDisputeStore};
