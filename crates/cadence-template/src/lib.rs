//! # cadence-template — Evaluation Templates
//!
//! Defines the evaluation form a manager fills in during an appraisal
//! cycle: a discrete rating scale, a weighted list of criteria, and
//! free-text instructions.
//!
//! - **Scale** (`scale.rs`): 3/5/10-point rating scales with one label
//!   per rating point.
//!
//! - **Template** (`template.rs`): the validated template record and its
//!   draft input form.
//!
//! - **Validation** (`validate.rs`): the only way to turn a draft into a
//!   `Template`. Criteria weights must sum to exactly 100.
//!
//! - **Store** (`store.rs`): template persistence port with an in-memory
//!   implementation.
//!
//! ## Crate Policy
//!
//! - Templates are immutable once created. The only mutable bit is the
//!   `is_active` flag, toggled idempotently through the store; toggling
//!   never touches existing assignments.

pub mod error;
pub mod scale;
pub mod store;
pub mod template;
pub mod validate;

pub use error::TemplateError;
pub use scale::{RatingScale, ScaleKind};
pub use store::{InMemoryTemplateStore, TemplateStore};
pub use template::{Criterion, Template, TemplateDraft};
pub use validate::validate;
