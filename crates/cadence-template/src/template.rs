//! # Template Records
//!
//! The validated evaluation template and its draft input form. A
//! `Template` can only be produced by [`crate::validate::validate`] —
//! construction is the validation.

use serde::{Deserialize, Serialize};

use cadence_core::{ReviewKind, TemplateId, Timestamp};

use crate::scale::RatingScale;

/// One weighted evaluation criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Criterion {
    /// Stable key, unique within the template (e.g., `delivery_quality`).
    pub key: String,
    /// Short human-readable title.
    pub title: String,
    /// Longer guidance text for the evaluator.
    #[serde(default)]
    pub details: String,
    /// Weight in percent, 0–100. All weights in a template sum to 100.
    pub weight: f64,
}

/// Input form for creating a template. Unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemplateDraft {
    /// Display name (e.g., "Engineering Annual Review").
    pub name: String,
    /// Review category this template serves.
    pub kind: ReviewKind,
    /// The rating scale evaluators score against.
    pub scale: RatingScale,
    /// Ordered weighted criteria.
    pub criteria: Vec<Criterion>,
    /// Free-text instructions shown at the top of the form.
    #[serde(default)]
    pub instructions: Option<String>,
}

/// A validated evaluation template.
///
/// Immutable once created; only [`is_active`](Template::is_active) ever
/// changes, via the store's idempotent toggle. Deactivating a template
/// stops new assignments from using it but never alters assignments that
/// already reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique template identifier.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Review category.
    pub kind: ReviewKind,
    /// The rating scale.
    pub scale: RatingScale,
    /// Ordered weighted criteria, weights summing to exactly 100.
    pub criteria: Vec<Criterion>,
    /// Evaluator instructions.
    pub instructions: Option<String>,
    /// Whether new assignments may reference this template.
    pub is_active: bool,
    /// When the template was created.
    pub created_at: Timestamp,
}
