//! # Template Error Types
//!
//! Structured validation failures for evaluation templates. Every
//! variant names the offending field or criterion so the caller can
//! render a precise user-facing message.

use thiserror::Error;

use cadence_core::TemplateId;

use crate::scale::ScaleKind;

/// Errors from template validation and the template store.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A criterion is missing its key or title.
    #[error("criterion {index} is missing required field {field:?}")]
    CriterionFieldMissing {
        /// Zero-based position of the criterion in the draft.
        index: usize,
        /// The missing field name (`key` or `title`).
        field: &'static str,
    },

    /// Two criteria share the same key.
    #[error("duplicate criterion key {key:?}")]
    DuplicateCriterionKey {
        /// The repeated key.
        key: String,
    },

    /// A single criterion weight is outside 0–100.
    #[error("criterion {key:?} has weight {weight} outside 0–100")]
    WeightOutOfRange {
        /// The criterion key.
        key: String,
        /// The offending weight.
        weight: f64,
    },

    /// Criteria weights do not sum to exactly 100.
    #[error("criteria weights sum to {sum}, expected exactly 100")]
    WeightSum {
        /// The actual sum of the weights.
        sum: f64,
    },

    /// Label count does not match the number of rating points.
    #[error("rating scale needs {expected} labels (one per point), got {actual}")]
    LabelCount {
        /// Number of rating points on the scale.
        expected: usize,
        /// Number of labels supplied.
        actual: usize,
    },

    /// Scale bounds are inconsistent with the scale kind.
    #[error("scale bounds min={min} max={max} step={step} are invalid for a {kind} scale")]
    ScaleBounds {
        /// The declared scale kind.
        kind: ScaleKind,
        /// Declared minimum rating.
        min: u8,
        /// Declared maximum rating.
        max: u8,
        /// Declared step.
        step: u8,
    },

    /// No template with the given id exists.
    #[error("template {id} not found")]
    NotFound {
        /// The missing template id.
        id: TemplateId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_sum_display_names_actual_sum() {
        let err = TemplateError::WeightSum { sum: 99.0 };
        let msg = format!("{err}");
        assert!(msg.contains("99"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn label_count_display() {
        let err = TemplateError::LabelCount {
            expected: 5,
            actual: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains('5'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn criterion_field_missing_display() {
        let err = TemplateError::CriterionFieldMissing {
            index: 2,
            field: "title",
        };
        assert!(format!("{err}").contains("title"));
    }
}
