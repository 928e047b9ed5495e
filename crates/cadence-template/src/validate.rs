//! # Template Validation
//!
//! The single path from a [`TemplateDraft`] to a [`Template`]. A draft
//! that fails any check produces a structured [`TemplateError`] naming
//! the offending field; nothing is persisted for rejected drafts.
//!
//! ## Weight Arithmetic
//!
//! Weights are percentages that may carry up to two decimal places
//! (33.33 / 33.33 / 33.34). Summing them as floats would make "exactly
//! 100" depend on accumulation order, so each weight is scaled to
//! hundredths of a percent and rounded once, and the integer sum must
//! equal exactly 10_000. There is no tolerance band: 99 and 101 are
//! rejected, as is 99.995.

use cadence_core::{TemplateId, Timestamp};

use crate::error::TemplateError;
use crate::template::{Template, TemplateDraft};

/// One percent, expressed in the integer weight resolution.
const CENTI_PERCENT: i64 = 100;

/// The required weight total: 100% in hundredths of a percent.
const FULL_WEIGHT: i64 = 100 * CENTI_PERCENT;

/// Validate a draft and mint the template record.
///
/// Checks, in order:
/// 1. every criterion has a non-blank key and title
/// 2. criterion keys are unique within the template
/// 3. each weight lies in 0–100
/// 4. weights sum to exactly 100 (at 0.01 resolution)
/// 5. scale bounds agree with the scale kind
/// 6. the scale carries one label per rating point
///
/// # Errors
///
/// Returns the first failing check as a [`TemplateError`].
pub fn validate(draft: TemplateDraft) -> Result<Template, TemplateError> {
    let mut seen_keys: Vec<&str> = Vec::with_capacity(draft.criteria.len());
    let mut weight_sum: i64 = 0;

    for (index, criterion) in draft.criteria.iter().enumerate() {
        if criterion.key.trim().is_empty() {
            return Err(TemplateError::CriterionFieldMissing { index, field: "key" });
        }
        if criterion.title.trim().is_empty() {
            return Err(TemplateError::CriterionFieldMissing {
                index,
                field: "title",
            });
        }
        if seen_keys.contains(&criterion.key.as_str()) {
            return Err(TemplateError::DuplicateCriterionKey {
                key: criterion.key.clone(),
            });
        }
        seen_keys.push(&criterion.key);

        if !criterion.weight.is_finite() || criterion.weight < 0.0 || criterion.weight > 100.0 {
            return Err(TemplateError::WeightOutOfRange {
                key: criterion.key.clone(),
                weight: criterion.weight,
            });
        }
        weight_sum += centi_percent(criterion.weight);
    }

    if weight_sum != FULL_WEIGHT {
        return Err(TemplateError::WeightSum {
            sum: weight_sum as f64 / CENTI_PERCENT as f64,
        });
    }

    if !draft.scale.bounds_consistent() {
        return Err(TemplateError::ScaleBounds {
            kind: draft.scale.kind,
            min: draft.scale.min,
            max: draft.scale.max,
            step: draft.scale.step,
        });
    }

    let expected_labels = usize::from(draft.scale.max);
    if draft.scale.labels.len() != expected_labels {
        return Err(TemplateError::LabelCount {
            expected: expected_labels,
            actual: draft.scale.labels.len(),
        });
    }

    Ok(Template {
        id: TemplateId::new(),
        name: draft.name,
        kind: draft.kind,
        scale: draft.scale,
        criteria: draft.criteria,
        instructions: draft.instructions,
        is_active: true,
        created_at: Timestamp::now(),
    })
}

/// Scale a percentage to hundredths of a percent, rounding once.
fn centi_percent(weight: f64) -> i64 {
    (weight * CENTI_PERCENT as f64).round() as i64
}
