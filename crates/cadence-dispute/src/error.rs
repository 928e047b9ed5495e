//! # Dispute Error Types
//!
//! Structured error hierarchy for the dispute subsystem. State machine
//! rejections include the current state and attempted transition;
//! resolution rejections name the missing or out-of-bounds field.

use thiserror::Error;

use cadence_core::{AppraisalId, DisputeId, EmployeeId, TemplateId};

/// Errors arising from dispute filing and resolution.
#[derive(Error, Debug)]
pub enum DisputeError {
    /// Attempted state transition is not valid from the current state.
    #[error("invalid dispute transition: {from} -> {to}")]
    InvalidTransition {
        /// The current state name.
        from: String,
        /// The attempted target state name.
        to: String,
    },

    /// The dispute already reached a terminal decision. The stored
    /// resolution, including any adjusted score, is unchanged.
    #[error("dispute {dispute_id} is already resolved ({state})")]
    AlreadyResolved {
        /// The dispute identifier.
        dispute_id: String,
        /// The terminal state name.
        state: String,
    },

    /// Resolution requires a non-empty summary.
    #[error("a resolution summary is required")]
    MissingResolution,

    /// An ADJUSTED decision requires an adjusted total score.
    #[error("decision ADJUSTED requires an adjusted total score")]
    MissingAdjustedScore,

    /// The adjusted score falls outside the template's rating scale.
    #[error("adjusted score {score} is outside the rating scale bounds {min}–{max}")]
    ScoreOutOfBounds {
        /// The rejected score.
        score: f64,
        /// Scale minimum.
        min: u8,
        /// Scale maximum.
        max: u8,
    },

    /// Writing the adjusted score to the appraisal record failed. The
    /// dispute has been compensated back to its prior state.
    #[error("score propagation failed for dispute {dispute_id}: {reason}")]
    ScorePropagationFailed {
        /// The dispute identifier.
        dispute_id: String,
        /// Why the appraisal write failed.
        reason: String,
    },

    /// No dispute with the given id exists.
    #[error("dispute {id} not found")]
    NotFound {
        /// The missing dispute id.
        id: DisputeId,
    },

    /// The referenced appraisal does not exist.
    #[error("appraisal {id} not found")]
    AppraisalNotFound {
        /// The missing appraisal id.
        id: AppraisalId,
    },

    /// The appraisal's template is missing from the template store.
    #[error("template {id} referenced by the appraisal was not found")]
    TemplateMissing {
        /// The missing template id.
        id: TemplateId,
    },

    /// Disputes may only target finalized appraisals.
    #[error("appraisal {appraisal_id} is not finalized and cannot be disputed")]
    NotDisputable {
        /// The appraisal in question.
        appraisal_id: AppraisalId,
    },

    /// Only the evaluated employee may file a dispute.
    #[error("employee {employee_id} is not the subject of appraisal {appraisal_id}")]
    NotAppraisalOwner {
        /// The appraisal in question.
        appraisal_id: AppraisalId,
        /// The employee who attempted to file.
        employee_id: EmployeeId,
    },

    /// The appraisal already has a live dispute.
    #[error("appraisal {appraisal_id} already has an open dispute")]
    AlreadyDisputed {
        /// The appraisal in question.
        appraisal_id: AppraisalId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_resolved_display() {
        let err = DisputeError::AlreadyResolved {
            dispute_id: "dispute:0000".to_string(),
            state: "ADJUSTED".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("dispute:0000"));
        assert!(msg.contains("ADJUSTED"));
    }

    #[test]
    fn score_out_of_bounds_display() {
        let err = DisputeError::ScoreOutOfBounds {
            score: 7.5,
            min: 1,
            max: 5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("7.5"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn propagation_failed_display() {
        let err = DisputeError::ScorePropagationFailed {
            dispute_id: "dispute:0001".to_string(),
            reason: "store unavailable".to_string(),
        };
        assert!(format!("{err}").contains("store unavailable"));
    }
}
