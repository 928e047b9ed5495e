//! # Dispute Aggregate
//!
//! The dispute lifecycle as a validated enum with runtime-checked
//! transitions. A dispute can be resolved straight from Open — review
//! is an optional intermediate stage, not a required one — and both
//! terminal decisions reject any further transition.

use serde::{Deserialize, Serialize};

use cadence_core::{AppraisalId, DisputeId, EmployeeId, Timestamp};

use crate::error::DisputeError;

// ─── Dispute State ───────────────────────────────────────────────────

/// The lifecycle state of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeState {
    /// Filed and waiting for HR to pick it up.
    Open,
    /// HR is actively reviewing the objection.
    UnderReview,
    /// Upheld: the rating was adjusted (terminal).
    Adjusted,
    /// Declined: the original rating stands (terminal).
    Rejected,
}

impl DisputeState {
    /// The canonical string name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Adjusted => "ADJUSTED",
            Self::Rejected => "REJECTED",
        }
    }

    /// The label shown to users.
    ///
    /// The single place the storage name and the display name diverge:
    /// an Open dispute is displayed as `PENDING`.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Open => "PENDING",
            other => other.as_str(),
        }
    }

    /// Whether this state is terminal (no further transitions allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Adjusted | Self::Rejected)
    }

    /// Valid target states from this state.
    pub fn valid_transitions(&self) -> &'static [DisputeState] {
        match self {
            Self::Open => &[Self::UnderReview, Self::Adjusted, Self::Rejected],
            Self::UnderReview => &[Self::Adjusted, Self::Rejected],
            Self::Adjusted | Self::Rejected => &[],
        }
    }
}

impl std::fmt::Display for DisputeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Decision ────────────────────────────────────────────────────────

/// The resolver's decision on a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeDecision {
    /// Uphold the objection and adjust the rating.
    Adjusted,
    /// Decline the objection; the original rating stands.
    Rejected,
}

impl DisputeDecision {
    /// The canonical string name of this decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adjusted => "ADJUSTED",
            Self::Rejected => "REJECTED",
        }
    }

    /// The terminal state this decision leads to.
    pub fn terminal_state(&self) -> DisputeState {
        match self {
            Self::Adjusted => DisputeState::Adjusted,
            Self::Rejected => DisputeState::Rejected,
        }
    }
}

impl std::fmt::Display for DisputeDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Resolution ──────────────────────────────────────────────────────

/// The recorded outcome of a resolved dispute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// The decision taken.
    pub decision: DisputeDecision,
    /// Why the resolver decided this way.
    pub summary: String,
    /// The corrected total score. Present only for ADJUSTED.
    pub adjusted_total_score: Option<f64>,
    /// Who resolved the dispute.
    pub resolved_by: EmployeeId,
    /// When the dispute was resolved.
    pub resolved_at: Timestamp,
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of a single dispute state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeTransitionRecord {
    /// State before the transition.
    pub from_state: DisputeState,
    /// State after the transition.
    pub to_state: DisputeState,
    /// When the transition occurred.
    pub timestamp: Timestamp,
}

// ─── The Dispute ─────────────────────────────────────────────────────

/// An employee's objection to a finalized appraisal rating.
///
/// Every state change is appended to [`transitions`](Dispute::transitions).
/// Terminal states reject all further transitions; re-opening a decided
/// dispute is not a thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Unique dispute identifier.
    pub id: DisputeId,
    /// The appraisal being disputed.
    pub appraisal_id: AppraisalId,
    /// Why the employee objects to the rating.
    pub reason: String,
    /// Free-text commentary from the employee.
    pub employee_comments: String,
    /// Current lifecycle state.
    pub state: DisputeState,
    /// The outcome, once a decision is made.
    pub resolution: Option<Resolution>,
    /// When the dispute was filed.
    pub filed_at: Timestamp,
    /// When the dispute last changed.
    pub updated_at: Timestamp,
    /// Ordered log of all state transitions.
    pub transitions: Vec<DisputeTransitionRecord>,
}

impl Dispute {
    /// File a new dispute in the Open state.
    ///
    /// Guards on the appraisal (finalized, owned by the filer, not
    /// already disputed) belong to the resolution service — the
    /// aggregate assumes a legitimate filing.
    pub fn file(appraisal_id: AppraisalId, reason: String, employee_comments: String) -> Self {
        let now = Timestamp::now();
        Self {
            id: DisputeId::new(),
            appraisal_id,
            reason,
            employee_comments,
            state: DisputeState::Open,
            resolution: None,
            filed_at: now,
            updated_at: now,
            transitions: Vec::new(),
        }
    }

    /// Move the dispute under review (OPEN → UNDER_REVIEW).
    pub fn begin_review(&mut self) -> Result<(), DisputeError> {
        self.guard_not_terminal()?;
        if self.state != DisputeState::Open {
            return Err(DisputeError::InvalidTransition {
                from: self.state.to_string(),
                to: DisputeState::UnderReview.to_string(),
            });
        }
        self.do_transition(DisputeState::UnderReview);
        Ok(())
    }

    /// Apply a resolution, moving to the decision's terminal state.
    ///
    /// Legal from both Open and UnderReview. A REJECTED decision
    /// ignores any supplied score.
    ///
    /// # Errors
    ///
    /// - [`DisputeError::AlreadyResolved`] from a terminal state
    /// - [`DisputeError::MissingResolution`] for a blank summary
    /// - [`DisputeError::MissingAdjustedScore`] for ADJUSTED without a
    ///   score
    pub fn resolve(
        &mut self,
        decision: DisputeDecision,
        summary: &str,
        adjusted_total_score: Option<f64>,
        resolved_by: EmployeeId,
    ) -> Result<(), DisputeError> {
        self.guard_not_terminal()?;
        if summary.trim().is_empty() {
            return Err(DisputeError::MissingResolution);
        }
        let adjusted = match decision {
            DisputeDecision::Adjusted => {
                Some(adjusted_total_score.ok_or(DisputeError::MissingAdjustedScore)?)
            }
            DisputeDecision::Rejected => None,
        };

        let now = Timestamp::now();
        self.resolution = Some(Resolution {
            decision,
            summary: summary.to_string(),
            adjusted_total_score: adjusted,
            resolved_by,
            resolved_at: now,
        });
        self.do_transition(decision.terminal_state());
        Ok(())
    }

    /// Compensate a resolution whose score propagation failed.
    ///
    /// Restores the state the dispute was in immediately before
    /// [`resolve`](Dispute::resolve) and clears the recorded outcome.
    /// Only the resolution saga calls this.
    pub fn revert_resolution(&mut self) -> Result<(), DisputeError> {
        if !self.state.is_terminal() || self.resolution.is_none() {
            return Err(DisputeError::InvalidTransition {
                from: self.state.to_string(),
                to: "reverted".to_string(),
            });
        }
        // The last transition is the one resolve() recorded.
        let last = self
            .transitions
            .pop()
            .ok_or(DisputeError::InvalidTransition {
                from: self.state.to_string(),
                to: "reverted".to_string(),
            })?;
        self.state = last.from_state;
        self.resolution = None;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn guard_not_terminal(&self) -> Result<(), DisputeError> {
        if self.state.is_terminal() {
            return Err(DisputeError::AlreadyResolved {
                dispute_id: self.id.to_string(),
                state: self.state.to_string(),
            });
        }
        Ok(())
    }

    /// Record a state transition.
    fn do_transition(&mut self, to: DisputeState) {
        self.transitions.push(DisputeTransitionRecord {
            from_state: self.state,
            to_state: to,
            timestamp: Timestamp::now(),
        });
        self.state = to;
        self.updated_at = Timestamp::now();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
