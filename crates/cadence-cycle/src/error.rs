//! # Cycle Error Types
//!
//! Structured errors for the cycle lifecycle. State machine rejections
//! carry the current state and the attempted transition; timeline
//! rejections name the offending date pair.

use thiserror::Error;

use cadence_core::{CycleId, Timestamp};

/// Errors from cycle creation, editing, and lifecycle transitions.
#[derive(Error, Debug)]
pub enum CycleError {
    /// Two timeline dates are out of order.
    #[error("{later_field} ({later}) must be after {earlier_field} ({earlier})")]
    TimelineOrder {
        /// Name of the date that must come later.
        later_field: &'static str,
        /// Its value.
        later: Timestamp,
        /// Name of the date it must follow.
        earlier_field: &'static str,
        /// Its value.
        earlier: Timestamp,
    },

    /// Attempted transition is not valid from the current state.
    #[error("invalid cycle transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },

    /// Cycle is archived and accepts no further transitions.
    #[error("cycle {cycle_id} is archived and cannot transition")]
    TerminalState {
        /// The cycle identifier.
        cycle_id: String,
    },

    /// Edits are only allowed while the cycle is still Planned.
    #[error("cycle can only be edited while PLANNED, current state is {state}")]
    EditForbidden {
        /// The state that blocked the edit.
        state: String,
    },

    /// No cycle with the given id exists.
    #[error("cycle {id} not found")]
    NotFound {
        /// The missing cycle id.
        id: CycleId,
    },
}

/// Errors from assignment status progression.
#[derive(Error, Debug)]
pub enum AssignmentError {
    /// Attempted status move is not valid from the current status.
    #[error("invalid assignment transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: String,
        /// Attempted target status.
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_order_names_both_fields() {
        let err = CycleError::TimelineOrder {
            later_field: "end_date",
            later: Timestamp::parse("2025-01-01T00:00:00Z").unwrap(),
            earlier_field: "start_date",
            earlier: Timestamp::parse("2025-03-31T00:00:00Z").unwrap(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("end_date"));
        assert!(msg.contains("start_date"));
    }

    #[test]
    fn edit_forbidden_names_state() {
        let err = CycleError::EditForbidden {
            state: "ACTIVE".to_string(),
        };
        assert!(format!("{err}").contains("ACTIVE"));
    }
}
