//! # Notification Port
//!
//! Fire-and-forget dispatch of workflow events to the notification
//! service. Delivery (email, chat, digest batching) is an external
//! collaborator; the workflow only emits events and never waits on or
//! fails because of them.

use serde::{Deserialize, Serialize};

use crate::identity::{CycleId, DisputeId, EmployeeId};

/// A workflow event worth telling participants about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationEvent {
    /// A cycle was activated; participants should expect assignments.
    CycleActivated {
        /// The activated cycle.
        cycle_id: CycleId,
    },
    /// A cycle was closed; no further assignments will be created.
    CycleClosed {
        /// The closed cycle.
        cycle_id: CycleId,
    },
    /// An employee received a new evaluation assignment.
    AssignmentCreated {
        /// The parent cycle.
        cycle_id: CycleId,
        /// The assigned employee.
        employee_id: EmployeeId,
    },
    /// A dispute reached a terminal decision.
    DisputeResolved {
        /// The resolved dispute.
        dispute_id: DisputeId,
        /// Canonical name of the decision (`ADJUSTED` / `REJECTED`).
        decision: String,
    },
}

/// Fire-and-forget notification dispatch.
///
/// Implementations must not block the workflow: a failed or slow
/// delivery is the notification service's problem, never the caller's.
pub trait Notifier: Send + Sync {
    /// Dispatch one event.
    fn notify(&self, event: NotificationEvent);
}

/// A notifier that drops every event. Useful in tests and the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: NotificationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_notifier_accepts_events() {
        NullNotifier.notify(NotificationEvent::CycleActivated {
            cycle_id: CycleId::new(),
        });
    }

    #[test]
    fn test_event_serializes() {
        let event = NotificationEvent::DisputeResolved {
            dispute_id: DisputeId::new(),
            decision: "ADJUSTED".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ADJUSTED"));
    }
}
