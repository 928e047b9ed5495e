//! # Assignment Error Types
//!
//! Failure modes of bulk assignment. Everything here is rejected before
//! or during the write phase with enough context for the caller to say
//! exactly why nothing (or not everything) was created.

use thiserror::Error;

use cadence_core::{CycleId, DepartmentId, EmployeeId, TemplateId};

/// Errors from the bulk assignment engine and the assignment store.
#[derive(Error, Debug)]
pub enum AssignError {
    /// The target selection was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The cycle does not exist.
    #[error("cycle {id} not found")]
    CycleNotFound {
        /// The missing cycle id.
        id: CycleId,
    },

    /// The cycle exists but is not accepting assignments.
    #[error("cycle {id} is {state}, assignments require an ACTIVE cycle")]
    CycleNotActive {
        /// The cycle id.
        id: CycleId,
        /// Its current state.
        state: String,
    },

    /// The template does not exist.
    #[error("template {id} not found")]
    TemplateNotFound {
        /// The missing template id.
        id: TemplateId,
    },

    /// The template exists but is deactivated.
    #[error("template {id} is inactive")]
    TemplateInactive {
        /// The template id.
        id: TemplateId,
    },

    /// The department is outside the cycle's map for this template.
    #[error("department {department} is not mapped to template {template} in this cycle")]
    DepartmentNotMapped {
        /// The requested department.
        department: DepartmentId,
        /// The template whose map excluded it.
        template: TemplateId,
    },

    /// An explicitly listed employee does not exist in the directory.
    #[error("employee {id} not found in the directory")]
    UnknownEmployee {
        /// The unknown employee id.
        id: EmployeeId,
    },

    /// A candidate has no reporting-line manager and no override was given.
    #[error("no manager could be resolved for employee {employee}")]
    ManagerUnresolved {
        /// The employee without a manager.
        employee: EmployeeId,
    },

    /// Target resolution produced no candidates. Nothing was created.
    #[error("target set resolved to zero employees")]
    EmptyTargetSet,

    /// The uniqueness claim on `(cycle, employee, template)` was already
    /// taken. Inside a bulk call this is counted as a skip, not an error.
    #[error("employee {employee} already has an assignment for template {template} in cycle {cycle}")]
    AlreadyAssigned {
        /// The parent cycle.
        cycle: CycleId,
        /// The already-assigned employee.
        employee: EmployeeId,
        /// The template in question.
        template: TemplateId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_not_active_names_state() {
        let err = AssignError::CycleNotActive {
            id: CycleId::new(),
            state: "PLANNED".to_string(),
        };
        assert!(format!("{err}").contains("PLANNED"));
    }

    #[test]
    fn already_assigned_names_all_three_ids() {
        let cycle = CycleId::new();
        let employee = EmployeeId::new();
        let template = TemplateId::new();
        let err = AssignError::AlreadyAssigned {
            cycle,
            employee,
            template,
        };
        let msg = format!("{err}");
        assert!(msg.contains(&cycle.to_string()));
        assert!(msg.contains(&employee.to_string()));
        assert!(msg.contains(&template.to_string()));
    }
}
