//! # Assignment Records
//!
//! An assignment binds one employee, one manager, and one template
//! within one cycle. Assignments are created exclusively by the bulk
//! assignment engine while the parent cycle is Active; at most one
//! exists per `(cycle, employee, template)` tuple.

use serde::{Deserialize, Serialize};

use cadence_core::{
    AssignmentId, CycleId, DepartmentId, EmployeeId, TemplateId, Timestamp,
};

use crate::error::AssignmentError;

/// The fill-in progress of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// Created, evaluation not yet begun.
    NotStarted,
    /// Manager has started scoring.
    InProgress,
    /// Manager submitted the evaluation.
    Submitted,
    /// Employee acknowledged the result (terminal).
    Acknowledged,
}

impl AssignmentStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Submitted => "SUBMITTED",
            Self::Acknowledged => "ACKNOWLEDGED",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Acknowledged)
    }

    /// The next status in the progression, if any.
    pub fn next(&self) -> Option<AssignmentStatus> {
        match self {
            Self::NotStarted => Some(Self::InProgress),
            Self::InProgress => Some(Self::Submitted),
            Self::Submitted => Some(Self::Acknowledged),
            Self::Acknowledged => None,
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employee's evaluation assignment within a cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: AssignmentId,
    /// The parent cycle.
    pub cycle_id: CycleId,
    /// The employee being evaluated.
    pub employee_id: EmployeeId,
    /// The manager performing the evaluation.
    pub manager_id: EmployeeId,
    /// The evaluation template to fill in.
    pub template_id: TemplateId,
    /// Department the employee belonged to at assignment time.
    pub department_id: Option<DepartmentId>,
    /// Fill-in progress.
    pub status: AssignmentStatus,
    /// When the assignment was created.
    pub assigned_at: Timestamp,
    /// Completion deadline, when one was requested.
    pub due_date: Option<Timestamp>,
}

impl Assignment {
    /// Create a new assignment in the NotStarted status.
    pub fn new(
        cycle_id: CycleId,
        employee_id: EmployeeId,
        manager_id: EmployeeId,
        template_id: TemplateId,
        department_id: Option<DepartmentId>,
        due_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id: AssignmentId::new(),
            cycle_id,
            employee_id,
            manager_id,
            template_id,
            department_id,
            status: AssignmentStatus::NotStarted,
            assigned_at: Timestamp::now(),
            due_date,
        }
    }

    /// Manager begins scoring (NOT_STARTED → IN_PROGRESS).
    pub fn start(&mut self) -> Result<(), AssignmentError> {
        self.advance_to(AssignmentStatus::InProgress)
    }

    /// Manager submits the evaluation (IN_PROGRESS → SUBMITTED).
    pub fn submit(&mut self) -> Result<(), AssignmentError> {
        self.advance_to(AssignmentStatus::Submitted)
    }

    /// Employee acknowledges the result (SUBMITTED → ACKNOWLEDGED).
    pub fn acknowledge(&mut self) -> Result<(), AssignmentError> {
        self.advance_to(AssignmentStatus::Acknowledged)
    }

    /// Move to the target status if it is the direct successor.
    fn advance_to(&mut self, target: AssignmentStatus) -> Result<(), AssignmentError> {
        if self.status.next() != Some(target) {
            return Err(AssignmentError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        self.status = target;
        Ok(())
    }
}
