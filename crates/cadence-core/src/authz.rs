//! # Authorization Table
//!
//! One declarative map from workflow operation to the set of roles
//! allowed to perform it, checked centrally by the API layer.
//!
//! The table is the single source of truth for role gating. Handlers
//! call [`is_allowed`] and nothing else — there are no per-route role
//! arrays to drift out of sync.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A caller role in the HR suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// HR operations staff.
    Hr,
    /// People manager.
    Manager,
    /// Regular employee.
    Employee,
    /// Payroll staff.
    Payroll,
    /// Leadership / executive readers.
    Leadership,
}

impl Role {
    /// The canonical string name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Hr => "HR",
            Self::Manager => "MANAGER",
            Self::Employee => "EMPLOYEE",
            Self::Payroll => "PAYROLL",
            Self::Leadership => "LEADERSHIP",
        }
    }

    /// Parse a canonical role name.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "HR" => Ok(Self::Hr),
            "MANAGER" => Ok(Self::Manager),
            "EMPLOYEE" => Ok(Self::Employee),
            "PAYROLL" => Ok(Self::Payroll),
            "LEADERSHIP" => Ok(Self::Leadership),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-gated workflow operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Create a new evaluation template.
    CreateTemplate,
    /// Toggle a template active/inactive.
    ToggleTemplate,
    /// List templates.
    ListTemplates,
    /// Create a new cycle in the Planned state.
    CreateCycle,
    /// Edit a Planned cycle.
    EditCycle,
    /// Activate a Planned cycle.
    ActivateCycle,
    /// Close an Active cycle.
    CloseCycle,
    /// Archive a Closed cycle.
    ArchiveCycle,
    /// View cycles and their assignments.
    ViewCycles,
    /// Bulk-assign evaluations to employees.
    BulkAssign,
    /// File a dispute against a finalized appraisal.
    FileDispute,
    /// Move a dispute under review.
    ReviewDispute,
    /// Resolve a dispute (adjust or reject).
    ResolveDispute,
    /// Read a dispute record.
    ViewDispute,
}

impl Operation {
    /// All operations as a slice, in table order.
    pub fn all() -> &'static [Operation] {
        &[
            Self::CreateTemplate,
            Self::ToggleTemplate,
            Self::ListTemplates,
            Self::CreateCycle,
            Self::EditCycle,
            Self::ActivateCycle,
            Self::CloseCycle,
            Self::ArchiveCycle,
            Self::ViewCycles,
            Self::BulkAssign,
            Self::FileDispute,
            Self::ReviewDispute,
            Self::ResolveDispute,
            Self::ViewDispute,
        ]
    }

    /// The canonical string name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTemplate => "CREATE_TEMPLATE",
            Self::ToggleTemplate => "TOGGLE_TEMPLATE",
            Self::ListTemplates => "LIST_TEMPLATES",
            Self::CreateCycle => "CREATE_CYCLE",
            Self::EditCycle => "EDIT_CYCLE",
            Self::ActivateCycle => "ACTIVATE_CYCLE",
            Self::CloseCycle => "CLOSE_CYCLE",
            Self::ArchiveCycle => "ARCHIVE_CYCLE",
            Self::ViewCycles => "VIEW_CYCLES",
            Self::BulkAssign => "BULK_ASSIGN",
            Self::FileDispute => "FILE_DISPUTE",
            Self::ReviewDispute => "REVIEW_DISPUTE",
            Self::ResolveDispute => "RESOLVE_DISPUTE",
            Self::ViewDispute => "VIEW_DISPUTE",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The roles permitted to perform an operation.
///
/// Template and cycle administration belong to HR (with Admin as the
/// superuser everywhere). Filing a dispute belongs to the evaluated
/// employee; resolving one belongs to HR. Leadership and Payroll get
/// read access where reporting needs it.
pub fn allowed_roles(op: Operation) -> &'static [Role] {
    use Operation::*;
    use Role::*;
    match op {
        CreateTemplate | ToggleTemplate => &[Admin, Hr],
        ListTemplates => &[Admin, Hr, Manager, Leadership],
        CreateCycle | EditCycle | ActivateCycle | CloseCycle | ArchiveCycle => &[Admin, Hr],
        ViewCycles => &[Admin, Hr, Manager, Payroll, Leadership],
        BulkAssign => &[Admin, Hr],
        FileDispute => &[Employee],
        ReviewDispute | ResolveDispute => &[Admin, Hr],
        ViewDispute => &[Admin, Hr, Manager, Employee],
    }
}

/// Whether `role` may perform `op`.
pub fn is_allowed(role: Role, op: Operation) -> bool {
    allowed_roles(op).contains(&role)
}
