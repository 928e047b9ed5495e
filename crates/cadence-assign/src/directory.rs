//! # Employee Directory Port
//!
//! The employee directory is an external collaborator: it owns
//! department membership, employment status, and the position-assignment
//! hierarchy that determines who manages whom. The engine consumes it
//! through this trait and never caches its answers — manager resolution
//! happens at assignment time against the directory's current state.

use serde::{Deserialize, Serialize};

use cadence_core::{DepartmentId, EmployeeId};

/// Employment status as tracked by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    /// Regular active employee.
    Active,
    /// Employee within their probation period.
    Probation,
    /// On extended leave.
    OnLeave,
    /// No longer employed.
    Terminated,
}

impl EmploymentStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Probation => "PROBATION",
            Self::OnLeave => "ON_LEAVE",
            Self::Terminated => "TERMINATED",
        }
    }

    /// Whether department expansion includes this employee.
    ///
    /// Only Active and Probation employees receive assignments when a
    /// department is targeted.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Self::Active | Self::Probation)
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employee profile as the directory reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's profile id.
    pub id: EmployeeId,
    /// Display name.
    pub full_name: String,
    /// Current department, if assigned to one.
    pub department_id: Option<DepartmentId>,
    /// Current reporting-line manager, if any.
    pub manager_id: Option<EmployeeId>,
    /// Employment status.
    pub status: EmploymentStatus,
}

/// Read access to the employee directory.
pub trait EmployeeDirectory: Send + Sync {
    /// Look up one employee profile.
    fn employee(&self, id: EmployeeId) -> Option<EmployeeRecord>;

    /// All employees currently assigned to a department.
    fn department_members(&self, department: DepartmentId) -> Vec<EmployeeRecord>;

    /// The employee's current reporting-line manager.
    fn manager_of(&self, id: EmployeeId) -> Option<EmployeeId> {
        self.employee(id).and_then(|record| record.manager_id)
    }
}

/// In-memory directory for tests, demos, and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    records: Vec<EmployeeRecord>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an employee record.
    pub fn insert(&mut self, record: EmployeeRecord) {
        self.records.push(record);
    }

    /// Builder-style insert for test setup.
    pub fn with(mut self, record: EmployeeRecord) -> Self {
        self.insert(record);
        self
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn employee(&self, id: EmployeeId) -> Option<EmployeeRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn department_members(&self, department: DepartmentId) -> Vec<EmployeeRecord> {
        self.records
            .iter()
            .filter(|r| r.department_id == Some(department))
            .cloned()
            .collect()
    }
}
