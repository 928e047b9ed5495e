//! # Assignment Store
//!
//! Persistence port for assignments. The important part is the
//! uniqueness claim: `create` checks and records the
//! `(cycle, employee, template)` key in one step under the store lock.
//! Concurrent bulk-assign calls for the same cycle and template
//! serialize on that claim — the loser gets `AlreadyAssigned`, never a
//! duplicate row.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use cadence_core::{AssignmentId, CycleId, EmployeeId, TemplateId};
use cadence_cycle::Assignment;

use crate::error::AssignError;

/// Assignment persistence port.
pub trait AssignmentStore: Send + Sync {
    /// Persist an assignment, claiming its uniqueness key atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::AlreadyAssigned`] when the employee
    /// already holds an assignment for this cycle and template.
    fn create(&self, assignment: Assignment) -> Result<(), AssignError>;

    /// Fetch one assignment.
    fn get(&self, id: AssignmentId) -> Option<Assignment>;

    /// All assignments in a cycle, oldest first.
    fn list_for_cycle(&self, cycle_id: CycleId) -> Vec<Assignment>;
}

#[derive(Debug, Default)]
struct StoreState {
    by_id: HashMap<AssignmentId, Assignment>,
    claims: HashSet<(CycleId, EmployeeId, TemplateId)>,
}

/// In-memory assignment store.
#[derive(Debug, Default)]
pub struct InMemoryAssignmentStore {
    inner: RwLock<StoreState>,
}

impl InMemoryAssignmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssignmentStore for InMemoryAssignmentStore {
    fn create(&self, assignment: Assignment) -> Result<(), AssignError> {
        let mut state = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let key = (
            assignment.cycle_id,
            assignment.employee_id,
            assignment.template_id,
        );
        // Claim and insert under the same lock acquisition.
        if !state.claims.insert(key) {
            return Err(AssignError::AlreadyAssigned {
                cycle: assignment.cycle_id,
                employee: assignment.employee_id,
                template: assignment.template_id,
            });
        }
        state.by_id.insert(assignment.id, assignment);
        Ok(())
    }

    fn get(&self, id: AssignmentId) -> Option<Assignment> {
        let state = self.inner.read().unwrap_or_else(|e| e.into_inner());
        state.by_id.get(&id).cloned()
    }

    fn list_for_cycle(&self, cycle_id: CycleId) -> Vec<Assignment> {
        let state = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<Assignment> = state
            .by_id
            .values()
            .filter(|a| a.cycle_id == cycle_id)
            .cloned()
            .collect();
        all.sort_by(|a, b| a.assigned_at.cmp(&b.assigned_at));
        all
    }
}
