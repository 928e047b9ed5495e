//! # Bulk Assignment Engine
//!
//! Creates one assignment per target employee in an active cycle.
//!
//! The engine validates everything it can before the first write (cycle
//! state, template state, department mapping, candidate existence,
//! manager resolution) so the operation either rejects whole or reaches
//! the write phase for every candidate. Duplicates are handled at write
//! time by the store's atomic uniqueness claim and reported as skips.

use std::sync::Arc;

use cadence_core::{CycleId, DepartmentId, EmployeeId, TemplateId, Timestamp};
use cadence_cycle::{Assignment, Cycle, CycleStore};
use cadence_template::TemplateStore;

use crate::directory::{EmployeeDirectory, EmployeeRecord};
use crate::error::AssignError;
use crate::store::AssignmentStore;

/// The target set of a bulk assignment: exactly one of an explicit
/// employee list or a department list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkTarget {
    /// Assign these specific employees.
    Employees(Vec<EmployeeId>),
    /// Assign every assignable member of these departments.
    Departments(Vec<DepartmentId>),
}

impl BulkTarget {
    /// Build a target from the two optional request fields, enforcing
    /// mutual exclusivity.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::InvalidArgument`] when both or neither
    /// list is supplied.
    pub fn from_parts(
        employee_ids: Option<Vec<EmployeeId>>,
        department_ids: Option<Vec<DepartmentId>>,
    ) -> Result<Self, AssignError> {
        match (employee_ids, department_ids) {
            (Some(employees), None) => Ok(Self::Employees(employees)),
            (None, Some(departments)) => Ok(Self::Departments(departments)),
            (Some(_), Some(_)) => Err(AssignError::InvalidArgument(
                "employee_ids and department_ids are mutually exclusive".to_string(),
            )),
            (None, None) => Err(AssignError::InvalidArgument(
                "one of employee_ids or department_ids is required".to_string(),
            )),
        }
    }
}

/// Optional knobs for a bulk assignment call.
#[derive(Debug, Clone, Default)]
pub struct BulkAssignOptions {
    /// Evaluate every candidate under this manager instead of their
    /// reporting-line manager.
    pub manager_override: Option<EmployeeId>,
    /// Completion deadline stamped on every created assignment.
    pub due_date: Option<Timestamp>,
}

/// What a bulk assignment call actually did.
///
/// Skips are surfaced, not swallowed: the caller can tell "4 created,
/// 1 already assigned" apart from "5 created".
#[derive(Debug, Clone)]
pub struct BulkAssignOutcome {
    /// Assignments created by this call, in candidate order.
    pub created: Vec<Assignment>,
    /// Employees skipped because they already held an assignment for
    /// this cycle and template.
    pub skipped: Vec<EmployeeId>,
}

/// The bulk assignment engine.
///
/// Holds the stores and the directory port; one instance serves the
/// whole process.
pub struct BulkAssignmentEngine {
    cycles: Arc<dyn CycleStore>,
    templates: Arc<dyn TemplateStore>,
    assignments: Arc<dyn AssignmentStore>,
    directory: Arc<dyn EmployeeDirectory>,
}

impl BulkAssignmentEngine {
    /// Wire up an engine.
    pub fn new(
        cycles: Arc<dyn CycleStore>,
        templates: Arc<dyn TemplateStore>,
        assignments: Arc<dyn AssignmentStore>,
        directory: Arc<dyn EmployeeDirectory>,
    ) -> Self {
        Self {
            cycles,
            templates,
            assignments,
            directory,
        }
    }

    /// Create assignments for every resolved candidate.
    ///
    /// # Errors
    ///
    /// Rejects before any write when the cycle is not Active, the
    /// template is missing or inactive, a department falls outside the
    /// cycle's template map, an explicitly listed employee is unknown,
    /// a candidate's manager cannot be resolved, or the target resolves
    /// to zero candidates.
    pub fn bulk_assign(
        &self,
        cycle_id: CycleId,
        template_id: TemplateId,
        target: BulkTarget,
        options: BulkAssignOptions,
    ) -> Result<BulkAssignOutcome, AssignError> {
        let cycle = self
            .cycles
            .get(cycle_id)
            .ok_or(AssignError::CycleNotFound { id: cycle_id })?;
        if !cycle.is_active() {
            return Err(AssignError::CycleNotActive {
                id: cycle_id,
                state: cycle.state.to_string(),
            });
        }

        let template = self
            .templates
            .get(template_id)
            .ok_or(AssignError::TemplateNotFound { id: template_id })?;
        if !template.is_active {
            return Err(AssignError::TemplateInactive { id: template_id });
        }

        let candidates = self.resolve_candidates(&cycle, template_id, target)?;
        if candidates.is_empty() {
            return Err(AssignError::EmptyTargetSet);
        }

        // Resolve every manager before the first write so the call is
        // all-or-nothing up to the duplicate skips.
        let mut resolved: Vec<(EmployeeRecord, EmployeeId)> = Vec::with_capacity(candidates.len());
        for record in candidates {
            let manager = match options.manager_override {
                Some(manager) => manager,
                None => self
                    .directory
                    .manager_of(record.id)
                    .ok_or(AssignError::ManagerUnresolved { employee: record.id })?,
            };
            resolved.push((record, manager));
        }

        let mut created = Vec::new();
        let mut skipped = Vec::new();
        for (record, manager) in resolved {
            let assignment = Assignment::new(
                cycle_id,
                record.id,
                manager,
                template_id,
                record.department_id,
                options.due_date,
            );
            match self.assignments.create(assignment.clone()) {
                Ok(()) => created.push(assignment),
                Err(AssignError::AlreadyAssigned { .. }) => skipped.push(record.id),
                Err(other) => return Err(other),
            }
        }

        metrics::counter!("cadence_assignments_created_total").increment(created.len() as u64);
        metrics::counter!("cadence_assignments_skipped_total").increment(skipped.len() as u64);
        tracing::info!(
            cycle = %cycle_id,
            template = %template_id,
            created = created.len(),
            skipped = skipped.len(),
            "bulk assignment complete"
        );

        Ok(BulkAssignOutcome { created, skipped })
    }

    /// Expand the target into concrete employee records, deduplicated
    /// and order-preserving.
    fn resolve_candidates(
        &self,
        cycle: &Cycle,
        template_id: TemplateId,
        target: BulkTarget,
    ) -> Result<Vec<EmployeeRecord>, AssignError> {
        let mut seen: Vec<EmployeeId> = Vec::new();
        let mut candidates: Vec<EmployeeRecord> = Vec::new();

        match target {
            BulkTarget::Employees(ids) => {
                for id in ids {
                    if seen.contains(&id) {
                        continue;
                    }
                    seen.push(id);
                    let record = self
                        .directory
                        .employee(id)
                        .ok_or(AssignError::UnknownEmployee { id })?;
                    candidates.push(record);
                }
            }
            BulkTarget::Departments(ids) => {
                let mut departments: Vec<DepartmentId> = Vec::new();
                for department in ids {
                    if departments.contains(&department) {
                        continue;
                    }
                    if !cycle.department_mapped(template_id, department) {
                        return Err(AssignError::DepartmentNotMapped {
                            department,
                            template: template_id,
                        });
                    }
                    departments.push(department);
                }
                for department in departments {
                    for record in self.directory.department_members(department) {
                        if !record.status.is_assignable() || seen.contains(&record.id) {
                            continue;
                        }
                        seen.push(record.id);
                        candidates.push(record);
                    }
                }
            }
        }

        Ok(candidates)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
