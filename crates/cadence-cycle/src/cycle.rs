//! # Cycle Aggregate
//!
//! A cycle is a scheduled window in which appraisals are collected
//! (e.g., "Q1 2025 Review"). The aggregate owns the lifecycle state
//! machine and the timeline invariants; every transition is recorded in
//! an append-only audit log.

use serde::{Deserialize, Serialize};

use cadence_core::{CycleId, DepartmentId, ReviewKind, TemplateId, Timestamp};

use crate::error::CycleError;

// ─── Cycle State ─────────────────────────────────────────────────────

/// The lifecycle state of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CycleState {
    /// Cycle is being prepared; dates and mappings may still change.
    Planned,
    /// Cycle is running; assignments may be created.
    Active,
    /// Cycle has ended; no new assignments. Irreversible.
    Closed,
    /// Cycle is archived (terminal).
    Archived,
}

impl CycleState {
    /// The canonical string name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::Active => "ACTIVE",
            Self::Closed => "CLOSED",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Valid target states from this state.
    pub fn valid_transitions(&self) -> &'static [CycleState] {
        match self {
            Self::Planned => &[Self::Active],
            Self::Active => &[Self::Closed],
            Self::Closed => &[Self::Archived],
            Self::Archived => &[],
        }
    }
}

impl std::fmt::Display for CycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Timeline ────────────────────────────────────────────────────────

/// The dated window of a cycle.
///
/// Ordering invariants, checked on creation and on every edit:
/// `start_date < end_date`, `manager_due_date > end_date` when present,
/// and `employee_ack_due_date` after whichever of `manager_due_date` /
/// `end_date` comes later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CycleTimeline {
    /// First day of the review window.
    pub start_date: Timestamp,
    /// Last day of the review window.
    pub end_date: Timestamp,
    /// When managers must have submitted their evaluations.
    pub manager_due_date: Option<Timestamp>,
    /// When employees must have acknowledged their evaluations.
    pub employee_ack_due_date: Option<Timestamp>,
}

impl CycleTimeline {
    /// Check the ordering invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::TimelineOrder`] naming the offending pair.
    pub fn validate(&self) -> Result<(), CycleError> {
        if self.start_date >= self.end_date {
            return Err(CycleError::TimelineOrder {
                later_field: "end_date",
                later: self.end_date,
                earlier_field: "start_date",
                earlier: self.start_date,
            });
        }
        if let Some(manager_due) = self.manager_due_date {
            if manager_due <= self.end_date {
                return Err(CycleError::TimelineOrder {
                    later_field: "manager_due_date",
                    later: manager_due,
                    earlier_field: "end_date",
                    earlier: self.end_date,
                });
            }
        }
        if let Some(ack_due) = self.employee_ack_due_date {
            // The acknowledgement deadline follows the manager deadline
            // when one exists, otherwise the end of the window.
            let (floor_field, floor) = match self.manager_due_date {
                Some(manager_due) => ("manager_due_date", manager_due),
                None => ("end_date", self.end_date),
            };
            if ack_due <= floor {
                return Err(CycleError::TimelineOrder {
                    later_field: "employee_ack_due_date",
                    later: ack_due,
                    earlier_field: floor_field,
                    earlier: floor,
                });
            }
        }
        Ok(())
    }
}

// ─── Template-Department Map ─────────────────────────────────────────

/// Declares which departments a template applies to within a cycle.
///
/// Informational: the map never creates assignments by itself. When a
/// cycle declares a map for a template, department-targeted bulk
/// assignment is restricted to the mapped departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemplateDepartmentMap {
    /// The template being mapped.
    pub template_id: TemplateId,
    /// Departments the template applies to.
    pub department_ids: Vec<DepartmentId>,
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of a cycle state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleTransitionRecord {
    /// State before the transition.
    pub from_state: CycleState,
    /// State after the transition.
    pub to_state: CycleState,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// Reason for the transition.
    pub reason: String,
}

// ─── Patch ───────────────────────────────────────────────────────────

/// Edit payload for a Planned cycle. `None` fields are left unchanged;
/// a supplied timeline replaces the whole window and is re-validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CyclePatch {
    /// New display name.
    pub name: Option<String>,
    /// Replacement timeline.
    pub timeline: Option<CycleTimeline>,
    /// Replacement template-department map.
    pub template_assignments: Option<Vec<TemplateDepartmentMap>>,
}

// ─── Cycle ───────────────────────────────────────────────────────────

/// A cycle with its lifecycle state and transition history.
///
/// Enforces valid state transitions. Invalid transitions are rejected
/// with structured errors identifying the current state and the
/// attempted target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cycle {
    /// Unique cycle identifier.
    pub id: CycleId,
    /// Display name (e.g., "Q1 2025 Review").
    pub name: String,
    /// Review category.
    pub kind: ReviewKind,
    /// Current lifecycle state.
    pub state: CycleState,
    /// The dated window.
    pub timeline: CycleTimeline,
    /// Which templates apply to which departments.
    pub template_assignments: Vec<TemplateDepartmentMap>,
    /// When the cycle was created.
    pub created_at: Timestamp,
    /// Ordered log of all state transitions.
    pub transitions: Vec<CycleTransitionRecord>,
}

impl Cycle {
    /// Create a new cycle in the Planned state.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::TimelineOrder`] if the timeline violates
    /// an ordering invariant — nothing is created in that case.
    pub fn create(
        name: String,
        kind: ReviewKind,
        timeline: CycleTimeline,
        template_assignments: Vec<TemplateDepartmentMap>,
    ) -> Result<Self, CycleError> {
        timeline.validate()?;
        Ok(Self {
            id: CycleId::new(),
            name,
            kind,
            state: CycleState::Planned,
            timeline,
            template_assignments,
            created_at: Timestamp::now(),
            transitions: Vec::new(),
        })
    }

    /// Activate the cycle (PLANNED → ACTIVE).
    ///
    /// One-way. The service layer notifies participants after the
    /// transition commits.
    pub fn activate(&mut self, reason: &str) -> Result<(), CycleError> {
        self.require_state(CycleState::Planned, CycleState::Active)?;
        self.do_transition(CycleState::Active, reason);
        Ok(())
    }

    /// Close the cycle (ACTIVE → CLOSED). Irreversible; there is no
    /// reopen.
    pub fn close(&mut self, reason: &str) -> Result<(), CycleError> {
        self.require_state(CycleState::Active, CycleState::Closed)?;
        self.do_transition(CycleState::Closed, reason);
        Ok(())
    }

    /// Archive the cycle (CLOSED → ARCHIVED).
    pub fn archive(&mut self, reason: &str) -> Result<(), CycleError> {
        self.require_state(CycleState::Closed, CycleState::Archived)?;
        self.do_transition(CycleState::Archived, reason);
        Ok(())
    }

    /// Apply an edit to a Planned cycle.
    ///
    /// Editing any other state is rejected server-side with
    /// [`CycleError::EditForbidden`]. A patched timeline is validated
    /// as a whole before anything is applied.
    pub fn apply_edit(&mut self, patch: CyclePatch) -> Result<(), CycleError> {
        if self.state != CycleState::Planned {
            return Err(CycleError::EditForbidden {
                state: self.state.to_string(),
            });
        }
        if let Some(timeline) = &patch.timeline {
            timeline.validate()?;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(timeline) = patch.timeline {
            self.timeline = timeline;
        }
        if let Some(maps) = patch.template_assignments {
            self.template_assignments = maps;
        }
        Ok(())
    }

    /// Whether assignments may currently be created in this cycle.
    pub fn is_active(&self) -> bool {
        self.state == CycleState::Active
    }

    /// Whether the cycle declares a department map for a template.
    pub fn has_mapping_for(&self, template_id: TemplateId) -> bool {
        self.template_assignments
            .iter()
            .any(|m| m.template_id == template_id)
    }

    /// Whether a department is covered by the cycle's map for a
    /// template. Vacuously true when the cycle declares no map for it.
    pub fn department_mapped(&self, template_id: TemplateId, department: DepartmentId) -> bool {
        if !self.has_mapping_for(template_id) {
            return true;
        }
        self.template_assignments
            .iter()
            .filter(|m| m.template_id == template_id)
            .any(|m| m.department_ids.contains(&department))
    }

    /// Validate that the cycle is in the expected state.
    fn require_state(&self, expected: CycleState, target: CycleState) -> Result<(), CycleError> {
        if self.state.is_terminal() {
            return Err(CycleError::TerminalState {
                cycle_id: self.id.to_string(),
            });
        }
        if self.state != expected {
            return Err(CycleError::InvalidTransition {
                from: self.state.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    /// Record a state transition.
    fn do_transition(&mut self, to: CycleState, reason: &str) {
        self.transitions.push(CycleTransitionRecord {
            from_state: self.state,
            to_state: to,
            timestamp: Timestamp::now(),
            reason: reason.to_string(),
        });
        self.state = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn q1_timeline() -> CycleTimeline {
        CycleTimeline {
            start_date: ts("2025-01-01T00:00:00Z"),
            end_date: ts("2025-03-31T00:00:00Z"),
            manager_due_date: Some(ts("2025-04-10T00:00:00Z")),
            employee_ack_due_date: None,
        }
    }

    fn make_cycle() -> Cycle {
        Cycle::create(
            "Q1 2025 Review".to_string(),
            ReviewKind::Annual,
            q1_timeline(),
            Vec::new(),
        )
        .unwrap()
    }

    fn make_active_cycle() -> Cycle {
        let mut c = make_cycle();
        c.activate("launch").unwrap();
        c
    }

    // ── Timeline validation ──────────────────────────────────────────

    #[test]
    fn test_new_cycle_is_planned() {
        let c = make_cycle();
        assert_eq!(c.state, CycleState::Planned);
        assert!(c.transitions.is_empty());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut timeline = q1_timeline();
        timeline.end_date = ts("2024-12-31T00:00:00Z");
        let err = Cycle::create("bad".into(), ReviewKind::Annual, timeline, Vec::new())
            .unwrap_err();
        match err {
            CycleError::TimelineOrder {
                later_field,
                earlier_field,
                ..
            } => {
                assert_eq!(later_field, "end_date");
                assert_eq!(earlier_field, "start_date");
            }
            other => panic!("expected TimelineOrder, got {other:?}"),
        }
    }

    #[test]
    fn test_end_equal_start_rejected() {
        let mut timeline = q1_timeline();
        timeline.end_date = timeline.start_date;
        assert!(Cycle::create("bad".into(), ReviewKind::Annual, timeline, Vec::new()).is_err());
    }

    #[test]
    fn test_manager_due_before_end_rejected() {
        let mut timeline = q1_timeline();
        timeline.manager_due_date = Some(ts("2025-03-30T00:00:00Z"));
        let err = Cycle::create("bad".into(), ReviewKind::Annual, timeline, Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CycleError::TimelineOrder {
                later_field: "manager_due_date",
                ..
            }
        ));
    }

    #[test]
    fn test_ack_due_must_follow_manager_due() {
        let mut timeline = q1_timeline();
        timeline.employee_ack_due_date = Some(ts("2025-04-05T00:00:00Z"));
        let err = Cycle::create("bad".into(), ReviewKind::Annual, timeline, Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CycleError::TimelineOrder {
                later_field: "employee_ack_due_date",
                earlier_field: "manager_due_date",
                ..
            }
        ));
    }

    #[test]
    fn test_ack_due_follows_end_when_no_manager_due() {
        let mut timeline = q1_timeline();
        timeline.manager_due_date = None;
        timeline.employee_ack_due_date = Some(ts("2025-04-05T00:00:00Z"));
        assert!(Cycle::create("ok".into(), ReviewKind::Annual, timeline, Vec::new()).is_ok());
    }

    #[test]
    fn test_full_timeline_accepted() {
        let mut timeline = q1_timeline();
        timeline.employee_ack_due_date = Some(ts("2025-04-20T00:00:00Z"));
        assert!(Cycle::create("ok".into(), ReviewKind::Annual, timeline, Vec::new()).is_ok());
    }

    // ── Lifecycle transitions ────────────────────────────────────────

    #[test]
    fn test_planned_to_active() {
        let mut c = make_cycle();
        c.activate("launch").unwrap();
        assert_eq!(c.state, CycleState::Active);
        assert_eq!(c.transitions.len(), 1);
    }

    #[test]
    fn test_activate_twice_rejected() {
        let mut c = make_active_cycle();
        let err = c.activate("again").unwrap_err();
        assert!(matches!(err, CycleError::InvalidTransition { .. }));
        assert_eq!(c.state, CycleState::Active);
    }

    #[test]
    fn test_close_requires_active() {
        let mut c = make_cycle();
        assert!(c.close("early").is_err());
        c.activate("launch").unwrap();
        c.close("done").unwrap();
        assert_eq!(c.state, CycleState::Closed);
    }

    #[test]
    fn test_close_twice_rejected() {
        let mut c = make_active_cycle();
        c.close("done").unwrap();
        assert!(c.close("again").is_err());
    }

    #[test]
    fn test_no_reopen_after_close() {
        let mut c = make_active_cycle();
        c.close("done").unwrap();
        assert!(c.activate("reopen").is_err());
        assert_eq!(c.state, CycleState::Closed);
    }

    #[test]
    fn test_archive_requires_closed() {
        let mut c = make_active_cycle();
        assert!(c.archive("too early").is_err());
        c.close("done").unwrap();
        c.archive("filed").unwrap();
        assert_eq!(c.state, CycleState::Archived);
    }

    #[test]
    fn test_archived_is_terminal() {
        let mut c = make_active_cycle();
        c.close("done").unwrap();
        c.archive("filed").unwrap();
        let err = c.activate("no").unwrap_err();
        assert!(matches!(err, CycleError::TerminalState { .. }));
    }

    #[test]
    fn test_transition_log_records_full_path() {
        let mut c = make_cycle();
        c.activate("launch").unwrap();
        c.close("done").unwrap();
        c.archive("filed").unwrap();
        assert_eq!(c.transitions.len(), 3);
        assert_eq!(c.transitions[0].from_state, CycleState::Planned);
        assert_eq!(c.transitions[2].to_state, CycleState::Archived);
    }

    // ── Editing ──────────────────────────────────────────────────────

    #[test]
    fn test_edit_planned_cycle() {
        let mut c = make_cycle();
        c.apply_edit(CyclePatch {
            name: Some("Q1 2025 Review (final)".to_string()),
            ..CyclePatch::default()
        })
        .unwrap();
        assert_eq!(c.name, "Q1 2025 Review (final)");
    }

    #[test]
    fn test_edit_active_cycle_rejected() {
        let mut c = make_active_cycle();
        let err = c
            .apply_edit(CyclePatch {
                name: Some("sneaky".to_string()),
                ..CyclePatch::default()
            })
            .unwrap_err();
        assert!(matches!(err, CycleError::EditForbidden { .. }));
        assert_eq!(c.name, "Q1 2025 Review");
    }

    #[test]
    fn test_edit_with_bad_timeline_rejected_atomically() {
        let mut c = make_cycle();
        let mut timeline = q1_timeline();
        timeline.end_date = ts("2024-01-01T00:00:00Z");
        let err = c
            .apply_edit(CyclePatch {
                name: Some("should not stick".to_string()),
                timeline: Some(timeline),
                ..CyclePatch::default()
            })
            .unwrap_err();
        assert!(matches!(err, CycleError::TimelineOrder { .. }));
        // The name change must not have been applied either.
        assert_eq!(c.name, "Q1 2025 Review");
    }

    // ── Template-department map ──────────────────────────────────────

    #[test]
    fn test_unmapped_template_allows_any_department() {
        let c = make_cycle();
        assert!(c.department_mapped(TemplateId::new(), DepartmentId::new()));
    }

    #[test]
    fn test_mapped_template_restricts_departments() {
        let template_id = TemplateId::new();
        let mapped = DepartmentId::new();
        let other = DepartmentId::new();
        let mut c = make_cycle();
        c.apply_edit(CyclePatch {
            template_assignments: Some(vec![TemplateDepartmentMap {
                template_id,
                department_ids: vec![mapped],
            }]),
            ..CyclePatch::default()
        })
        .unwrap();
        assert!(c.department_mapped(template_id, mapped));
        assert!(!c.department_mapped(template_id, other));
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_cycle_serialization() {
        let c = make_active_cycle();
        let json = serde_json::to_string(&c).unwrap();
        let parsed: Cycle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.state, c.state);
        assert_eq!(parsed.id, c.id);
    }
}
