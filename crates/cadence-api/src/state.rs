//! # Application State
//!
//! Shared state for the Axum application: the stores, the employee
//! directory port, the notification port, and the two workflow
//! services built on top of them.

use std::sync::Arc;

use cadence_assign::{
    AssignmentStore, BulkAssignmentEngine, EmployeeDirectory, InMemoryAssignmentStore,
};
use cadence_core::{NotificationEvent, Notifier};
use cadence_cycle::{CycleStore, InMemoryCycleStore};
use cadence_dispute::{
    AppraisalStore, DisputeResolutionService, DisputeStore, InMemoryAppraisalStore,
    InMemoryDisputeStore,
};
use cadence_template::{InMemoryTemplateStore, TemplateStore};

/// A notifier that logs each event through `tracing`.
///
/// Stands in for the real notification dispatcher; delivery is
/// fire-and-forget either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, event: NotificationEvent) {
        tracing::info!(?event, "notification dispatched");
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Template persistence.
    pub templates: Arc<dyn TemplateStore>,
    /// Cycle persistence.
    pub cycles: Arc<dyn CycleStore>,
    /// Assignment persistence.
    pub assignments: Arc<dyn AssignmentStore>,
    /// Appraisal records (rating source for disputes).
    pub appraisals: Arc<dyn AppraisalStore>,
    /// Dispute persistence.
    pub disputes: Arc<dyn DisputeStore>,
    /// The employee directory collaborator.
    pub directory: Arc<dyn EmployeeDirectory>,
    /// The notification collaborator.
    pub notifier: Arc<dyn Notifier>,
    /// The bulk assignment engine.
    pub engine: Arc<BulkAssignmentEngine>,
    /// The dispute resolution service.
    pub resolution: Arc<DisputeResolutionService>,
}

impl AppState {
    /// Wire up an application state over explicit ports.
    pub fn new(
        templates: Arc<dyn TemplateStore>,
        cycles: Arc<dyn CycleStore>,
        assignments: Arc<dyn AssignmentStore>,
        appraisals: Arc<dyn AppraisalStore>,
        disputes: Arc<dyn DisputeStore>,
        directory: Arc<dyn EmployeeDirectory>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let engine = Arc::new(BulkAssignmentEngine::new(
            cycles.clone(),
            templates.clone(),
            assignments.clone(),
            directory.clone(),
        ));
        let resolution = Arc::new(DisputeResolutionService::new(
            disputes.clone(),
            appraisals.clone(),
            templates.clone(),
            notifier.clone(),
        ));
        Self {
            templates,
            cycles,
            assignments,
            appraisals,
            disputes,
            directory,
            notifier,
            engine,
            resolution,
        }
    }

    /// State backed entirely by in-memory stores, for the standalone
    /// server binary and integration tests.
    pub fn in_memory(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self::new(
            Arc::new(InMemoryTemplateStore::new()),
            Arc::new(InMemoryCycleStore::new()),
            Arc::new(InMemoryAssignmentStore::new()),
            Arc::new(InMemoryAppraisalStore::new()),
            Arc::new(InMemoryDisputeStore::new()),
            directory,
            Arc::new(TracingNotifier),
        )
    }
}
