//! # Dispute Resolution Service
//!
//! Filing guards and the resolve/propagate saga.
//!
//! Resolution is two steps. Step one commits the decision on the
//! dispute through a state-guarded conditional update — of two
//! concurrent resolvers, exactly one wins and the other sees
//! `AlreadyResolved`. Step two propagates an adjusted score to the
//! appraisal record. When that write fails, the dispute is compensated
//! back to its prior state, so a failed resolution leaves no trace.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use cadence_core::{
    AppraisalId, DisputeId, EmployeeId, NotificationEvent, Notifier,
};
use cadence_template::TemplateStore;

use crate::appraisal::AppraisalStore;
use crate::dispute::{Dispute, DisputeDecision};
use crate::error::DisputeError;

// ─── Store Port ──────────────────────────────────────────────────────

/// Dispute persistence port.
pub trait DisputeStore: Send + Sync {
    /// Persist a freshly filed dispute.
    fn create(&self, dispute: Dispute);

    /// Fetch one dispute.
    fn get(&self, id: DisputeId) -> Option<Dispute>;

    /// Apply a mutator under the store lock.
    ///
    /// Transactional: a failing mutator leaves the stored record
    /// untouched. This is the conditional-update primitive the saga's
    /// state guard rides on.
    fn update(
        &self,
        id: DisputeId,
        mutate: &dyn Fn(&mut Dispute) -> Result<(), DisputeError>,
    ) -> Result<Dispute, DisputeError>;

    /// The live (non-terminal) dispute for an appraisal, if any.
    fn live_dispute_for(&self, appraisal_id: AppraisalId) -> Option<Dispute>;
}

/// In-memory dispute store.
#[derive(Debug, Default)]
pub struct InMemoryDisputeStore {
    inner: RwLock<HashMap<DisputeId, Dispute>>,
}

impl InMemoryDisputeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisputeStore for InMemoryDisputeStore {
    fn create(&self, dispute: Dispute) {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        map.insert(dispute.id, dispute);
    }

    fn get(&self, id: DisputeId) -> Option<Dispute> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        map.get(&id).cloned()
    }

    fn update(
        &self,
        id: DisputeId,
        mutate: &dyn Fn(&mut Dispute) -> Result<(), DisputeError>,
    ) -> Result<Dispute, DisputeError> {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let stored = map.get_mut(&id).ok_or(DisputeError::NotFound { id })?;
        let mut candidate = stored.clone();
        mutate(&mut candidate)?;
        *stored = candidate.clone();
        Ok(candidate)
    }

    fn live_dispute_for(&self, appraisal_id: AppraisalId) -> Option<Dispute> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        map.values()
            .find(|d| d.appraisal_id == appraisal_id && !d.state.is_terminal())
            .cloned()
    }
}

// ─── Service ─────────────────────────────────────────────────────────

/// The dispute resolution service.
pub struct DisputeResolutionService {
    disputes: Arc<dyn DisputeStore>,
    appraisals: Arc<dyn AppraisalStore>,
    templates: Arc<dyn TemplateStore>,
    notifier: Arc<dyn Notifier>,
}

impl DisputeResolutionService {
    /// Wire up the service.
    pub fn new(
        disputes: Arc<dyn DisputeStore>,
        appraisals: Arc<dyn AppraisalStore>,
        templates: Arc<dyn TemplateStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            disputes,
            appraisals,
            templates,
            notifier,
        }
    }

    /// File a dispute against a finalized appraisal.
    ///
    /// # Errors
    ///
    /// - [`DisputeError::AppraisalNotFound`] — no such appraisal
    /// - [`DisputeError::NotDisputable`] — appraisal not finalized
    /// - [`DisputeError::NotAppraisalOwner`] — filer is not the
    ///   evaluated employee
    /// - [`DisputeError::AlreadyDisputed`] — a live dispute exists
    pub fn file(
        &self,
        appraisal_id: AppraisalId,
        filed_by: EmployeeId,
        reason: String,
        employee_comments: String,
    ) -> Result<Dispute, DisputeError> {
        let appraisal = self
            .appraisals
            .get(appraisal_id)
            .ok_or(DisputeError::AppraisalNotFound { id: appraisal_id })?;
        if !appraisal.finalized {
            return Err(DisputeError::NotDisputable { appraisal_id });
        }
        if appraisal.employee_id != filed_by {
            return Err(DisputeError::NotAppraisalOwner {
                appraisal_id,
                employee_id: filed_by,
            });
        }
        if self.disputes.live_dispute_for(appraisal_id).is_some() {
            return Err(DisputeError::AlreadyDisputed { appraisal_id });
        }

        let dispute = Dispute::file(appraisal_id, reason, employee_comments);
        tracing::info!(dispute = %dispute.id, appraisal = %appraisal_id, "dispute filed");
        self.disputes.create(dispute.clone());
        Ok(dispute)
    }

    /// Move a dispute under review.
    pub fn begin_review(&self, dispute_id: DisputeId) -> Result<Dispute, DisputeError> {
        self.disputes.update(dispute_id, &|d| d.begin_review())
    }

    /// Resolve a dispute and, for ADJUSTED, propagate the corrected
    /// score to the appraisal record.
    ///
    /// # Errors
    ///
    /// Everything [`Dispute::resolve`] rejects, plus
    /// [`DisputeError::ScoreOutOfBounds`] when the adjusted score falls
    /// outside the appraisal template's rating scale, and
    /// [`DisputeError::ScorePropagationFailed`] when the appraisal
    /// write fails — in which case the dispute has been compensated
    /// back to its prior state.
    pub fn resolve(
        &self,
        dispute_id: DisputeId,
        decision: DisputeDecision,
        resolution_summary: &str,
        adjusted_total_score: Option<f64>,
        resolved_by: EmployeeId,
    ) -> Result<Dispute, DisputeError> {
        let dispute = self
            .disputes
            .get(dispute_id)
            .ok_or(DisputeError::NotFound { id: dispute_id })?;
        let appraisal = self
            .appraisals
            .get(dispute.appraisal_id)
            .ok_or(DisputeError::AppraisalNotFound {
                id: dispute.appraisal_id,
            })?;

        // Bounds-check an adjusted score against the template the
        // appraisal was scored on, before touching any state.
        if decision == DisputeDecision::Adjusted {
            let score = adjusted_total_score.ok_or(DisputeError::MissingAdjustedScore)?;
            let template = self
                .templates
                .get(appraisal.template_id)
                .ok_or(DisputeError::TemplateMissing {
                    id: appraisal.template_id,
                })?;
            if !template.scale.contains(score) {
                return Err(DisputeError::ScoreOutOfBounds {
                    score,
                    min: template.scale.min,
                    max: template.scale.max,
                });
            }
        }

        // Step 1: commit the decision under the state guard. The loser
        // of a concurrent resolve race fails here with AlreadyResolved.
        let resolved = self.disputes.update(dispute_id, &|d| {
            d.resolve(decision, resolution_summary, adjusted_total_score, resolved_by)
        })?;

        // Step 2: propagate the adjusted score. Compensate on failure.
        if decision == DisputeDecision::Adjusted {
            // resolve() guarantees the score is present for ADJUSTED.
            let score = adjusted_total_score.ok_or(DisputeError::MissingAdjustedScore)?;
            if let Err(write_err) = self.appraisals.write_score(dispute.appraisal_id, score) {
                let compensation = self
                    .disputes
                    .update(dispute_id, &|d| d.revert_resolution());
                if let Err(comp_err) = compensation {
                    tracing::error!(
                        dispute = %dispute_id,
                        error = %comp_err,
                        "compensation after failed score propagation also failed"
                    );
                }
                return Err(DisputeError::ScorePropagationFailed {
                    dispute_id: dispute_id.to_string(),
                    reason: write_err.to_string(),
                });
            }
        }

        metrics::counter!("cadence_disputes_resolved_total", "decision" => decision.as_str())
            .increment(1);
        tracing::info!(
            dispute = %dispute_id,
            decision = %decision,
            "dispute resolved"
        );
        self.notifier.notify(NotificationEvent::DisputeResolved {
            dispute_id,
            decision: decision.as_str().to_string(),
        });

        Ok(resolved)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
