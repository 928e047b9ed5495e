//! # Appraisal Records
//!
//! The appraisal itself — scoring, finalization, acknowledgement — is
//! owned elsewhere. This module models it only as a rating source: the
//! dispute workflow reads the current total score and, on an ADJUSTED
//! resolution, writes the corrected one back. That write is the single
//! cross-aggregate mutation in the workflow and goes through the
//! [`AppraisalStore`] port so the saga's compensation path can react to
//! its failure.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cadence_core::{AppraisalId, AssignmentId, EmployeeId, TemplateId};

/// A finalized appraisal as the rating source for disputes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    /// Unique appraisal identifier.
    pub id: AppraisalId,
    /// The assignment this appraisal fulfilled.
    pub assignment_id: AssignmentId,
    /// The template the appraisal was scored against.
    pub template_id: TemplateId,
    /// The evaluated employee.
    pub employee_id: EmployeeId,
    /// Weighted total score on the template's rating scale.
    pub total_score: f64,
    /// Whether the appraisal is finalized. Only finalized appraisals
    /// can be disputed.
    pub finalized: bool,
}

/// Errors from the appraisal score write.
#[derive(Error, Debug)]
pub enum AppraisalWriteError {
    /// No appraisal with the given id exists.
    #[error("appraisal {id} not found")]
    NotFound {
        /// The missing appraisal id.
        id: AppraisalId,
    },

    /// The appraisal store rejected the write.
    #[error("appraisal store rejected the write: {0}")]
    Rejected(String),
}

/// Read/adjust access to appraisal records.
pub trait AppraisalStore: Send + Sync {
    /// Fetch one appraisal.
    fn get(&self, id: AppraisalId) -> Option<Appraisal>;

    /// Overwrite the total score. Called only by the dispute
    /// resolution saga after an ADJUSTED decision commits.
    fn write_score(&self, id: AppraisalId, score: f64) -> Result<(), AppraisalWriteError>;
}

/// In-memory appraisal store.
///
/// Carries a write-failure switch so tests can drive the saga's
/// compensation path.
#[derive(Debug, Default)]
pub struct InMemoryAppraisalStore {
    inner: RwLock<HashMap<AppraisalId, Appraisal>>,
    fail_writes: AtomicBool,
}

impl InMemoryAppraisalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an appraisal record.
    pub fn insert(&self, appraisal: Appraisal) {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        map.insert(appraisal.id, appraisal);
    }

    /// Make every subsequent `write_score` fail (or succeed again).
    pub fn inject_write_failure(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl AppraisalStore for InMemoryAppraisalStore {
    fn get(&self, id: AppraisalId) -> Option<Appraisal> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        map.get(&id).cloned()
    }

    fn write_score(&self, id: AppraisalId, score: f64) -> Result<(), AppraisalWriteError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppraisalWriteError::Rejected(
                "injected write failure".to_string(),
            ));
        }
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let appraisal = map.get_mut(&id).ok_or(AppraisalWriteError::NotFound { id })?;
        appraisal.total_score = score;
        Ok(())
    }
}
