//! # Cycle Store
//!
//! Persistence port for cycles. Lifecycle transitions run as
//! state-guarded conditional updates: the mutator executes on a copy of
//! the record while the store lock is held, and the copy replaces the
//! stored record only when the mutator succeeds. Two concurrent
//! `activate` calls therefore serialize, and the loser sees the state
//! guard fail inside the aggregate.

use std::collections::HashMap;
use std::sync::RwLock;

use cadence_core::CycleId;

use crate::cycle::Cycle;
use crate::error::CycleError;

/// Cycle persistence port.
pub trait CycleStore: Send + Sync {
    /// Persist a freshly created cycle.
    fn create(&self, cycle: Cycle);

    /// Fetch one cycle.
    fn get(&self, id: CycleId) -> Option<Cycle>;

    /// List all cycles, newest first.
    fn list(&self) -> Vec<Cycle>;

    /// Apply a mutator to a cycle under the store lock.
    ///
    /// The mutation is transactional: if the mutator fails, the stored
    /// record is untouched. Returns the updated cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::NotFound`] for an unknown id, or whatever
    /// the mutator returned.
    fn update(
        &self,
        id: CycleId,
        mutate: &dyn Fn(&mut Cycle) -> Result<(), CycleError>,
    ) -> Result<Cycle, CycleError>;
}

/// In-memory cycle store.
#[derive(Debug, Default)]
pub struct InMemoryCycleStore {
    inner: RwLock<HashMap<CycleId, Cycle>>,
}

impl InMemoryCycleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CycleStore for InMemoryCycleStore {
    fn create(&self, cycle: Cycle) {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        map.insert(cycle.id, cycle);
    }

    fn get(&self, id: CycleId) -> Option<Cycle> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        map.get(&id).cloned()
    }

    fn list(&self) -> Vec<Cycle> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<Cycle> = map.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    fn update(
        &self,
        id: CycleId,
        mutate: &dyn Fn(&mut Cycle) -> Result<(), CycleError>,
    ) -> Result<Cycle, CycleError> {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let stored = map.get_mut(&id).ok_or(CycleError::NotFound { id })?;
        // Mutate a copy; commit only on success.
        let mut candidate = stored.clone();
        mutate(&mut candidate)?;
        *stored = candidate.clone();
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::CycleTimeline;
    use cadence_core::{ReviewKind, Timestamp};
    use std::sync::Arc;

    fn make_cycle() -> Cycle {
        Cycle::create(
            "Q1 2025 Review".to_string(),
            ReviewKind::Annual,
            CycleTimeline {
                start_date: Timestamp::parse("2025-01-01T00:00:00Z").unwrap(),
                end_date: Timestamp::parse("2025-03-31T00:00:00Z").unwrap(),
                manager_due_date: Some(Timestamp::parse("2025-04-10T00:00:00Z").unwrap()),
                employee_ack_due_date: None,
            },
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_update_commits_on_success() {
        let store = InMemoryCycleStore::new();
        let cycle = make_cycle();
        let id = cycle.id;
        store.create(cycle);

        let updated = store.update(id, &|c| c.activate("launch")).unwrap();
        assert!(updated.is_active());
        assert!(store.get(id).unwrap().is_active());
    }

    #[test]
    fn test_update_rolls_back_on_failure() {
        let store = InMemoryCycleStore::new();
        let cycle = make_cycle();
        let id = cycle.id;
        store.create(cycle);

        // close() from Planned fails; the stored record must be untouched.
        assert!(store.update(id, &|c| c.close("early")).is_err());
        let stored = store.get(id).unwrap();
        assert!(stored.transitions.is_empty());
    }

    #[test]
    fn test_update_unknown_id() {
        let store = InMemoryCycleStore::new();
        assert!(matches!(
            store.update(CycleId::new(), &|_| Ok(())),
            Err(CycleError::NotFound { .. })
        ));
    }

    #[test]
    fn test_concurrent_activation_single_winner() {
        let store = Arc::new(InMemoryCycleStore::new());
        let cycle = make_cycle();
        let id = cycle.id;
        store.create(cycle);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.update(id, &|c| c.activate("race")).is_ok()
            }));
        }
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(store.get(id).unwrap().transitions.len(), 1);
    }
}
