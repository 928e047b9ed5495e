//! # Template Store
//!
//! Persistence port for templates, plus the in-memory implementation
//! used by tests, the CLI, and single-node deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use cadence_core::TemplateId;

use crate::error::TemplateError;
use crate::template::Template;

/// Template persistence port.
pub trait TemplateStore: Send + Sync {
    /// Persist a freshly validated template.
    fn create(&self, template: Template);

    /// Fetch one template.
    fn get(&self, id: TemplateId) -> Option<Template>;

    /// List all templates, newest first.
    fn list(&self) -> Vec<Template>;

    /// Set the active flag. Idempotent: setting an already-inactive
    /// template inactive succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for an unknown id.
    fn set_active(&self, id: TemplateId, active: bool) -> Result<Template, TemplateError>;
}

/// In-memory template store.
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    inner: RwLock<HashMap<TemplateId, Template>>,
}

impl InMemoryTemplateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn create(&self, template: Template) {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        map.insert(template.id, template);
    }

    fn get(&self, id: TemplateId) -> Option<Template> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        map.get(&id).cloned()
    }

    fn list(&self) -> Vec<Template> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<Template> = map.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    fn set_active(&self, id: TemplateId, active: bool) -> Result<Template, TemplateError> {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let template = map.get_mut(&id).ok_or(TemplateError::NotFound { id })?;
        template.is_active = active;
        Ok(template.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{RatingScale, ScaleKind};
    use crate::template::{Criterion, TemplateDraft};
    use crate::validate::validate;
    use cadence_core::ReviewKind;

    fn make_template() -> Template {
        validate(TemplateDraft {
            name: "Probation Review".to_string(),
            kind: ReviewKind::Probationary,
            scale: RatingScale::of_kind(
                ScaleKind::ThreePoint,
                vec!["Below".into(), "Meets".into(), "Exceeds".into()],
            ),
            criteria: vec![Criterion {
                key: "overall".to_string(),
                title: "Overall".to_string(),
                details: String::new(),
                weight: 100.0,
            }],
            instructions: None,
        })
        .unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let store = InMemoryTemplateStore::new();
        let template = make_template();
        let id = template.id;
        store.create(template);
        assert_eq!(store.get(id).unwrap().id, id);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let store = InMemoryTemplateStore::new();
        let template = make_template();
        let id = template.id;
        store.create(template);

        let t = store.set_active(id, false).unwrap();
        assert!(!t.is_active);
        // Second deactivation succeeds and changes nothing.
        let t = store.set_active(id, false).unwrap();
        assert!(!t.is_active);
        let t = store.set_active(id, true).unwrap();
        assert!(t.is_active);
    }

    #[test]
    fn test_toggle_unknown_id_fails() {
        let store = InMemoryTemplateStore::new();
        assert!(matches!(
            store.set_active(TemplateId::new(), false),
            Err(TemplateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_contains_created() {
        let store = InMemoryTemplateStore::new();
        store.create(make_template());
        store.create(make_template());
        assert_eq!(store.list().len(), 2);
    }
}
