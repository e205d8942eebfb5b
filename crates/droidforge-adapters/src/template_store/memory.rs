//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use droidforge_core::{
    application::ports::TemplateStore,
    domain::{DomainValidator as validator, Template, TemplateId},
    error::DroidforgeResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateId, Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with the built-in Android skeleton loaded.
    pub fn with_builtin() -> DroidforgeResult<Self> {
        let store = Self::new();
        for template in builtin_templates::all() {
            store.insert(template)?;
        }
        Ok(store)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: &TemplateId) -> DroidforgeResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| droidforge_core::application::ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            droidforge_core::application::ApplicationError::TemplateMissing { id: id.to_string() }
                .into()
        })
    }

    fn list(&self) -> DroidforgeResult<Vec<TemplateId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| droidforge_core::application::ApplicationError::StoreLockError)?;

        let mut ids: Vec<TemplateId> = inner.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn insert(&self, template: Template) -> DroidforgeResult<()> {
        // Validate before insertion
        validator::validate_template(&template)
            .map_err(droidforge_core::error::DroidforgeError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| droidforge_core::application::ApplicationError::StoreLockError)?;

        inner.insert(template.id.clone(), template);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droidforge_core::domain::TemplateMapping;

    #[test]
    fn builtin_store_serves_every_mapped_template() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), 14);

        for entry in TemplateMapping::standard().entries() {
            let template = store.get(&entry.template).unwrap();
            assert!(!template.content.is_empty());
        }
    }

    #[test]
    fn get_unknown_id_is_template_missing() {
        let store = InMemoryStore::new();
        let err = store.get(&TemplateId::new("nope")).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn insert_rejects_empty_content() {
        let store = InMemoryStore::new();
        let result = store.insert(Template::new("empty/one", "   \n"));
        assert!(result.is_err());
    }

    #[test]
    fn insert_replaces_existing() {
        let store = InMemoryStore::new();
        store.insert(Template::new("a", "first")).unwrap();
        store.insert(Template::new("a", "second")).unwrap();
        assert_eq!(store.get(&TemplateId::new("a")).unwrap().content, "second");
    }
}
