// Catalog state - collections as last reported by the backend
use crate::model::{Collection, CollectionId};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Default)]
pub struct CatalogState {
    pub status: CatalogStatus,
    collections: Vec<Collection>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    pub fn set_collections(&mut self, collections: Vec<Collection>) {
        self.collections = collections;
        self.status = CatalogStatus::Loaded;
    }

    /// Keeps whatever was listed before; only the status changes.
    pub fn set_failed(&mut self, message: String) {
        self.status = CatalogStatus::Failed(message);
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn find(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| &c.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    pub fn needs_load(&self) -> bool {
        matches!(self.status, CatalogStatus::Idle | CatalogStatus::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_after_load() {
        let mut catalog = CatalogState::new();
        assert!(catalog.needs_load());
        catalog.begin_loading();
        assert!(catalog.is_loading());
        assert!(!catalog.needs_load());

        catalog.set_collections(vec![Collection::new("1", "Manuals")]);
        assert_eq!(catalog.status, CatalogStatus::Loaded);
        assert_eq!(catalog.find(&CollectionId::new("1")).map(|c| c.name.as_str()), Some("Manuals"));
        assert!(catalog.find(&CollectionId::new("2")).is_none());
    }

    #[test]
    fn test_failure_keeps_previous_listing() {
        let mut catalog = CatalogState::new();
        catalog.set_collections(vec![Collection::new("1", "Manuals")]);
        catalog.set_failed("backend unavailable".to_string());
        assert_eq!(catalog.collections().len(), 1);
        assert!(catalog.needs_load());
    }
}
