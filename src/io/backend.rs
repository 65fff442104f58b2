// Backend seam: whatever lists collections and answers questions about them
use crate::error::BackendError;
use crate::model::{Collection, CollectionId};

#[derive(Clone, Debug, PartialEq)]
pub struct Answer {
    pub response: String,
    pub collection_name: String,
    pub sources_count: usize,
}

/// Data source for the collections and chat screens.
///
/// Runs on the I/O worker thread, never on the UI thread.
pub trait Backend: Send {
    fn list_collections(&self) -> Result<Vec<Collection>, BackendError>;

    fn ask(
        &self,
        collection: &CollectionId,
        prompt: &str,
        top_k: usize,
    ) -> Result<Answer, BackendError>;
}

/// Serves the configured collections and explains that no model is attached.
pub struct OfflineBackend {
    collections: Vec<Collection>,
}

impl OfflineBackend {
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }
}

impl Backend for OfflineBackend {
    fn list_collections(&self) -> Result<Vec<Collection>, BackendError> {
        Ok(self.collections.clone())
    }

    fn ask(
        &self,
        collection: &CollectionId,
        prompt: &str,
        _top_k: usize,
    ) -> Result<Answer, BackendError> {
        let found = self
            .collections
            .iter()
            .find(|c| &c.id == collection)
            .ok_or_else(|| BackendError::CollectionNotFound(collection.clone()))?;

        Ok(Answer {
            response: format!(
                "No language model is connected, so **{}** cannot be searched right now.\n\n\
                 Your question was: _{}_",
                found.name,
                prompt.trim()
            ),
            collection_name: found.name.clone(),
            sources_count: 0,
        })
    }
}
