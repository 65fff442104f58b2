// Collection identifiers and listing metadata
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a document collection.
///
/// Nothing in the shell interprets the value: whatever arrives from the
/// listing or from a location segment is carried through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id can stand alone as the last segment of `/chat/{id}`
    /// and come back unchanged when that path is parsed.
    pub fn is_path_segment(&self) -> bool {
        !self.0.is_empty()
            && !self
                .0
                .chars()
                .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CollectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CollectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub document_count: usize,
}

impl Collection {
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            document_count: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_document_count(mut self, count: usize) -> Self {
        self.document_count = count;
        self
    }

    pub fn documents_label(&self) -> String {
        match self.document_count {
            1 => "1 document".to_string(),
            n => format!("{} documents", n),
        }
    }
}
