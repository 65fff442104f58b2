// Chat state - per-collection transcripts for the current session
use crate::model::{ChatMessage, CollectionId};
use std::collections::{HashMap, HashSet};

pub struct ChatState {
    transcripts: HashMap<CollectionId, Vec<ChatMessage>>,
    pending: HashSet<CollectionId>,
    drafts: HashMap<CollectionId, String>,
    /// Bumped on every `clear`; answers tagged with an older value are stale
    session: u64,
    pub scroll_to_bottom: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            transcripts: HashMap::new(),
            pending: HashSet::new(),
            drafts: HashMap::new(),
            session: 0,
            scroll_to_bottom: false,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn transcript(&self, collection: &CollectionId) -> &[ChatMessage] {
        self.transcripts
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn push(&mut self, collection: &CollectionId, message: ChatMessage) {
        self.transcripts
            .entry(collection.clone())
            .or_default()
            .push(message);
        self.scroll_to_bottom = true;
    }

    pub fn draft(&self, collection: &CollectionId) -> &str {
        self.drafts
            .get(collection)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn draft_mut(&mut self, collection: &CollectionId) -> &mut String {
        self.drafts.entry(collection.clone()).or_default()
    }

    pub fn take_draft(&mut self, collection: &CollectionId) -> String {
        self.drafts.remove(collection).unwrap_or_default()
    }

    pub fn begin_request(&mut self, collection: &CollectionId) {
        self.pending.insert(collection.clone());
    }

    pub fn finish_request(&mut self, collection: &CollectionId) {
        self.pending.remove(collection);
    }

    pub fn is_pending(&self, collection: &CollectionId) -> bool {
        self.pending.contains(collection)
    }

    pub fn clear(&mut self) {
        self.transcripts.clear();
        self.pending.clear();
        self.drafts.clear();
        self.session = self.session.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[test]
    fn test_transcripts_are_per_collection() {
        let a = CollectionId::new("a");
        let b = CollectionId::new("b");
        let mut chat = ChatState::new();

        chat.push(&a, ChatMessage::user("hello"));
        chat.push(&a, ChatMessage::assistant("hi", 3));

        assert_eq!(chat.transcript(&a).len(), 2);
        assert_eq!(chat.transcript(&a)[1].role, Role::Assistant);
        assert!(chat.transcript(&b).is_empty());
        assert!(chat.scroll_to_bottom);
    }

    #[test]
    fn test_pending_requests() {
        let a = CollectionId::new("a");
        let mut chat = ChatState::new();
        chat.begin_request(&a);
        assert!(chat.is_pending(&a));
        chat.finish_request(&a);
        assert!(!chat.is_pending(&a));
    }

    #[test]
    fn test_drafts_are_per_collection() {
        let a = CollectionId::new("a");
        let b = CollectionId::new("b");
        let mut chat = ChatState::new();

        chat.draft_mut(&a).push_str("question for a");
        assert_eq!(chat.draft(&a), "question for a");
        assert_eq!(chat.draft(&b), "");

        chat.draft_mut(&b).push_str("for b");
        assert_eq!(chat.take_draft(&a), "question for a");
        assert_eq!(chat.draft(&a), "");
        assert_eq!(chat.draft(&b), "for b");
    }

    #[test]
    fn test_clear_starts_new_session() {
        let a = CollectionId::new("a");
        let mut chat = ChatState::new();
        let before = chat.session();

        chat.push(&a, ChatMessage::user("hello"));
        chat.begin_request(&a);
        chat.draft_mut(&a).push_str("draft");
        chat.clear();

        assert!(chat.transcript(&a).is_empty());
        assert!(!chat.is_pending(&a));
        assert_eq!(chat.draft(&a), "");
        assert_ne!(chat.session(), before);
    }
}
