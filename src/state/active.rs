// Active collection - the one piece of state shared between screens
//
// The collections screen writes it through a `CollectionSelector`; the chat
// screen only ever sees the effective value, reconciled against the location.

use crate::model::CollectionId;
use tracing::debug;

/// Effective active collection: an id embedded in the location wins over the
/// remembered selection, and absence of both means "no selection".
pub fn effective_collection(
    route_id: Option<&CollectionId>,
    selected: Option<&CollectionId>,
) -> Option<CollectionId> {
    route_id.or(selected).cloned()
}

#[derive(Debug, Default)]
pub struct ActiveCollection {
    current: Option<CollectionId>,
}

impl ActiveCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection. `None` clears it. Does not navigate.
    pub fn set_active_collection(&mut self, id: Option<CollectionId>) {
        debug!(
            from = ?self.current.as_ref().map(CollectionId::as_str),
            to = ?id.as_ref().map(CollectionId::as_str),
            "Active collection changed"
        );
        self.current = id;
    }

    pub fn resolve_active_collection(&self, route_id: Option<&CollectionId>) -> Option<CollectionId> {
        effective_collection(route_id, self.current.as_ref())
    }

    pub fn current(&self) -> Option<&CollectionId> {
        self.current.as_ref()
    }

    /// Back to the state of a fresh session.
    pub fn reset(&mut self) {
        debug!("Active collection reset");
        self.current = None;
    }

    pub fn selector(&mut self) -> CollectionSelector<'_> {
        CollectionSelector { target: self }
    }
}

/// Handle given to the collections screen: it can read the selection and
/// replace it, nothing else.
pub struct CollectionSelector<'a> {
    target: &'a mut ActiveCollection,
}

impl CollectionSelector<'_> {
    pub fn select(&mut self, id: Option<CollectionId>) {
        self.target.set_active_collection(id);
    }

    pub fn selected(&self) -> Option<&CollectionId> {
        self.target.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> CollectionId {
        CollectionId::new(value)
    }

    #[test]
    fn test_precedence_rule() {
        let a = id("a");
        let b = id("b");
        assert_eq!(effective_collection(Some(&a), Some(&b)), Some(a.clone()));
        assert_eq!(effective_collection(Some(&a), None), Some(a.clone()));
        assert_eq!(effective_collection(None, Some(&b)), Some(b));
        assert_eq!(effective_collection(None, None), None);
    }

    #[test]
    fn test_fresh_state_resolves_to_nothing() {
        let active = ActiveCollection::new();
        assert_eq!(active.current(), None);
        assert_eq!(active.resolve_active_collection(None), None);
    }

    #[test]
    fn test_selection_used_without_route_id() {
        let mut active = ActiveCollection::new();
        for value in ["abc123", "1", "", "with space"] {
            active.set_active_collection(Some(id(value)));
            assert_eq!(active.resolve_active_collection(None), Some(id(value)));
        }
    }

    #[test]
    fn test_route_id_wins_over_selection() {
        let mut active = ActiveCollection::new();
        active.set_active_collection(Some(id("id1")));
        let route_id = id("id2");
        assert_eq!(active.resolve_active_collection(Some(&route_id)), Some(route_id));
        // Resolving does not rewrite the selection
        assert_eq!(active.current(), Some(&id("id1")));
    }

    #[test]
    fn test_setting_same_id_twice_is_idempotent() {
        let mut active = ActiveCollection::new();
        active.set_active_collection(Some(id("same")));
        let first = active.resolve_active_collection(None);
        active.set_active_collection(Some(id("same")));
        assert_eq!(active.resolve_active_collection(None), first);
    }

    #[test]
    fn test_overwrite_keeps_no_history() {
        let mut active = ActiveCollection::new();
        active.set_active_collection(Some(id("first")));
        active.set_active_collection(Some(id("second")));
        assert_eq!(active.resolve_active_collection(None), Some(id("second")));
    }

    #[test]
    fn test_clearing_selection() {
        let mut active = ActiveCollection::new();
        active.set_active_collection(Some(id("abc")));
        active.set_active_collection(None);
        assert_eq!(active.current(), None);
        assert_eq!(active.resolve_active_collection(None), None);

        let route_id = id("still-works");
        assert_eq!(active.resolve_active_collection(Some(&route_id)), Some(route_id));
    }

    #[test]
    fn test_reset() {
        let mut active = ActiveCollection::new();
        active.set_active_collection(Some(id("abc")));
        active.reset();
        assert_eq!(active.resolve_active_collection(None), None);
    }

    #[test]
    fn test_selector_writes_through() {
        let mut active = ActiveCollection::new();
        {
            let mut selector = active.selector();
            assert_eq!(selector.selected(), None);
            selector.select(Some(id("picked")));
            assert_eq!(selector.selected(), Some(&id("picked")));
        }
        assert_eq!(active.resolve_active_collection(None), Some(id("picked")));

        active.selector().select(None);
        assert_eq!(active.resolve_active_collection(None), None);
    }
}
