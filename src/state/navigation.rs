// Navigation state - current location and back/forward history
use crate::route::Route;
use tracing::debug;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

pub struct NavigationState {
    current: Route,
    history: Vec<Route>,
    history_index: usize,
    limit: usize,
}

impl NavigationState {
    pub fn new(start: Route, limit: usize) -> Self {
        Self {
            current: start.clone(),
            history: vec![start],
            history_index: 0,
            limit: limit.max(1),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Moves to `route`. Returns false when already there.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }

        debug!(from = %self.current, to = %route, "Navigate");

        // Remove any forward history when navigating to a new location
        self.history.truncate(self.history_index + 1);
        self.history.push(route.clone());
        if self.history.len() > self.limit {
            let overflow = self.history.len() - self.limit;
            self.history.drain(..overflow);
        }
        self.history_index = self.history.len() - 1;
        self.current = route;
        true
    }

    pub fn go_back(&mut self) -> Option<Route> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index].clone();
            debug!(to = %self.current, "Navigate back");
            Some(self.current.clone())
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<Route> {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current = self.history[self.history_index].clone();
            debug!(to = %self.current, "Navigate forward");
            Some(self.current.clone())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CollectionId;

    fn chat(id: &str) -> Route {
        Route::Chat(Some(CollectionId::new(id)))
    }

    #[test]
    fn test_push_and_back_forward() {
        let mut nav = NavigationState::new(Route::Home, DEFAULT_HISTORY_LIMIT);
        assert!(!nav.can_go_back());

        assert!(nav.push(Route::Collections));
        assert!(nav.push(chat("abc")));
        assert_eq!(nav.current(), &chat("abc"));

        assert_eq!(nav.go_back(), Some(Route::Collections));
        assert_eq!(nav.go_back(), Some(Route::Home));
        assert_eq!(nav.go_back(), None);
        assert!(nav.can_go_forward());

        assert_eq!(nav.go_forward(), Some(Route::Collections));
        assert_eq!(nav.go_forward(), Some(chat("abc")));
        assert_eq!(nav.go_forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_history() {
        let mut nav = NavigationState::new(Route::Home, DEFAULT_HISTORY_LIMIT);
        nav.push(Route::Collections);
        nav.push(chat("abc"));
        nav.go_back();
        nav.push(Route::Chat(None));

        assert!(!nav.can_go_forward());
        assert_eq!(nav.go_back(), Some(Route::Collections));
    }

    #[test]
    fn test_push_same_route_is_noop() {
        let mut nav = NavigationState::new(Route::Collections, DEFAULT_HISTORY_LIMIT);
        assert!(!nav.push(Route::Collections));
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut nav = NavigationState::new(Route::Home, 3);
        nav.push(Route::Collections);
        nav.push(chat("1"));
        nav.push(chat("2"));

        assert_eq!(nav.go_back(), Some(chat("1")));
        assert_eq!(nav.go_back(), Some(Route::Collections));
        assert_eq!(nav.go_back(), None);
    }
}
