use crate::model::CollectionId;
use crate::route::Route;

/// Actions requested by the views during a frame, applied by the app once the
/// frame's views have finished rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    Navigate(Route),
    NavigateBack,
    NavigateForward,
    AddressSubmitted(String),

    // Collections
    RefreshCollections,

    // Chat
    SendPrompt {
        collection: CollectionId,
        prompt: String,
    },

    // Session
    ResetSession,

    // UI
    ToggleTheme,
}
