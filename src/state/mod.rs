pub mod active;
pub mod catalog;
pub mod chat;
pub mod navigation;
pub mod ui;

pub use active::{ActiveCollection, CollectionSelector};
pub use catalog::{CatalogState, CatalogStatus};
pub use chat::ChatState;
pub use navigation::NavigationState;
pub use ui::UIState;
