pub mod chat;
pub mod collection;

pub use chat::{ChatMessage, Role};
pub use collection::{Collection, CollectionId};
