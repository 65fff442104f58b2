pub mod chat;
pub mod collections;
pub mod home;
pub mod markdown;
pub mod navbar;
