pub mod backend;
pub mod worker;

pub use backend::{Backend, OfflineBackend};
pub use worker::{spawn_worker, IoCommand, IoResult};
