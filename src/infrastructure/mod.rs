//! External concerns: storage behind a trait seam
//!
//! Persistent storage is out of scope for this service; the [`Storage`]
//! trait is where a database-backed implementation would attach.

pub mod storage;

pub use storage::{InMemoryStorage, Storage};
