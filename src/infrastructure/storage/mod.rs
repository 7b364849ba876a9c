//! Storage abstractions and implementations

mod memory;
mod traits;

pub use memory::InMemoryStorage;
pub use traits::Storage;
