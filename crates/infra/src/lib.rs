//! Infrastructure layer: item storage.

pub mod repository;

pub use repository::{InMemoryItemRepository, ItemRepository};
