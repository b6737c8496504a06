//! Item storage abstractions.

pub mod in_memory;

pub use in_memory::InMemoryItemRepository;

use std::sync::Arc;

use itemservice_core::{DomainResult, ItemId};
use itemservice_items::{Item, ItemParams};

/// Item store.
pub trait ItemRepository: Send + Sync {
    /// Store a new item under the next sequential id.
    fn save(&self, params: ItemParams) -> DomainResult<Item>;

    /// Fails with `DomainError::NotFound` when `id` is unknown.
    fn find_by_id(&self, id: ItemId) -> DomainResult<Item>;

    /// All items, in insertion order.
    fn find_all(&self) -> DomainResult<Vec<Item>>;

    /// Replace the attributes of an existing item; never creates one.
    fn update(&self, id: ItemId, params: ItemParams) -> DomainResult<Item>;

    /// Drop every item (test support).
    fn clear_store(&self) -> DomainResult<()>;
}

impl<S> ItemRepository for Arc<S>
where
    S: ItemRepository + ?Sized,
{
    fn save(&self, params: ItemParams) -> DomainResult<Item> {
        (**self).save(params)
    }

    fn find_by_id(&self, id: ItemId) -> DomainResult<Item> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> DomainResult<Vec<Item>> {
        (**self).find_all()
    }

    fn update(&self, id: ItemId, params: ItemParams) -> DomainResult<Item> {
        (**self).update(id, params)
    }

    fn clear_store(&self) -> DomainResult<()> {
        (**self).clear_store()
    }
}
