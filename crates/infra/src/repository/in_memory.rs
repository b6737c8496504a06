use std::collections::BTreeMap;
use std::sync::RwLock;

use itemservice_core::{DomainError, DomainResult, ItemId};
use itemservice_items::{Item, ItemParams};

use super::ItemRepository;

#[derive(Debug)]
struct Inner {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

/// In-memory item store for tests/dev.
///
/// Ids grow monotonically, so id order is insertion order. Clearing the store
/// does not reset the sequence.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    inner: RwLock<Inner>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::storage("item store lock poisoned")
}

impl ItemRepository for InMemoryItemRepository {
    fn save(&self, params: ItemParams) -> DomainResult<Item> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let id = inner.next_id;
        inner.next_id = id
            .next()
            .ok_or_else(|| DomainError::storage("item id sequence exhausted"))?;

        let item = Item::new(id, params);
        inner.items.insert(id, item.clone());
        tracing::debug!(item_id = %id, "item saved");
        Ok(item)
    }

    fn find_by_id(&self, id: ItemId) -> DomainResult<Item> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner.items.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn find_all(&self) -> DomainResult<Vec<Item>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.items.values().cloned().collect())
    }

    fn update(&self, id: ItemId, params: ItemParams) -> DomainResult<Item> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let item = inner.items.get_mut(&id).ok_or(DomainError::NotFound)?;
        item.apply(params);
        tracing::debug!(item_id = %id, "item updated");
        Ok(item.clone())
    }

    fn clear_store(&self) -> DomainResult<()> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner.items.clear();
        Ok(())
    }
}
