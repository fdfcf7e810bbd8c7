//! Process-local item store.
//!
//! # Responsibility
//! - Satisfy `ItemRepository` with plain in-memory collections.
//!
//! # Invariants
//! - Operations never fail.
//! - `list` preserves first-insertion order; overwriting keeps the slot.
//! - Single-threaded only: interior mutability uses `RefCell`.

use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Reference `ItemRepository` implementation backed by a hash map.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RefCell<HashMap<ItemId, Item>>,
    order: RefCell<Vec<ItemId>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Drops every stored item.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
        self.order.borrow_mut().clear();
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn save(&self, item: &Item) -> RepoResult<()> {
        let previous = self.items.borrow_mut().insert(item.id(), item.clone());
        if previous.is_none() {
            self.order.borrow_mut().push(item.id());
        }
        Ok(())
    }

    fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        Ok(self.items.borrow().get(&id).cloned())
    }

    fn list(&self) -> RepoResult<Vec<Item>> {
        let items = self.items.borrow();
        Ok(self
            .order
            .borrow()
            .iter()
            .filter_map(|id| items.get(id).cloned())
            .collect())
    }

    fn delete(&self, id: ItemId) -> RepoResult<bool> {
        let removed = self.items.borrow_mut().remove(&id).is_some();
        if removed {
            self.order.borrow_mut().retain(|existing| *existing != id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryItemRepository;
    use crate::model::item::Item;
    use crate::repo::item_repo::ItemRepository;

    #[test]
    fn overwrite_keeps_insertion_slot() {
        let repo = InMemoryItemRepository::new();
        let first = Item::new("first", 1);
        let second = Item::new("second", 2);
        repo.save(&first).unwrap();
        repo.save(&second).unwrap();

        let mut changed = first.clone();
        changed.value = 100;
        repo.save(&changed).unwrap();

        let names: Vec<_> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|item| (item.name, item.value))
            .collect();
        assert_eq!(
            names,
            vec![("first".to_string(), 100), ("second".to_string(), 2)]
        );
    }

    #[test]
    fn list_is_a_snapshot() {
        let repo = InMemoryItemRepository::new();
        repo.save(&Item::new("kept", 1)).unwrap();

        let mut snapshot = repo.list().unwrap();
        snapshot[0].name = "mutated".to_string();
        snapshot.clear();

        let stored = repo.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "kept");
    }

    #[test]
    fn clear_empties_store() {
        let repo = InMemoryItemRepository::new();
        repo.save(&Item::new("a", 1)).unwrap();
        repo.clear();
        assert!(repo.is_empty());
        assert!(repo.list().unwrap().is_empty());
    }
}
