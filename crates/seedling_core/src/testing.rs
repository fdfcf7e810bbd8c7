//! Test doubles for the item repository port.
//!
//! `FakeItemRepository` is a working store with inspection helpers, used in
//! place of the production store when a test needs to observe calls.

use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoError, RepoResult};
use crate::repo::memory::InMemoryItemRepository;
use std::cell::{Cell, RefCell};

/// In-memory `ItemRepository` that records how it was used.
#[derive(Debug, Default)]
pub struct FakeItemRepository {
    inner: InMemoryItemRepository,
    saved_ids: RefCell<Vec<ItemId>>,
    deletes: Cell<usize>,
    pending_failure: RefCell<Option<String>>,
}

impl FakeItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls since creation or the last reset.
    pub fn save_count(&self) -> usize {
        self.saved_ids.borrow().len()
    }

    /// Number of `delete` calls, hits and misses alike.
    pub fn delete_count(&self) -> usize {
        self.deletes.get()
    }

    pub fn was_saved(&self, id: ItemId) -> bool {
        self.saved_ids.borrow().contains(&id)
    }

    /// Panics unless `id` went through a successful `save`.
    pub fn assert_saved(&self, id: ItemId) {
        assert!(
            self.was_saved(id),
            "expected item {id} to be saved; saved ids: {:?}",
            self.saved_ids.borrow()
        );
    }

    /// Makes the next `save` fail with `RepoError::Backend(message)`.
    pub fn fail_next_save(&self, message: impl Into<String>) {
        *self.pending_failure.borrow_mut() = Some(message.into());
    }

    /// Clears stored items, counters and any pending failure.
    pub fn reset(&self) {
        self.inner.clear();
        self.saved_ids.borrow_mut().clear();
        self.deletes.set(0);
        self.pending_failure.borrow_mut().take();
    }
}

impl ItemRepository for FakeItemRepository {
    fn save(&self, item: &Item) -> RepoResult<()> {
        if let Some(message) = self.pending_failure.borrow_mut().take() {
            return Err(RepoError::Backend(message));
        }
        self.inner.save(item)?;
        self.saved_ids.borrow_mut().push(item.id());
        Ok(())
    }

    fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        self.inner.get(id)
    }

    fn list(&self) -> RepoResult<Vec<Item>> {
        self.inner.list()
    }

    fn delete(&self, id: ItemId) -> RepoResult<bool> {
        self.deletes.set(self.deletes.get() + 1);
        self.inner.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::FakeItemRepository;
    use crate::model::item::Item;
    use crate::repo::item_repo::{ItemRepository, RepoError};

    #[test]
    fn counts_and_reset() {
        let fake = FakeItemRepository::new();
        let item = Item::new("a", 1);
        fake.save(&item).unwrap();
        fake.save(&item).unwrap();
        assert!(!fake.delete(Item::new("b", 2).id()).unwrap());

        assert_eq!(fake.save_count(), 2);
        assert_eq!(fake.delete_count(), 1);
        fake.assert_saved(item.id());

        fake.reset();
        assert_eq!(fake.save_count(), 0);
        assert_eq!(fake.delete_count(), 0);
        assert!(fake.list().unwrap().is_empty());
    }

    #[test]
    fn fail_next_save_fails_once() {
        let fake = FakeItemRepository::new();
        fake.fail_next_save("disk gone");
        let item = Item::new("a", 1);

        let err = fake.save(&item).unwrap_err();
        assert!(matches!(err, RepoError::Backend(ref message) if message == "disk gone"));
        assert!(!fake.was_saved(item.id()));

        fake.save(&item).unwrap();
        assert!(fake.was_saved(item.id()));
    }

    #[test]
    #[should_panic(expected = "expected item")]
    fn assert_saved_panics_for_unknown_id() {
        FakeItemRepository::new().assert_saved(Item::new("x", 0).id());
    }
}
