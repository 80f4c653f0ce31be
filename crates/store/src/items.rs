use std::collections::BTreeMap;
use std::sync::Mutex;

use stockroom_inventory::{Item, ItemDraft, ItemId};

/// Item persistence contract.
///
/// Each method is a single atomic storage operation; callers validate and
/// authorize before touching the store. Concurrent writes to the same id
/// are serialized by the implementation (last write wins).
pub trait ItemStore: Send + Sync {
    /// All items, ordered by id.
    fn list(&self) -> Vec<Item>;

    fn get(&self, id: ItemId) -> Option<Item>;

    /// Insert a validated draft, assigning the next id.
    fn insert(&self, draft: ItemDraft) -> Item;

    /// Replace the record's fields, keeping its id. `None` if absent.
    fn replace(&self, id: ItemId, draft: ItemDraft) -> Option<Item>;

    /// Remove the record. `false` if it did not exist.
    fn remove(&self, id: ItemId) -> bool;

    fn count(&self) -> usize;
}

#[derive(Debug)]
struct ItemTable {
    next_id: i64,
    rows: BTreeMap<ItemId, Item>,
}

/// In-memory item store for dev/test.
///
/// Id assignment and the row mutation happen under one lock, so assigned
/// ids are unique and monotonic even under concurrent inserts.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: Mutex<ItemTable>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ItemTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Vec<Item> {
        self.inner.lock().unwrap().rows.values().cloned().collect()
    }

    fn get(&self, id: ItemId) -> Option<Item> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    fn insert(&self, draft: ItemDraft) -> Item {
        let mut table = self.inner.lock().unwrap();
        let id = ItemId::new(table.next_id);
        table.next_id += 1;

        let item = Item::from_draft(id, draft);
        table.rows.insert(id, item.clone());
        item
    }

    fn replace(&self, id: ItemId, draft: ItemDraft) -> Option<Item> {
        let mut table = self.inner.lock().unwrap();
        if !table.rows.contains_key(&id) {
            return None;
        }
        let item = Item::from_draft(id, draft);
        table.rows.insert(id, item.clone());
        Some(item)
    }

    fn remove(&self, id: ItemId) -> bool {
        self.inner.lock().unwrap().rows.remove(&id).is_some()
    }

    fn count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            description: String::new(),
            quantity,
        }
    }

    #[test]
    fn insert_assigns_monotonic_unique_ids() {
        let store = InMemoryItemStore::new();
        let first = store.insert(draft("a", 1));
        let second = store.insert(draft("b", 2));

        assert_eq!(first.id, ItemId::new(1));
        assert_eq!(second.id, ItemId::new(2));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = InMemoryItemStore::new();
        store.insert(draft("a", 1));
        store.insert(draft("b", 2));

        let ids: Vec<i64> = store.list().iter().map(|i| i.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn replace_keeps_the_id_and_returns_none_for_missing() {
        let store = InMemoryItemStore::new();
        let item = store.insert(draft("a", 1));

        let updated = store.replace(item.id, draft("b", 2)).unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "b");

        assert_eq!(store.replace(ItemId::new(99), draft("c", 3)), None);
    }

    #[test]
    fn remove_is_idempotent_at_the_caller_level() {
        let store = InMemoryItemStore::new();
        let item = store.insert(draft("a", 1));

        assert!(store.remove(item.id));
        assert!(!store.remove(item.id));
        assert_eq!(store.get(item.id), None);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let store = InMemoryItemStore::new();
        let first = store.insert(draft("a", 1));
        store.remove(first.id);

        let second = store.insert(draft("b", 2));
        assert_ne!(second.id, first.id);
    }
}
