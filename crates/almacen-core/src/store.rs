//! # Inventory Store
//!
//! The in-memory store for catalog items.
//!
//! This module implements the `ItemStore` trait over a `BTreeMap`, so
//! listing is deterministic (ordered by id) regardless of insertion order.
//! The store is purely synchronous; shared access and locking belong to
//! the app layer.

use crate::item::{Item, ItemDraft, ItemId};
use std::collections::BTreeMap;
use thiserror::Error;

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors produced by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item exists under the given id.
    #[error("item not found: {0}")]
    NotFound(ItemId),
}

// =============================================================================
// ITEMSTORE TRAIT
// =============================================================================

/// The ItemStore trait defines the CRUD operations over a catalog.
///
/// All operations are total over arbitrary id strings: an id that was
/// never minted behaves exactly like a deleted one.
pub trait ItemStore {
    /// Create a new item from a draft. Mints a fresh id and returns the
    /// stored item.
    fn create(&mut self, draft: ItemDraft) -> Item;

    /// List all items in deterministic order (sorted by id).
    fn list(&self) -> Vec<Item>;

    /// Look up an item by id.
    fn get(&self, id: &ItemId) -> Option<&Item>;

    /// Replace every field of an existing item except its id.
    fn update(&mut self, id: &ItemId, draft: ItemDraft) -> Result<Item, StoreError>;

    /// Remove an item by id, returning the removed item.
    fn remove(&mut self, id: &ItemId) -> Result<Item, StoreError>;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Check whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// INVENTORY IMPLEMENTATION
// =============================================================================

/// The in-memory inventory.
///
/// Uses `BTreeMap` for deterministic ordering. A real deployment would
/// put a persistent database behind the `ItemStore` seam instead.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Item storage: ItemId -> Item
    items: BTreeMap<ItemId, Item>,
}

impl Inventory {
    /// Create a new empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item under a caller-chosen id, replacing any previous
    /// entry. Used by tests and import paths that need fixed ids.
    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// Check if an id is present.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }
}

impl ItemStore for Inventory {
    fn create(&mut self, draft: ItemDraft) -> Item {
        let id = ItemId::generate();
        let item = Item::from_draft(id.clone(), draft);
        self.items.insert(id, item.clone());
        item
    }

    fn list(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    fn update(&mut self, id: &ItemId, draft: ItemDraft) -> Result<Item, StoreError> {
        if !self.items.contains_key(id) {
            return Err(StoreError::NotFound(id.clone()));
        }
        let item = Item::from_draft(id.clone(), draft);
        self.items.insert(id.clone(), item.clone());
        Ok(item)
    }

    fn remove(&mut self, id: &ItemId) -> Result<Item, StoreError> {
        self.items
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> ItemDraft {
        ItemDraft::new(name, price)
    }

    #[test]
    fn create_stores_and_returns_item() {
        let mut inv = Inventory::new();
        let item = inv.create(draft("Widget", 9.99).with_description("shiny"));

        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get(&item.id), Some(&item));
        assert_eq!(item.name, "Widget");
    }

    #[test]
    fn create_mints_distinct_ids() {
        let mut inv = Inventory::new();
        let a = inv.create(draft("A", 1.0));
        let b = inv.create(draft("B", 2.0));

        assert_ne!(a.id, b.id);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let inv = Inventory::new();
        assert_eq!(inv.get(&ItemId::new("no-such-id")), None);
    }

    #[test]
    fn list_is_sorted_by_id() {
        let mut inv = Inventory::new();
        // Fixed ids inserted out of order
        inv.insert(Item::from_draft(ItemId::new("c"), draft("third", 3.0)));
        inv.insert(Item::from_draft(ItemId::new("a"), draft("first", 1.0)));
        inv.insert(Item::from_draft(ItemId::new("b"), draft("second", 2.0)));

        let ids: Vec<_> = inv.list().into_iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec![ItemId::new("a"), ItemId::new("b"), ItemId::new("c")]
        );
    }

    #[test]
    fn update_replaces_fields_and_preserves_id() {
        let mut inv = Inventory::new();
        let created = inv.create(draft("Old name", 1.0).with_tax(0.1));

        let updated = inv
            .update(&created.id, draft("New name", 2.0))
            .expect("update of existing item must succeed");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New name");
        assert_eq!(updated.price, 2.0);
        // Omitted optional fields are cleared, not merged
        assert_eq!(updated.tax, None);
        assert_eq!(inv.get(&created.id), Some(&updated));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn update_unknown_id_fails_and_leaves_store_unchanged() {
        let mut inv = Inventory::new();
        let existing = inv.create(draft("Keep me", 5.0));

        let missing = ItemId::new("missing");
        let result = inv.update(&missing, draft("Ghost", 0.0));

        assert_eq!(result, Err(StoreError::NotFound(missing)));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get(&existing.id), Some(&existing));
    }

    #[test]
    fn remove_deletes_and_returns_item() {
        let mut inv = Inventory::new();
        let item = inv.create(draft("Disposable", 0.99));

        let removed = inv.remove(&item.id).expect("remove must succeed");
        assert_eq!(removed, item);
        assert!(inv.is_empty());
        assert!(!inv.contains(&item.id));
        // A second remove now fails
        assert_eq!(inv.remove(&item.id), Err(StoreError::NotFound(item.id)));
    }

    #[test]
    fn malformed_id_behaves_like_absent_id() {
        let mut inv = Inventory::new();
        let bogus = ItemId::new("definitely ~not~ a uuid");

        assert_eq!(inv.get(&bogus), None);
        assert!(matches!(
            inv.update(&bogus, draft("x", 1.0)),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(inv.remove(&bogus), Err(StoreError::NotFound(_))));
    }
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    /// One step of a randomized CRUD workload.
    #[derive(Debug, Clone)]
    enum Op {
        Create(String, f64),
        UpdateExisting(usize, String),
        RemoveExisting(usize),
        RemoveMissing(String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            ("[a-z]{1,8}", 0.0f64..1000.0).prop_map(|(n, p)| Op::Create(n, p)),
            (any::<usize>(), "[a-z]{1,8}").prop_map(|(i, n)| Op::UpdateExisting(i, n)),
            any::<usize>().prop_map(Op::RemoveExisting),
            "[a-z]{1,8}".prop_map(Op::RemoveMissing),
        ]
    }

    proptest! {
        /// Store length always matches the number of live ids, and every
        /// live id resolves to an item carrying that id.
        #[test]
        fn length_bookkeeping_is_consistent(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut inv = Inventory::new();
            let mut live: Vec<ItemId> = Vec::new();

            for op in ops {
                match op {
                    Op::Create(name, price) => {
                        let item = inv.create(ItemDraft::new(name, price));
                        live.push(item.id);
                    }
                    Op::UpdateExisting(idx, name) => {
                        if !live.is_empty() {
                            let id = &live[idx % live.len()];
                            let updated = inv.update(id, ItemDraft::new(name, 1.0));
                            prop_assert!(updated.is_ok());
                        }
                    }
                    Op::RemoveExisting(idx) => {
                        if !live.is_empty() {
                            let id = live.remove(idx % live.len());
                            prop_assert!(inv.remove(&id).is_ok());
                        }
                    }
                    Op::RemoveMissing(name) => {
                        // Random strings are never minted ids
                        let id = ItemId::new(format!("missing-{name}"));
                        prop_assert!(inv.remove(&id).is_err());
                    }
                }

                prop_assert_eq!(inv.len(), live.len());
            }

            for id in &live {
                let item = inv.get(id);
                prop_assert!(item.is_some_and(|i| &i.id == id));
            }
        }
    }
}
