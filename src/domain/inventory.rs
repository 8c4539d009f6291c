//! In-memory store of stocked items.
//!
//! The [`Inventory`] knows nothing about the filesystem. It keys items by
//! [`ItemId`] and hands them out in ascending identifier order, which keeps
//! displays and the persisted file deterministic.

use std::collections::BTreeMap;

use crate::domain::item::{Item, ItemId};

/// Keyed store of items plus the counter used to assign new identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    items: BTreeMap<ItemId, Item>,
    /// `None` once an item holds [`ItemId::MAX`].
    next_id: Option<ItemId>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

impl Inventory {
    /// Builds an inventory from previously persisted items.
    ///
    /// The next identifier is one past the highest loaded identifier.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items: BTreeMap<_, _> = items.into_iter().map(|item| (item.id, item)).collect();
        let next_id = items.last_key_value().map_or(Some(1), |(id, _)| id.checked_add(1));
        Self { items, next_id }
    }

    /// The identifier the next drafted item will receive.
    ///
    /// Returns `None` when every identifier above the last added one is
    /// taken, i.e. an item holds [`ItemId::MAX`].
    #[must_use]
    pub const fn next_id(&self) -> Option<ItemId> {
        self.next_id
    }

    /// Inserts or overwrites an item.
    ///
    /// The identifier counter is set to one past `item.id`, even when that is
    /// lower than the current counter.
    pub fn add(&mut self, item: Item) {
        self.next_id = item.id.checked_add(1);
        self.items.insert(item.id, item);
    }

    /// Removes an item, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }

    /// Replaces an existing item.
    ///
    /// Returns `false` (and leaves the store untouched) if no item with the
    /// same identifier exists.
    pub fn update(&mut self, item: Item) -> bool {
        self.items
            .get_mut(&item.id)
            .map(|existing| *existing = item)
            .is_some()
    }

    /// Looks up an item.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Looks up an item for in-place mutation.
    pub fn find(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    /// Whether an item with the given identifier exists.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// All items, ascending by identifier.
    pub fn all(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Items whose category is exactly `path`.
    ///
    /// This is a literal comparison: `A/B` does not match items in `A/B/C`.
    pub fn by_category<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Item> {
        self.all().filter(move |item| item.category == path)
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
