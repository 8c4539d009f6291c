use std::fmt;

use serde::Serialize;

/// Identifier of a stocked item.
pub type ItemId = u32;

/// A stocked good.
///
/// Items are keyed by [`ItemId`] in the [`Inventory`](crate::domain::Inventory)
/// and mutated in place by updates and order fulfilment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Unique key of the item.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// `/`-delimited category path, e.g. `Electronics/Phones`.
    pub category: String,
    /// Units currently in stock.
    pub quantity: u32,
    /// Unit price.
    pub price: f64,
    /// Stock level at or below which the item counts as low on stock.
    pub min_stock: u32,
}

impl Item {
    /// Whether the item is at or below its minimum stock level.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

/// The caller-supplied fields of a new item.
///
/// The identifier is assigned by the warehouse when the draft is added.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    /// Display name.
    pub name: String,
    /// `/`-delimited category path.
    pub category: String,
    /// Units in stock.
    pub quantity: u32,
    /// Unit price.
    pub price: f64,
    /// Minimum stock level.
    pub min_stock: u32,
}

impl ItemDraft {
    /// Turns the draft into an item with the given identifier.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> Item {
        let Self {
            name,
            category,
            quantity,
            price,
            min_stock,
        } = self;
        Item {
            id,
            name,
            category,
            quantity,
            price,
            min_stock,
        }
    }
}
