//! A file-backed warehouse.
//!
//! The [`Warehouse`] ties the in-memory domain types together and rewrites the
//! inventory file after every change to item state. Order queue and
//! transaction history live only as long as the process.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    domain::{
        Action, CategoryIndex, Inventory, Item, ItemDraft, ItemId, Order, OrderError, OrderId,
        OrderQueue, Transaction, TransactionLog,
    },
    storage::csv::{self, LoadError},
};

/// Name shown for queued orders whose item no longer exists.
pub const UNKNOWN_ITEM: &str = "Unknown";

/// The warehouse state engine.
///
/// Owns the item store, the category index, the transaction log and the
/// order queue, and keeps them consistent with each other.
#[derive(Debug)]
pub struct Warehouse {
    /// The inventory file.
    path: PathBuf,
    inventory: Inventory,
    categories: CategoryIndex,
    history: TransactionLog,
    orders: OrderQueue,
}

/// Result of [`Warehouse::process_next_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The queue was empty.
    Empty,
    /// The order was fulfilled and has left the queue.
    Processed {
        /// The fulfilled order.
        order: Order,
        /// Stock left after fulfilment.
        remaining: u32,
    },
    /// There was not enough stock. The order was moved to the tail of the
    /// queue.
    InsufficientStock {
        /// The order that could not be fulfilled.
        order: Order,
        /// Stock currently available.
        available: u32,
    },
    /// The order's item no longer exists. The order was discarded.
    Dropped(Order),
}

/// Reasons [`Warehouse::create_item`] can fail.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// An item holds the highest possible identifier, so there is no next one.
    #[error("no item identifiers left")]
    IdsExhausted,
    /// The inventory file could not be written.
    #[error("failed to write inventory file")]
    Io(#[from] io::Error),
}

/// A queued order together with the name of the item it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedOrder<'a> {
    /// The order.
    pub order: &'a Order,
    /// The item's name, or [`UNKNOWN_ITEM`] if it has been removed.
    pub item_name: &'a str,
}

impl Warehouse {
    /// Opens the warehouse persisted at `path`.
    ///
    /// A missing file gives an empty warehouse. The category index starts
    /// empty; only items added through this warehouse are filed in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    #[instrument(level = "debug")]
    pub fn open(path: PathBuf) -> Result<Self, LoadError> {
        let items = csv::load(&path)?;
        Ok(Self {
            path,
            inventory: Inventory::from_items(items),
            categories: CategoryIndex::default(),
            history: TransactionLog::default(),
            orders: OrderQueue::default(),
        })
    }

    /// The inventory file this warehouse writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The identifier the next created item will receive, or `None` if the
    /// identifier space is used up.
    #[must_use]
    pub const fn next_id(&self) -> Option<ItemId> {
        self.inventory.next_id()
    }

    /// Creates an item from a draft, assigning the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::IdsExhausted`], without changing anything, if
    /// an item already holds the highest identifier. Returns
    /// [`CreateError::Io`] if the inventory file cannot be written; the item
    /// has already been added in memory when this happens.
    pub fn create_item(&mut self, draft: ItemDraft) -> Result<Item, CreateError> {
        let id = self.next_id().ok_or(CreateError::IdsExhausted)?;
        let item = draft.into_item(id);
        self.add_item(item.clone())?;
        Ok(item)
    }

    /// Adds an item with an explicit identifier, replacing any existing item
    /// with the same identifier.
    ///
    /// The next identifier becomes `item.id + 1`, even if that is lower than
    /// before.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory file cannot be written. The item has
    /// already been added in memory when this happens.
    #[instrument(level = "debug", skip(self), fields(id = item.id))]
    pub fn add_item(&mut self, item: Item) -> io::Result<()> {
        let detail = format!("Added {} to category {}", item.name, item.category);
        self.categories.file(&item.category, item.id);
        self.history.record(Action::Add, item.id, detail);
        tracing::info!("Added item {item}");
        self.inventory.add(item);
        self.flush()
    }

    /// Removes an item.
    ///
    /// Returns `false` if there was no such item. Queued orders and history
    /// entries that refer to the item are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory file cannot be written.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_item(&mut self, id: ItemId) -> io::Result<bool> {
        let Some(item) = self.inventory.remove(id) else {
            return Ok(false);
        };
        self.history
            .record(Action::Remove, id, format!("Removed {}", item.name));
        tracing::info!("Removed item {item}");
        self.flush()?;
        Ok(true)
    }

    /// Replaces an existing item.
    ///
    /// Returns `false` if no item with the same identifier exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory file cannot be written.
    #[instrument(level = "debug", skip(self), fields(id = item.id))]
    pub fn update_item(&mut self, item: Item) -> io::Result<bool> {
        if !self.inventory.contains(item.id) {
            return Ok(false);
        }
        let (id, detail) = (item.id, format!("Updated {}", item.name));
        self.inventory.update(item);
        self.history.record(Action::Update, id, detail);
        self.flush()?;
        Ok(true)
    }

    /// Looks up an item.
    #[must_use]
    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.get(id)
    }

    /// All items, ascending by identifier.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.inventory.all()
    }

    /// Items whose category is exactly `path`.
    ///
    /// Items in sub-categories of `path` are not included.
    pub fn items_in_category<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Item> {
        self.inventory.by_category(path)
    }

    /// Items at or below their minimum stock level, ascending by identifier.
    pub fn low_stock_items(&self) -> impl Iterator<Item = &Item> {
        self.items().filter(|item| item.is_low_stock())
    }

    /// All items ordered by name.
    #[must_use]
    pub fn sorted_by_name(&self) -> Vec<&Item> {
        let mut items: Vec<_> = self.items().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// All items ordered by quantity, smallest first.
    #[must_use]
    pub fn sorted_by_quantity(&self) -> Vec<&Item> {
        let mut items: Vec<_> = self.items().collect();
        items.sort_by_key(|item| item.quantity);
        items
    }

    /// Queues an order for `quantity` units of an item.
    ///
    /// # Errors
    ///
    /// Returns an error, without changing any state, if the item does not
    /// exist or `quantity` is zero.
    #[instrument(level = "debug", skip(self))]
    pub fn create_order(&mut self, item_id: ItemId, quantity: u32) -> Result<OrderId, OrderError> {
        if !self.inventory.contains(item_id) {
            return Err(OrderError::ItemNotFound(item_id));
        }
        let order_id = self.orders.enqueue(item_id, quantity)?;
        self.history.record(
            Action::OrderCreated,
            item_id,
            format!("Ordered {quantity} units"),
        );
        tracing::info!("Queued order #{order_id} for {quantity} of item #{item_id}");
        Ok(order_id)
    }

    /// Takes the order at the head of the queue and tries to fulfil it.
    ///
    /// Orders for removed items are discarded without a history entry. Orders
    /// that cannot be fulfilled go back to the tail of the queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the order was fulfilled but the inventory file
    /// cannot be written.
    #[instrument(level = "debug", skip(self))]
    pub fn process_next_order(&mut self) -> io::Result<ProcessOutcome> {
        let Some(order) = self.orders.dequeue() else {
            return Ok(ProcessOutcome::Empty);
        };

        let Some(item) = self.inventory.find(order.item_id) else {
            tracing::debug!(
                "Dropping order #{}: item #{} no longer exists",
                order.id,
                order.item_id
            );
            return Ok(ProcessOutcome::Dropped(order));
        };

        if item.quantity < order.quantity {
            let available = item.quantity;
            tracing::debug!(
                "Order #{} needs {} of item #{}, only {available} in stock",
                order.id,
                order.quantity,
                order.item_id
            );
            self.orders.requeue(order.clone());
            return Ok(ProcessOutcome::InsufficientStock { order, available });
        }

        item.quantity -= order.quantity;
        let remaining = item.quantity;
        self.history.record(
            Action::OrderProcessed,
            order.item_id,
            format!("Processed order #{} for {} units", order.id, order.quantity),
        );
        tracing::info!("Processed order #{}", order.id);
        self.flush()?;

        Ok(ProcessOutcome::Processed { order, remaining })
    }

    /// Up to `limit` transactions, most recent first.
    pub fn transaction_history(
        &self,
        limit: usize,
    ) -> impl Iterator<Item = &Transaction> + Clone {
        self.history.recent(limit)
    }

    /// Queued orders in processing order, with their item names resolved.
    pub fn order_queue(&self) -> impl Iterator<Item = QueuedOrder<'_>> + Clone {
        self.orders.iter().map(move |order| QueuedOrder {
            order,
            item_name: self
                .inventory
                .get(order.item_id)
                .map_or(UNKNOWN_ITEM, |item| item.name.as_str()),
        })
    }

    /// The category tree built from items added during this session.
    #[must_use]
    pub const fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Rewrites the inventory file from the current item set.
    fn flush(&self) -> io::Result<()> {
        csv::save(&self.path, self.inventory.all()).inspect_err(|e| {
            tracing::warn!("Failed to write {}: {e}", self.path.display());
        })?;
        tracing::debug!(
            "Wrote {} items to {}",
            self.inventory.len(),
            self.path.display()
        );
        Ok(())
    }
}
