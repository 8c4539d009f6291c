//! Queue of pending fulfilment orders.

use std::{collections::VecDeque, fmt};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::item::ItemId;

/// Identifier of a queued order.
pub type OrderId = u32;

/// Lifecycle state of an [`Order`].
///
/// Fulfilled orders leave the queue, so every order in it is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// Waiting to be processed.
    #[default]
    Pending,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
        }
    }
}

/// A request to take stock of an item out of the warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique, increasing order number.
    pub id: OrderId,
    /// The item to take stock from.
    pub item_id: ItemId,
    /// Units requested.
    pub quantity: u32,
    /// Current status.
    pub status: OrderStatus,
    /// When the order was created.
    pub created: DateTime<Utc>,
}

/// Reasons an order cannot be created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The referenced item does not exist.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),
    /// Orders must request at least one unit.
    #[error("order quantity must be positive")]
    InvalidQuantity,
}

/// FIFO queue of orders.
///
/// Orders that cannot be fulfilled are pushed back onto the tail with
/// [`OrderQueue::requeue`], so an order's position changes over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
    next_id: OrderId,
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self {
            orders: VecDeque::new(),
            next_id: 1,
        }
    }
}

impl OrderQueue {
    /// Queues a new order and returns its identifier.
    ///
    /// The caller is responsible for checking that the item exists.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidQuantity`] if `quantity` is zero.
    pub fn enqueue(&mut self, item_id: ItemId, quantity: u32) -> Result<OrderId, OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.orders.push_back(Order {
            id,
            item_id,
            quantity,
            status: OrderStatus::Pending,
            created: Utc::now(),
        });
        Ok(id)
    }

    /// Removes and returns the order at the head of the queue.
    pub fn dequeue(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Puts an order back at the tail of the queue.
    pub fn requeue(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Orders in processing order, without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &Order> + Clone {
        self.orders.iter()
    }

    /// Number of queued orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether there is nothing to process.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
