//! Plain-text Warehouse Inventory Management
//!
//! Items are stored in a flat comma-separated file. Orders and transaction
//! history are kept in memory for the lifetime of a [`Warehouse`].

pub mod domain;
pub use domain::{
    Action, Config, Item, ItemDraft, ItemId, Order, OrderError, OrderId, OrderStatus, Transaction,
};

/// Filesystem storage and the file-backed warehouse.
pub mod storage;
pub use storage::{CreateError, LoadError, ProcessOutcome, QueuedOrder, Warehouse};
