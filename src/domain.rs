//! Domain models for warehouse management.
//!
//! These types hold the warehouse state in memory and know nothing about the
//! filesystem: items and the store that keys them, the category tree, the
//! transaction log and the order queue.

/// Stocked items.
pub mod item;
pub use item::{Item, ItemDraft, ItemId};

mod inventory;
pub use inventory::Inventory;

pub mod category;
pub use category::{CategoryIndex, CategoryNode};

pub mod transaction;
pub use transaction::{Action, Transaction, TransactionLog};

pub mod order;
pub use order::{Order, OrderError, OrderId, OrderQueue, OrderStatus};

mod config;
pub use config::Config;
