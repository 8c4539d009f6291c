//! Append-only history of state-changing actions.

use std::fmt;

use chrono::{DateTime, Local, Utc};

use crate::domain::item::ItemId;

/// The kind of action a [`Transaction`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// An item was added.
    Add,
    /// An item was removed.
    Remove,
    /// An item's fields were replaced.
    Update,
    /// An order was queued.
    OrderCreated,
    /// An order was fulfilled.
    OrderProcessed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Add => "Add",
            Self::Remove => "Remove",
            Self::Update => "Update",
            Self::OrderCreated => "Order Created",
            Self::OrderProcessed => "Order Processed",
        };
        f.write_str(label)
    }
}

/// One entry in the [`TransactionLog`].
///
/// The item identifier may refer to an item that has since been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    pub action: Action,
    /// The item the action affected.
    pub item_id: ItemId,
    /// Free-text description.
    pub detail: String,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Item ID: {}) {}",
            self.timestamp
                .with_timezone(&Local)
                .format("%a %b %e %H:%M:%S %Y"),
            self.action,
            self.item_id,
            self.detail
        )
    }
}

/// Append-only log of transactions, read most-recent-first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    /// Records an action at the current time.
    pub fn record(&mut self, action: Action, item_id: ItemId, detail: impl Into<String>) {
        self.push(Transaction {
            timestamp: Utc::now(),
            action,
            item_id,
            detail: detail.into(),
        });
    }

    /// Appends an already-timestamped transaction.
    pub fn push(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// Up to `limit` entries, most recent first.
    ///
    /// Reading never changes the log; the returned iterator can be cloned to
    /// walk the same entries again.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Transaction> + Clone {
        self.entries.iter().rev().take(limit)
    }

    /// Total number of recorded transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
