//! Text rendering of warehouse state.
//!
//! Every function returns the rendered text rather than printing it, so the
//! menu and the subcommands share one layout.

use warehouse::{Item, ProcessOutcome, QueuedOrder, Transaction};

use super::terminal::Colorize;

const RULE_WIDTH: usize = 80;

/// Formats a price with two decimals and the configured currency symbol.
#[must_use]
pub fn price(symbol: &str, value: f64) -> String {
    format!("{symbol}{value:.2}")
}

/// The full item table, or a compact one-line-per-item list for narrow
/// terminals.
#[must_use]
pub fn item_table(items: &[&Item], symbol: &str, narrow: bool) -> String {
    if items.is_empty() {
        return "No items in stock.".dim();
    }

    if narrow {
        return items
            .iter()
            .map(|item| {
                let line = format!(
                    "#{} {} [{}] qty {} @ {}",
                    item.id,
                    item.name,
                    item.category,
                    item.quantity,
                    price(symbol, item.price)
                );
                if item.is_low_stock() { line.warning() } else { line }
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let header = format!(
        "{:>5} | {:>20} | {:>15} | {:>10} | {:>10} | {:>15}",
        "ID", "Name", "Category", "Quantity", "Price", "Min Stock"
    );
    let rows = items.iter().map(|item| {
        format!(
            "{:>5} | {:>20} | {:>15} | {:>10} | {:>10} | {:>15}",
            item.id,
            item.name,
            item.category,
            item.quantity,
            price(symbol, item.price),
            item.min_stock
        )
    });

    [header, "-".repeat(RULE_WIDTH)]
        .into_iter()
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every field of one item.
#[must_use]
pub fn item_details(item: &Item, symbol: &str) -> String {
    let low = if item.is_low_stock() {
        format!(" {}", "(low stock)".warning())
    } else {
        String::new()
    };

    [
        format!("Item #{}", item.id).info(),
        format!("  Name:            {}", item.name),
        format!("  Category:        {}", item.category),
        format!("  Quantity:        {}", item.quantity),
        format!("  Price:           {}", price(symbol, item.price)),
        format!("  Min Stock Level: {}{low}", item.min_stock),
    ]
    .join("\n")
}

/// The low-stock report.
#[must_use]
pub fn low_stock(items: &[&Item]) -> String {
    if items.is_empty() {
        return "No items are low on stock.".success();
    }

    let rows = items.iter().map(|item| {
        format!(
            "ID: {}, Name: {}, Current Stock: {}, Min Stock: {}",
            item.id, item.name, item.quantity, item.min_stock
        )
    });
    std::iter::once("Low Stock Items:".warning())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Items filed under one literal category path.
#[must_use]
pub fn category(path: &str, items: &[&Item], symbol: &str) -> String {
    if items.is_empty() {
        return format!("No items found in category: {path}").dim();
    }

    let rows = items.iter().map(|item| {
        format!(
            "ID: {}, Name: {}, Quantity: {}, Price: {}",
            item.id,
            item.name,
            item.quantity,
            price(symbol, item.price)
        )
    });
    std::iter::once(format!("Items in category '{path}':"))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Items ordered by name.
#[must_use]
pub fn sorted_by_name(items: &[&Item]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "ID: {}, Name: {}, Category: {}, Quantity: {}",
                item.id, item.name, item.category, item.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Items ordered by quantity.
#[must_use]
pub fn sorted_by_quantity(items: &[&Item]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "ID: {}, Name: {}, Quantity: {}",
                item.id, item.name, item.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The result of processing the head of the order queue.
#[must_use]
pub fn process_outcome(outcome: &ProcessOutcome) -> String {
    match outcome {
        ProcessOutcome::Empty => "No orders to process!".dim(),
        ProcessOutcome::Processed { order, remaining } => format!(
            "Order #{} processed successfully! {remaining} units left.",
            order.id
        )
        .success(),
        ProcessOutcome::InsufficientStock { order, available } => format!(
            "Insufficient stock for order #{} ({} requested, {available} available). Moved to the back of the queue.",
            order.id, order.quantity
        )
        .warning(),
        ProcessOutcome::Dropped(order) => format!(
            "Order #{} discarded: item {} no longer exists.",
            order.id, order.item_id
        )
        .dim(),
    }
}

/// The pending orders, in processing order.
#[must_use]
pub fn order_queue<'a>(orders: impl IntoIterator<Item = QueuedOrder<'a>>) -> String {
    let entries: Vec<String> = orders
        .into_iter()
        .map(|QueuedOrder { order, item_name }| {
            [
                format!("Order #{}:", order.id),
                format!("  Item: {item_name} (ID: {})", order.item_id),
                format!("  Quantity: {}", order.quantity),
                format!("  Status: {}", order.status),
                format!(
                    "  Created: {}",
                    order.created.format("%Y-%m-%d %H:%M:%S UTC")
                ),
            ]
            .join("\n")
        })
        .collect();

    if entries.is_empty() {
        return "No pending orders.".dim();
    }
    [vec!["Pending Orders:".info(), "-".repeat(50)], entries]
        .concat()
        .join("\n")
}

/// Recent transactions, most recent first.
#[must_use]
pub fn history<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> String {
    let entries: Vec<String> = transactions.into_iter().map(ToString::to_string).collect();
    let body = if entries.is_empty() {
        "No transactions recorded yet.".dim()
    } else {
        entries.join("\n")
    };
    [
        "Recent Transaction History:".info(),
        "-".repeat(50),
        body,
    ]
    .join("\n")
}
