use clap::Parser;
use tracing::instrument;
use warehouse::{ItemDraft, Warehouse};

use super::terminal::Colorize;

/// Add a new item. It is given the next free ID.
#[derive(Debug, Parser)]
pub struct Add {
    /// Display name
    name: String,

    /// Slash-separated category path, e.g. `Electronics/Phones`
    category: String,

    /// Units in stock
    #[arg(long, short, default_value_t = 0)]
    quantity: u32,

    /// Unit price
    #[arg(long, short, default_value_t = 0.0, value_parser = super::parse_price)]
    price: f64,

    /// Stock level at or below which the item counts as low
    #[arg(long, short, default_value_t = 0)]
    min_stock: u32,
}

impl Add {
    #[instrument(level = "debug", skip(warehouse))]
    pub fn run(self, warehouse: &mut Warehouse) -> anyhow::Result<()> {
        let item = warehouse.create_item(ItemDraft {
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            min_stock: self.min_stock,
        })?;
        println!("{}", format!("Item #{} added successfully!", item.id).success());
        Ok(())
    }
}
