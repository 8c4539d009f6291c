use clap::Parser;
use tracing::instrument;
use warehouse::{Config, ItemId, Warehouse};

use super::{render, terminal::Colorize};

/// Display every field of one item.
#[derive(Debug, Parser)]
pub struct Show {
    /// The item's numeric ID
    id: ItemId,

    /// Print the item as JSON
    #[arg(long)]
    json: bool,
}

impl Show {
    #[instrument(level = "debug", skip(warehouse, config))]
    pub fn run(self, warehouse: &Warehouse, config: &Config) -> anyhow::Result<()> {
        let Some(item) = warehouse.find_item(self.id) else {
            eprintln!("{}", format!("Item {} not found!", self.id).error());
            std::process::exit(1);
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(item)?);
        } else {
            println!("{}", render::item_details(item, config.currency_symbol()));
        }
        Ok(())
    }
}
