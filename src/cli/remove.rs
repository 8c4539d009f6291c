use clap::Parser;
use tracing::instrument;
use warehouse::{ItemId, Warehouse};

use super::terminal::Colorize;

/// Remove an item from the inventory.
#[derive(Debug, Parser)]
pub struct Remove {
    /// The item's numeric ID
    id: ItemId,
}

impl Remove {
    #[instrument(level = "debug", skip(warehouse))]
    pub fn run(self, warehouse: &mut Warehouse) -> anyhow::Result<()> {
        if warehouse.remove_item(self.id)? {
            println!("{}", "Item removed successfully!".success());
        } else {
            eprintln!("{}", format!("Item {} not found!", self.id).error());
            std::process::exit(1);
        }
        Ok(())
    }
}
