use clap::Parser;
use tracing::instrument;
use warehouse::{Item, ItemId, Warehouse};

use super::terminal::Colorize;

/// Change the fields of an existing item. Omitted fields keep their value.
#[derive(Debug, Parser)]
pub struct Update {
    /// The item's numeric ID
    id: ItemId,

    /// New display name
    #[arg(long)]
    name: Option<String>,

    /// New category path
    #[arg(long)]
    category: Option<String>,

    /// New stock count
    #[arg(long, short)]
    quantity: Option<u32>,

    /// New unit price
    #[arg(long, short, value_parser = super::parse_price)]
    price: Option<f64>,

    /// New minimum stock level
    #[arg(long, short)]
    min_stock: Option<u32>,
}

impl Update {
    #[instrument(level = "debug", skip(warehouse))]
    pub fn run(self, warehouse: &mut Warehouse) -> anyhow::Result<()> {
        let Some(existing) = warehouse.find_item(self.id) else {
            eprintln!("{}", format!("Item {} not found!", self.id).error());
            std::process::exit(1);
        };

        let item = self.apply(existing.clone());
        warehouse.update_item(item)?;
        println!("{}", "Item updated successfully!".success());
        Ok(())
    }

    fn apply(self, item: Item) -> Item {
        Item {
            id: item.id,
            name: self.name.unwrap_or(item.name),
            category: self.category.unwrap_or(item.category),
            quantity: self.quantity.unwrap_or(item.quantity),
            price: self.price.unwrap_or(item.price),
            min_stock: self.min_stock.unwrap_or(item.min_stock),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use warehouse::ItemDraft;

    use super::*;

    #[test]
    fn only_given_fields_change() {
        let tmp = TempDir::new().unwrap();
        let mut warehouse = Warehouse::open(tmp.path().join("inventory.csv")).unwrap();
        warehouse
            .create_item(ItemDraft {
                name: "Drill".to_string(),
                category: "Tools/Power".to_string(),
                quantity: 4,
                price: 89.9,
                min_stock: 1,
            })
            .unwrap();

        Update::parse_from(["update", "1", "--quantity", "12", "--name", "Cordless Drill"])
            .run(&mut warehouse)
            .unwrap();

        let item = warehouse.find_item(1).unwrap();
        assert_eq!(item.name, "Cordless Drill");
        assert_eq!(item.quantity, 12);
        assert_eq!(item.category, "Tools/Power");
        assert_eq!(item.min_stock, 1);
    }
}
