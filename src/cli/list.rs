use clap::Parser;
use tracing::instrument;
use warehouse::{Config, Item, Warehouse};

use super::{render, terminal::is_narrow};

/// List stocked items, optionally filtered and sorted.
#[derive(Debug, Parser)]
pub struct List {
    /// Only items at or below their minimum stock level
    #[arg(long)]
    low_stock: bool,

    /// Only items filed under exactly this category path
    #[arg(long, value_name = "PATH")]
    category: Option<String>,

    /// Sort order
    #[arg(long, value_name = "KEY", default_value = "id")]
    sort: SortKey,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum SortKey {
    #[default]
    Id,
    Name,
    Quantity,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(warehouse, config))]
    pub fn run(self, warehouse: &Warehouse, config: &Config) -> anyhow::Result<()> {
        let items = self.select(warehouse);

        match self.output {
            OutputFormat::Table => {
                println!(
                    "{}",
                    render::item_table(&items, config.currency_symbol(), is_narrow())
                );
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
        }
        Ok(())
    }

    fn select<'a>(&self, warehouse: &'a Warehouse) -> Vec<&'a Item> {
        let mut items = match self.sort {
            SortKey::Id => warehouse.items().collect(),
            SortKey::Name => warehouse.sorted_by_name(),
            SortKey::Quantity => warehouse.sorted_by_quantity(),
        };
        if self.low_stock {
            items.retain(|item| item.is_low_stock());
        }
        if let Some(path) = &self.category {
            items.retain(|item| &item.category == path);
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use warehouse::ItemDraft;

    use super::*;

    fn stocked() -> (TempDir, Warehouse) {
        let tmp = TempDir::new().unwrap();
        let mut warehouse = Warehouse::open(tmp.path().join("inventory.csv")).unwrap();
        for (name, category, quantity) in [
            ("Saw", "Tools/Hand", 1),
            ("Drill", "Tools/Power", 9),
            ("Awl", "Tools/Hand", 4),
        ] {
            warehouse
                .create_item(ItemDraft {
                    name: name.to_string(),
                    category: category.to_string(),
                    quantity,
                    price: 1.0,
                    min_stock: 2,
                })
                .unwrap();
        }
        (tmp, warehouse)
    }

    fn names(list: &List, warehouse: &Warehouse) -> Vec<String> {
        list.select(warehouse)
            .into_iter()
            .map(|item| item.name.clone())
            .collect()
    }

    #[test]
    fn filters_combine_with_sorting() {
        let (_tmp, warehouse) = stocked();

        let by_name = List::parse_from(["list", "--sort", "name", "--category", "Tools/Hand"]);
        assert_eq!(names(&by_name, &warehouse), ["Awl", "Saw"]);

        let low = List::parse_from(["list", "--low-stock"]);
        assert_eq!(names(&low, &warehouse), ["Saw"]);

        let by_quantity = List::parse_from(["list", "--sort", "quantity"]);
        assert_eq!(names(&by_quantity, &warehouse), ["Saw", "Awl", "Drill"]);
    }

    #[test]
    fn json_output_serializes_items() {
        let (_tmp, warehouse) = stocked();
        let items = List::parse_from(["list"]).select(&warehouse);

        let json: serde_json::Value = serde_json::to_value(&items).unwrap();
        assert_eq!(json[1]["name"], "Drill");
        assert_eq!(json[1]["category"], "Tools/Power");
        assert_eq!(json[1]["id"], 2);
    }
}
