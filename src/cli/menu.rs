//! The interactive menu.
//!
//! Orders and transaction history only exist while a warehouse is open, so
//! this is the only way to use them.

use std::{fmt::Display, str::FromStr};

use dialoguer::{Input, Select};
use warehouse::{Config, Item, ItemDraft, ItemId, Warehouse};

use super::{
    render,
    terminal::{Colorize, is_narrow},
};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddItem,
    RemoveItem,
    UpdateItem,
    FindItem,
    ListItems,
    LowStock,
    ByCategory,
    SortByName,
    SortByQuantity,
    CreateOrder,
    ProcessOrder,
    OrderQueue,
    History,
    Exit,
}

impl Choice {
    /// Menu entries in display order.
    pub const ALL: [Self; 14] = [
        Self::AddItem,
        Self::RemoveItem,
        Self::UpdateItem,
        Self::FindItem,
        Self::ListItems,
        Self::LowStock,
        Self::ByCategory,
        Self::SortByName,
        Self::SortByQuantity,
        Self::CreateOrder,
        Self::ProcessOrder,
        Self::OrderQueue,
        Self::History,
        Self::Exit,
    ];

    /// The number typed to pick this entry. Exit is `0`.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Exit => 0,
            other => Self::ALL.iter().position(|c| *c == other).unwrap_or(0) + 1,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::AddItem => "Add New Item",
            Self::RemoveItem => "Remove Item",
            Self::UpdateItem => "Update Item",
            Self::FindItem => "Find Item",
            Self::ListItems => "Display All Items",
            Self::LowStock => "Display Low Stock Items",
            Self::ByCategory => "Display Items by Category",
            Self::SortByName => "Sort Items by Name",
            Self::SortByQuantity => "Sort Items by Quantity",
            Self::CreateOrder => "Create Order",
            Self::ProcessOrder => "Process Next Order",
            Self::OrderQueue => "Display Order Queue",
            Self::History => "Display Transaction History",
            Self::Exit => "Exit",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>2}. {}", self.number(), self.label())
    }
}

/// Source of field values for menu actions.
pub trait Prompt {
    /// Asks for a line of text, offering `initial` as the default.
    fn text(&mut self, label: &str, initial: Option<&str>) -> anyhow::Result<String>;

    /// Asks for a value parsed from text, offering `initial` as the default.
    fn value<T>(&mut self, label: &str, initial: Option<T>) -> anyhow::Result<T>
    where
        T: Clone + Display + FromStr,
        T::Err: Display + std::fmt::Debug;

    /// Asks for a menu entry.
    fn choice(&mut self) -> anyhow::Result<Choice>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn text(&mut self, label: &str, initial: Option<&str>) -> anyhow::Result<String> {
        let mut input = Input::<String>::new().with_prompt(label);
        if let Some(initial) = initial {
            input = input.default(initial.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn value<T>(&mut self, label: &str, initial: Option<T>) -> anyhow::Result<T>
    where
        T: Clone + Display + FromStr,
        T::Err: Display + std::fmt::Debug,
    {
        let mut input = Input::<T>::new().with_prompt(label);
        if let Some(initial) = initial {
            input = input.default(initial);
        }
        Ok(input.interact_text()?)
    }

    fn choice(&mut self) -> anyhow::Result<Choice> {
        let labels: Vec<String> = Choice::ALL.iter().map(ToString::to_string).collect();
        let index = Select::new()
            .with_prompt("Enter your choice")
            .items(&labels[..])
            .default(0)
            .interact()?;
        Ok(Choice::ALL[index])
    }
}

/// Runs the menu until the user picks Exit.
///
/// Failures of individual actions are reported and the menu carries on.
///
/// # Errors
///
/// Returns an error only if the prompt itself fails.
pub fn run(
    warehouse: &mut Warehouse,
    config: &Config,
    prompt: &mut impl Prompt,
) -> anyhow::Result<()> {
    println!("{}", "Warehouse Management System".info());
    loop {
        let choice = prompt.choice()?;
        if choice == Choice::Exit {
            println!("Thank you for using the Warehouse Management System!");
            return Ok(());
        }
        let output = execute(choice, warehouse, config, prompt)
            .unwrap_or_else(|e| format!("Error: {e:#}").error());
        println!("{}", output.trim_end());
    }
}

/// Performs one menu action and returns the text to show.
///
/// Not-found items and rejected orders are reported in the returned text.
///
/// # Errors
///
/// Returns an error if a prompt fails or the inventory file cannot be
/// written.
pub fn execute(
    choice: Choice,
    warehouse: &mut Warehouse,
    config: &Config,
    prompt: &mut impl Prompt,
) -> anyhow::Result<String> {
    let symbol = config.currency_symbol();
    let output = match choice {
        Choice::AddItem => {
            let Some(next_id) = warehouse.next_id() else {
                return Ok("No item identifiers left.".warning());
            };
            println!("{}", format!("New item will be #{next_id}").dim());
            let draft = ask_draft(prompt, None)?;
            let item = warehouse.create_item(draft)?;
            format!("Item #{} added successfully!", item.id).success()
        }
        Choice::RemoveItem => {
            let id: ItemId = prompt.value("Item ID to remove", None)?;
            if warehouse.remove_item(id)? {
                "Item removed successfully!".success()
            } else {
                not_found(id)
            }
        }
        Choice::UpdateItem => {
            let id: ItemId = prompt.value("Item ID", None)?;
            let Some(existing) = warehouse.find_item(id).cloned() else {
                return Ok(not_found(id));
            };
            let item = ask_draft(prompt, Some(&existing))?.into_item(id);
            if warehouse.update_item(item)? {
                "Item updated successfully!".success()
            } else {
                not_found(id)
            }
        }
        Choice::FindItem => {
            let id: ItemId = prompt.value("Item ID to find", None)?;
            warehouse
                .find_item(id)
                .map_or_else(|| not_found(id), |item| render::item_details(item, symbol))
        }
        Choice::ListItems => {
            let items: Vec<_> = warehouse.items().collect();
            render::item_table(&items, symbol, is_narrow())
        }
        Choice::LowStock => {
            let items: Vec<_> = warehouse.low_stock_items().collect();
            render::low_stock(&items)
        }
        Choice::ByCategory => {
            let path = prompt.text("Category", None)?;
            let items: Vec<_> = warehouse.items_in_category(&path).collect();
            render::category(&path, &items, symbol)
        }
        Choice::SortByName => render::sorted_by_name(&warehouse.sorted_by_name()),
        Choice::SortByQuantity => render::sorted_by_quantity(&warehouse.sorted_by_quantity()),
        Choice::CreateOrder => {
            let item_id: ItemId = prompt.value("Item ID", None)?;
            let quantity: u32 = prompt.value("Quantity", None)?;
            warehouse.create_order(item_id, quantity).map_or_else(
                |e| format!("Invalid order: {e}").warning(),
                |order_id| format!("Order #{order_id} created successfully!").success(),
            )
        }
        Choice::ProcessOrder => render::process_outcome(&warehouse.process_next_order()?),
        Choice::OrderQueue => render::order_queue(warehouse.order_queue()),
        Choice::History => render::history(warehouse.transaction_history(config.history_limit())),
        Choice::Exit => String::new(),
    };
    Ok(output)
}

fn not_found(id: ItemId) -> String {
    format!("Item {id} not found!").warning()
}

/// Asks for every item field, defaulting to `existing`'s values.
fn ask_draft(prompt: &mut impl Prompt, existing: Option<&Item>) -> anyhow::Result<ItemDraft> {
    let name = prompt.text("Item name", existing.map(|item| item.name.as_str()))?;
    let category = prompt.text("Category", existing.map(|item| item.category.as_str()))?;
    let quantity = prompt.value("Quantity", existing.map(|item| item.quantity))?;
    let price: f64 = prompt.value("Price", existing.map(|item| item.price))?;
    if !price.is_finite() || price < 0.0 {
        anyhow::bail!("price must be a non-negative number");
    }
    let min_stock = prompt.value("Minimum stock level", existing.map(|item| item.min_stock))?;

    Ok(ItemDraft {
        name,
        category,
        quantity,
        price,
        min_stock,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use anyhow::Context;
    use tempfile::TempDir;

    use super::*;

    /// Pre-recorded answers, consumed in order.
    #[derive(Debug, Default)]
    struct Scripted {
        answers: VecDeque<String>,
    }

    impl Scripted {
        /// Creates a prompt that replies with `answers` in order.
        fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
            }
        }

        fn next(&mut self, label: &str) -> anyhow::Result<String> {
            self.answers
                .pop_front()
                .with_context(|| format!("no answer left for '{label}'"))
        }
    }

    impl Prompt for Scripted {
        fn text(&mut self, label: &str, initial: Option<&str>) -> anyhow::Result<String> {
            let answer = self.next(label)?;
            match (answer.is_empty(), initial) {
                (true, Some(initial)) => Ok(initial.to_string()),
                _ => Ok(answer),
            }
        }

        fn value<T>(&mut self, label: &str, initial: Option<T>) -> anyhow::Result<T>
        where
            T: Clone + Display + FromStr,
            T::Err: Display + std::fmt::Debug,
        {
            let answer = self.next(label)?;
            match (answer.is_empty(), initial) {
                (true, Some(initial)) => Ok(initial),
                _ => answer
                    .trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid {label}: {e}")),
            }
        }

        fn choice(&mut self) -> anyhow::Result<Choice> {
            let answer: usize = self.value("choice", None)?;
            Choice::ALL
                .into_iter()
                .find(|choice| choice.number() == answer)
                .with_context(|| format!("Invalid choice {answer}"))
        }
    }

    fn setup() -> (TempDir, Warehouse, Config) {
        let tmp = TempDir::new().unwrap();
        let warehouse = Warehouse::open(tmp.path().join("inventory.csv")).unwrap();
        (tmp, warehouse, Config::default())
    }

    fn add(warehouse: &mut Warehouse, config: &Config, fields: [&str; 5]) -> String {
        execute(
            Choice::AddItem,
            warehouse,
            config,
            &mut Scripted::new(fields),
        )
        .unwrap()
    }

    #[test]
    fn numbering_matches_menu() {
        assert_eq!(Choice::AddItem.number(), 1);
        assert_eq!(Choice::History.number(), 13);
        assert_eq!(Choice::Exit.number(), 0);
        assert_eq!(Choice::CreateOrder.to_string(), "10. Create Order");
    }

    #[test]
    fn add_then_find() {
        let (_tmp, mut warehouse, config) = setup();
        let output = add(&mut warehouse, &config, ["Drill", "Tools/Power", "4", "89.90", "1"]);
        assert!(output.contains("Item #1 added successfully!"));

        let found = execute(
            Choice::FindItem,
            &mut warehouse,
            &config,
            &mut Scripted::new(["1"]),
        )
        .unwrap();
        assert!(found.contains("Drill"));
        assert!(found.contains("89.90"));
    }

    #[test]
    fn update_keeps_fields_left_blank() {
        let (_tmp, mut warehouse, config) = setup();
        add(&mut warehouse, &config, ["Drill", "Tools/Power", "4", "89.90", "1"]);

        let output = execute(
            Choice::UpdateItem,
            &mut warehouse,
            &config,
            &mut Scripted::new(["1", "", "", "10", "", ""]),
        )
        .unwrap();
        assert!(output.contains("Item updated successfully!"));

        let item = warehouse.find_item(1).unwrap();
        assert_eq!(item.name, "Drill");
        assert_eq!(item.category, "Tools/Power");
        assert_eq!(item.quantity, 10);
        assert_eq!(item.min_stock, 1);
    }

    #[test]
    fn missing_items_are_reported() {
        let (_tmp, mut warehouse, config) = setup();
        for choice in [Choice::RemoveItem, Choice::UpdateItem, Choice::FindItem] {
            let output =
                execute(choice, &mut warehouse, &config, &mut Scripted::new(["9"])).unwrap();
            assert!(output.contains("Item 9 not found!"), "{choice:?}: {output}");
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let (_tmp, mut warehouse, config) = setup();
        let result = execute(
            Choice::AddItem,
            &mut warehouse,
            &config,
            &mut Scripted::new(["Drill", "Tools", "1", "-3", "0"]),
        );
        assert!(result.is_err());
        assert_eq!(warehouse.items().count(), 0);
    }

    #[test]
    fn order_round_trip_through_menu() {
        let (_tmp, mut warehouse, config) = setup();
        add(&mut warehouse, &config, ["Drill", "Tools", "3", "10", "0"]);

        let created = execute(
            Choice::CreateOrder,
            &mut warehouse,
            &config,
            &mut Scripted::new(["1", "5"]),
        )
        .unwrap();
        assert!(created.contains("Order #1 created successfully!"));

        let rejected = execute(
            Choice::CreateOrder,
            &mut warehouse,
            &config,
            &mut Scripted::new(["1", "0"]),
        )
        .unwrap();
        assert!(rejected.contains("Invalid order"));

        let mut script = Scripted::default();
        let short = execute(Choice::ProcessOrder, &mut warehouse, &config, &mut script).unwrap();
        assert!(short.contains("Insufficient stock for order #1"));

        let queue = execute(Choice::OrderQueue, &mut warehouse, &config, &mut script).unwrap();
        assert!(queue.contains("Item: Drill (ID: 1)"));

        let history = execute(Choice::History, &mut warehouse, &config, &mut script).unwrap();
        assert!(history.contains("Order Created (Item ID: 1) Ordered 5 units"));
    }

    #[test]
    fn run_stops_at_exit() {
        let (_tmp, mut warehouse, config) = setup();
        let mut script = Scripted::new(["5", "6", "0", "5"]);

        run(&mut warehouse, &config, &mut script).unwrap();

        // The answer after Exit is never consumed.
        assert_eq!(script.answers.len(), 1);
    }

    #[test]
    fn add_reports_exhausted_ids_before_prompting() {
        let (_tmp, mut warehouse, config) = setup();
        warehouse
            .add_item(
                ItemDraft {
                    name: "Last".to_string(),
                    category: "X".to_string(),
                    quantity: 1,
                    price: 1.0,
                    min_stock: 0,
                }
                .into_item(ItemId::MAX),
            )
            .unwrap();

        let output = execute(
            Choice::AddItem,
            &mut warehouse,
            &config,
            &mut Scripted::default(),
        )
        .unwrap();
        assert!(output.contains("No item identifiers left."));
        assert_eq!(warehouse.items().count(), 1);
    }

    #[test]
    fn unknown_choice_is_an_error() {
        assert!(Scripted::new(["42"]).choice().is_err());
    }
}
