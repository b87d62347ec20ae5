//! Shopping-list command - aggregate ingredients for chosen dishes.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use mealplan::{DishId, IngredientAggregator, ShoppingList};

use super::load_catalog;

pub fn run(
    catalog: PathBuf,
    dishes: Vec<DishId>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Arc::new(load_catalog(&catalog)?);

    let aggregator = IngredientAggregator::new(catalog);
    let list = aggregator.aggregate(&dishes)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        print_list(&list);
    }

    Ok(())
}

/// Print headings in aisle order with aligned lines.
pub(crate) fn print_list(list: &ShoppingList) {
    println!(
        "{} ({} items)",
        "Shopping list".cyan().bold(),
        list.total_items().to_string().white().bold()
    );

    for (heading, items) in list.iter() {
        println!();
        println!("{}", heading.yellow().bold());
        for item in items {
            let quantity = if item.measurement.is_empty() {
                item.amount.clone()
            } else {
                format!("{} {}", item.amount, item.measurement)
            };
            println!("  {:28} {}", item.name, quantity.white());
        }
    }
}
