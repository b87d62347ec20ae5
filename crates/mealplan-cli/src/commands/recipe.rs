//! Recipe command - print steps and ingredients for one dish.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use mealplan::{DishId, RecipeBook};

use super::load_catalog;

pub fn run(
    catalog: PathBuf,
    dish: DishId,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = RecipeBook::new(Arc::new(load_catalog(&catalog)?));
    let recipe = book.details(dish)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    println!("{}", recipe.title.cyan().bold());
    if !recipe.description.is_empty() {
        println!("{}", recipe.description.dimmed());
    }
    if let Some(url) = &recipe.image_url {
        println!("{}", url.blue().underline());
    }

    println!();
    println!("{}", "Ingredients".yellow().bold());
    for ingredient in &recipe.ingredients {
        println!(
            "  - {} {} {}",
            ingredient.amount.to_string().white(),
            ingredient.measurement,
            ingredient.name
        );
    }

    println!();
    println!("{}", "Steps".yellow().bold());
    for step in &recipe.steps {
        println!("  {}. {}", step.index, step.description);
    }

    Ok(())
}
