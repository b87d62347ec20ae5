//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mealplan::{DinnerTime, DishId, MealCategory, Season};

/// mealplan: compose menus and build shopping lists from a dish catalog
#[derive(Parser)]
#[command(name = "mealplan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose a menu for an occasion
    Compose {
        /// Path to the catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Meal category (weeknight, family, guest, festive, romantic)
        #[arg(long)]
        category: MealCategory,

        /// Dinner time (today, tomorrow, later)
        #[arg(long, default_value = "today")]
        time: DinnerTime,

        /// Cooking-time tier, 1 (quick) to 4 (all evening)
        #[arg(long, default_value = "2")]
        tier: u8,

        /// Seed for reproducible candidate ordering
        #[arg(long)]
        seed: Option<u64>,

        /// Composer configuration file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Override the season instead of reading the clock
        #[arg(long)]
        season: Option<Season>,

        /// Also print the shopping list for the composed menu
        #[arg(long)]
        shopping_list: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a shopping list for a set of dishes
    ShoppingList {
        /// Path to the catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Dish ids to shop for (repeat or comma-separate)
        #[arg(long = "dish", value_name = "ID", required = true, value_delimiter = ',')]
        dishes: Vec<DishId>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the recipe for a dish
    Recipe {
        /// Path to the catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Dish id
        #[arg(long = "dish", value_name = "ID")]
        dish: DishId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
