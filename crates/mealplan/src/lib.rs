//! mealplan: menu composition and shopping-list aggregation.
//!
//! Two engines sit on top of a read-only dish catalog:
//!
//! - **Menu composition** assembles a multi-course menu for an occasion,
//!   a dinner-time slot and a cooking-time budget, keeping dominant
//!   ingredients diverse and cuisines consistent across courses.
//! - **Ingredient aggregation** merges the ingredients of the chosen dishes
//!   into a shopping list grouped by grocery heading.
//!
//! Both engines are synchronous and keep no state between calls. The
//! catalog is reached through the traits in [`repository`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mealplan::{IngredientAggregator, InMemoryCatalog, MenuComposer, MenuRequest};
//!
//! let catalog = Arc::new(InMemoryCatalog::load("catalog.json").unwrap());
//!
//! let composer = MenuComposer::new(catalog.clone());
//! let menu = composer
//!     .compose(&MenuRequest::parse("weeknight", "today", 1).unwrap())
//!     .unwrap();
//!
//! let aggregator = IngredientAggregator::new(catalog);
//! let list = aggregator.aggregate(&menu.dish_ids()).unwrap();
//! for (heading, items) in list.iter() {
//!     println!("{} ({} items)", heading, items.len());
//! }
//! ```

pub mod catalog;
pub mod compose;
pub mod config;
pub mod error;
pub mod repository;
pub mod shopping;

mod recipes;

pub use catalog::{
    CookingTier, CourseType, Cuisine, DinnerTime, Dish, DishId, Ingredient, MealCategory,
    RecipeDetails, Season,
};
pub use compose::{ComposedMenu, Course, MenuComposer, MenuRequest};
pub use config::ComposerConfig;
pub use error::{MenuError, Result};
pub use recipes::RecipeBook;
pub use repository::{DishRepository, InMemoryCatalog, IngredientRepository, RecipeRepository};
pub use shopping::{AggregatedIngredient, IngredientAggregator, ShoppingList};
