//! Catalog data model: dishes, ingredients and recipe steps.
//!
//! Catalog records are read-only inputs. The engines never mutate them and
//! keep no state about them between calls.

mod dish;
mod ingredient;
mod types;

pub use dish::{ALL_SEASONS, Cuisine, Dish, DishId, SeasonAvailability, UNIVERSAL};
pub use ingredient::{
    Ingredient, IngredientLine, IngredientRow, RawAmount, RecipeDetails, RecipeStep, StepLine,
};
pub use types::{CookingTier, CourseType, DinnerTime, MealCategory, Season};
