//! Ingredient rows and recipe detail projections.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dish::DishId;
use crate::error::{MenuError, Result};

/// Quantity as stored in the catalog: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Numeric value, or `DataIntegrity` if the stored value is not a finite number.
    pub fn value(&self) -> Result<f64> {
        let value = match self {
            RawAmount::Number(n) => *n,
            RawAmount::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                MenuError::DataIntegrity(format!("amount '{}' is not numeric", text))
            })?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(MenuError::DataIntegrity(format!(
                "amount '{}' is not a finite number",
                self
            )))
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Number(n) => write!(f, "{}", n),
            RawAmount::Text(t) => f.write_str(t),
        }
    }
}

/// One ingredient line of a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub dish_id: DishId,

    /// Position in the recipe's ingredient list.
    #[serde(default)]
    pub index: u32,

    pub name: String,

    pub amount: RawAmount,

    /// Measurement unit; empty for countable items ("2 eggs").
    #[serde(default)]
    pub measurement: String,

    /// Key into the grocery-heading table.
    pub category: String,

    /// Whether this ingredient defines the dish's dominant ingredient.
    #[serde(default)]
    pub is_main: bool,
}

/// Ingredient row as handed to the aggregator.
///
/// Repositories may return rows already summed per (name, measurement,
/// category) or one row per recipe line; the aggregator handles both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    pub name: String,
    pub amount: RawAmount,
    pub measurement: String,
    pub category: String,
}

impl From<&Ingredient> for IngredientRow {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            amount: ingredient.amount.clone(),
            measurement: ingredient.measurement.clone(),
            category: ingredient.category.clone(),
        }
    }
}

/// One preparation step of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub dish_id: DishId,
    pub index: u32,
    pub description: String,
}

/// Step line in [`RecipeDetails`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLine {
    pub index: u32,
    pub description: String,
}

/// Ingredient line in [`RecipeDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub amount: RawAmount,
    pub measurement: String,
}

/// Everything needed to cook one dish, in recipe order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub id: DishId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub steps: Vec<StepLine>,
    pub ingredients: Vec<IngredientLine>,
}
