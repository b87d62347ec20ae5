//! In-memory catalog implementing every repository trait.

use std::collections::{BTreeSet, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::{
    Dish, DishId, Ingredient, IngredientLine, IngredientRow, RecipeDetails, RecipeStep, StepLine,
};
use crate::error::{MenuError, Result};

use super::provider::{DishQuery, DishRepository, IngredientRepository, RecipeRepository};

/// Catalog held entirely in memory.
///
/// Candidate order is shuffled on every query. With a seed the sequence of
/// shuffles is reproducible for a given sequence of queries.
#[derive(Debug)]
pub struct InMemoryCatalog {
    dishes: Vec<Dish>,
    ingredients: Vec<Ingredient>,
    steps: Vec<RecipeStep>,
    seed: Option<u64>,
    queries: AtomicU64,
}

impl InMemoryCatalog {
    /// Build a catalog, checking ids and references.
    pub fn from_parts(
        dishes: Vec<Dish>,
        ingredients: Vec<Ingredient>,
        steps: Vec<RecipeStep>,
    ) -> Result<Self> {
        let mut ids = HashSet::with_capacity(dishes.len());
        for dish in &dishes {
            if !ids.insert(dish.id) {
                return Err(MenuError::DataIntegrity(format!(
                    "duplicate dish id {}",
                    dish.id
                )));
            }
        }

        for ingredient in &ingredients {
            if !ids.contains(&ingredient.dish_id) {
                return Err(MenuError::DataIntegrity(format!(
                    "ingredient '{}' references unknown dish {}",
                    ingredient.name, ingredient.dish_id
                )));
            }
        }

        for step in &steps {
            if !ids.contains(&step.dish_id) {
                return Err(MenuError::DataIntegrity(format!(
                    "step {} references unknown dish {}",
                    step.index, step.dish_id
                )));
            }
        }

        Ok(Self {
            dishes,
            ingredients,
            steps,
            seed: None,
            queries: AtomicU64::new(0),
        })
    }

    /// Make candidate shuffling reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[RecipeStep] {
        &self.steps
    }

    pub fn dish(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    fn rng(&self) -> fastrand::Rng {
        let query = self.queries.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(query)),
            None => fastrand::Rng::new(),
        }
    }
}

impl DishRepository for InMemoryCatalog {
    fn query_dishes(&self, query: &DishQuery) -> Result<Vec<Dish>> {
        let mut candidates: Vec<Dish> = self
            .dishes
            .iter()
            .filter(|dish| query.matches(dish))
            .cloned()
            .collect();
        self.rng().shuffle(&mut candidates);
        Ok(candidates)
    }

    fn main_ingredient_categories(&self, dish_id: DishId) -> Result<BTreeSet<String>> {
        Ok(self
            .ingredients
            .iter()
            .filter(|i| i.dish_id == dish_id && i.is_main)
            .map(|i| i.category.trim().to_lowercase())
            .collect())
    }
}

impl IngredientRepository for InMemoryCatalog {
    fn ingredients_for_dishes(&self, dish_ids: &[DishId]) -> Result<Vec<IngredientRow>> {
        let wanted: HashSet<DishId> = dish_ids.iter().copied().collect();
        Ok(self
            .ingredients
            .iter()
            .filter(|i| wanted.contains(&i.dish_id))
            .map(IngredientRow::from)
            .collect())
    }
}

impl RecipeRepository for InMemoryCatalog {
    fn recipe_details(&self, dish_id: DishId) -> Result<Option<RecipeDetails>> {
        let Some(dish) = self.dish(dish_id) else {
            return Ok(None);
        };

        let mut steps: Vec<&RecipeStep> =
            self.steps.iter().filter(|s| s.dish_id == dish_id).collect();
        steps.sort_by_key(|s| s.index);

        let mut ingredients: Vec<&Ingredient> = self
            .ingredients
            .iter()
            .filter(|i| i.dish_id == dish_id)
            .collect();
        ingredients.sort_by_key(|i| i.index);

        Ok(Some(RecipeDetails {
            id: dish.id,
            title: dish.title.clone(),
            description: dish.description.clone(),
            image_url: dish.image_url.clone(),
            steps: steps
                .into_iter()
                .map(|s| StepLine {
                    index: s.index,
                    description: s.description.clone(),
                })
                .collect(),
            ingredients: ingredients
                .into_iter()
                .map(|i| IngredientLine {
                    name: i.name.clone(),
                    amount: i.amount.clone(),
                    measurement: i.measurement.clone(),
                })
                .collect(),
        }))
    }
}
