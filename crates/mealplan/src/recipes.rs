//! Recipe lookup for dishes on a menu.

use std::sync::Arc;

use crate::catalog::{DishId, RecipeDetails};
use crate::error::{MenuError, Result};
use crate::repository::RecipeRepository;

/// Looks up full recipes (steps and ingredients in recipe order).
pub struct RecipeBook {
    recipes: Arc<dyn RecipeRepository>,
}

impl RecipeBook {
    pub fn new(recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { recipes }
    }

    /// Recipe for `dish_id`, or [`MenuError::DishNotFound`].
    pub fn details(&self, dish_id: DishId) -> Result<RecipeDetails> {
        self.recipes
            .recipe_details(dish_id)?
            .ok_or(MenuError::DishNotFound(dish_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCatalog;

    #[test]
    fn test_unknown_dish() {
        let catalog = InMemoryCatalog::from_parts(vec![], vec![], vec![]).unwrap();
        let book = RecipeBook::new(Arc::new(catalog));
        assert!(matches!(book.details(3), Err(MenuError::DishNotFound(3))));
    }
}
