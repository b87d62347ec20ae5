//! Repository traits consumed by the engines.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    CookingTier, CourseType, DinnerTime, Dish, DishId, IngredientRow, MealCategory, RecipeDetails,
    Season,
};
use crate::error::Result;

/// Filter for one candidate lookup.
///
/// `dinner_time` is already resolved to the catalog slot (see
/// [`DinnerTime::catalog_slot`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishQuery {
    /// Acceptable course types. A dish matches if its type is any of them.
    pub course_types: Vec<CourseType>,
    pub meal_category: MealCategory,
    pub dinner_time: DinnerTime,
    /// Inclusive upper bound on the dish's cooking tier.
    pub max_cooking_tier: CookingTier,
    pub season: Season,
    /// Cuisines still acceptable for the menu being composed.
    pub cuisines: BTreeSet<String>,
}

impl DishQuery {
    /// Whether `dish` satisfies every filter of this query.
    ///
    /// Repositories backed by a query language apply the same conditions
    /// natively; in-process repositories can call this directly.
    pub fn matches(&self, dish: &Dish) -> bool {
        self.course_types.contains(&dish.course_type)
            && dish.suits(self.meal_category)
            && dish.cooks_at(self.dinner_time)
            && dish.cooking_time <= self.max_cooking_tier
            && dish.season.includes(self.season)
            && dish.cuisine.is_compatible_with(&self.cuisines)
    }
}

/// Read access to dishes.
///
/// Implementations must be thread-safe (Send + Sync) so concurrent
/// compositions can share one catalog.
pub trait DishRepository: Send + Sync {
    /// All dishes matching `query`, in random order.
    ///
    /// The order is the only tie-break the selector uses, so repeated
    /// calls should not return candidates in a fixed order.
    fn query_dishes(&self, query: &DishQuery) -> Result<Vec<Dish>>;

    /// Categories of the ingredients flagged as defining the dish.
    fn main_ingredient_categories(&self, dish_id: DishId) -> Result<BTreeSet<String>>;
}

/// Read access to ingredient lines.
pub trait IngredientRepository: Send + Sync {
    /// Ingredient rows for the given dishes.
    ///
    /// Rows may be pre-grouped by (name, measurement, category) with summed
    /// amounts, or one row per recipe line.
    fn ingredients_for_dishes(&self, dish_ids: &[DishId]) -> Result<Vec<IngredientRow>>;
}

/// Read access to full recipes.
pub trait RecipeRepository: Send + Sync {
    /// Recipe for `dish_id`, or `None` if the dish does not exist.
    fn recipe_details(&self, dish_id: DishId) -> Result<Option<RecipeDetails>>;
}
