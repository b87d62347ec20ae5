//! Per-run composition state and the resulting menu.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{CookingTier, DinnerTime, Dish, DishId, MealCategory, Season};
use crate::error::{MenuError, Result};

use super::cuisine::CuisineTracker;

/// Multiset of main-ingredient categories contributed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedCategories {
    counts: BTreeMap<String, usize>,
}

impl UsedCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// True if any of `categories` was already contributed.
    pub fn overlaps(&self, categories: &BTreeSet<String>) -> bool {
        categories.iter().any(|c| self.count(c) > 0)
    }

    pub fn record(&mut self, categories: &BTreeSet<String>) {
        for category in categories {
            *self.counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
}

/// A dish picked by the selector, with what was learned while picking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub dish: Dish,
    pub main_categories: BTreeSet<String>,
    /// The pick came from the relaxed pass and may repeat a category.
    pub diversity_relaxed: bool,
}

/// One course of a composed menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub dish: Dish,
    /// Main-ingredient categories of the dish.
    pub main_categories: BTreeSet<String>,
    pub diversity_relaxed: bool,
    /// Acceptable cuisines at the moment the dish was picked.
    pub accepted_cuisines: BTreeSet<String>,
}

/// Mutable state threaded through the template steps of one composition.
///
/// Created per [`MenuComposer::compose`](super::MenuComposer::compose) call
/// and dropped on return, so concurrent compositions share nothing.
#[derive(Debug, Clone)]
pub struct CompositionContext {
    pub meal_category: MealCategory,
    pub dinner_time: DinnerTime,
    pub cooking_tier: CookingTier,
    pub season: Season,
    cuisines: CuisineTracker,
    used_categories: UsedCategories,
    courses: Vec<Course>,
}

impl CompositionContext {
    pub fn new(
        meal_category: MealCategory,
        dinner_time: DinnerTime,
        cooking_tier: CookingTier,
        season: Season,
        cuisine_universe: BTreeSet<String>,
    ) -> Self {
        Self {
            meal_category,
            dinner_time,
            cooking_tier,
            season,
            cuisines: CuisineTracker::new(cuisine_universe),
            used_categories: UsedCategories::new(),
            courses: Vec::new(),
        }
    }

    pub fn accepted_cuisines(&self) -> &BTreeSet<String> {
        self.cuisines.accepted()
    }

    pub fn used_categories(&self) -> &UsedCategories {
        &self.used_categories
    }

    pub(crate) fn used_categories_mut(&mut self) -> &mut UsedCategories {
        &mut self.used_categories
    }

    pub fn contains_dish(&self, id: DishId) -> bool {
        self.courses.iter().any(|c| c.dish.id == id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Append a selected dish and narrow the acceptable cuisines.
    pub fn push(&mut self, selection: Selection) -> &Course {
        let accepted_cuisines = self.cuisines.accepted().clone();
        self.cuisines.record(&selection.dish.cuisine);
        self.courses.push(Course {
            dish: selection.dish,
            main_categories: selection.main_categories,
            diversity_relaxed: selection.diversity_relaxed,
            accepted_cuisines,
        });
        &self.courses[self.courses.len() - 1]
    }

    /// Finish the run, ordering courses by serving precedence.
    pub fn into_menu(self) -> ComposedMenu {
        let mut courses = self.courses;
        courses.sort_by_key(|c| c.dish.course_type.precedence());
        ComposedMenu { courses }
    }
}

/// Menu produced by one composition, in serving order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedMenu {
    courses: Vec<Course>,
}

impl ComposedMenu {
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        self.courses.iter().map(|c| &c.dish)
    }

    pub fn dish_ids(&self) -> Vec<DishId> {
        self.dishes().map(|d| d.id).collect()
    }

    pub fn into_dishes(self) -> Vec<Dish> {
        self.courses.into_iter().map(|c| c.dish).collect()
    }

    /// The dishes, or [`MenuError::EmptyMenu`] if nothing matched at all.
    pub fn require_dishes(self) -> Result<Vec<Dish>> {
        if self.is_empty() {
            return Err(MenuError::EmptyMenu);
        }
        Ok(self.into_dishes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CourseType, Cuisine, SeasonAvailability};

    fn dish(id: DishId, course_type: CourseType, cuisine: Cuisine) -> Dish {
        Dish {
            id,
            title: format!("Dish {}", id),
            description: String::new(),
            course_type,
            meal_categories: vec![MealCategory::Family],
            dinner_times: vec![DinnerTime::Today],
            cooking_time: CookingTier::QUICK,
            season: SeasonAvailability::AllSeasons,
            cuisine,
            side_dish: false,
            image_url: None,
        }
    }

    fn context() -> CompositionContext {
        CompositionContext::new(
            MealCategory::Family,
            DinnerTime::Today,
            CookingTier::QUICK,
            Season::Winter,
            ["european", "asian"].iter().map(|s| s.to_string()).collect(),
        )
    }

    fn selection(dish: Dish) -> Selection {
        Selection {
            dish,
            main_categories: BTreeSet::new(),
            diversity_relaxed: false,
        }
    }

    #[test]
    fn test_used_categories_multiset() {
        let mut used = UsedCategories::new();
        let meat: BTreeSet<String> = ["meat".to_string()].into();
        used.record(&meat);
        used.record(&meat);
        assert_eq!(used.count("meat"), 2);
        assert!(used.overlaps(&meat));
        assert!(!used.overlaps(&["fish".to_string()].into()));
    }

    #[test]
    fn test_push_records_cuisines_before_narrowing() {
        let mut ctx = context();
        let course = ctx.push(selection(dish(1, CourseType::Soup, Cuisine::named(["asian"]))));
        assert_eq!(course.accepted_cuisines.len(), 2);
        assert_eq!(ctx.accepted_cuisines().len(), 1);
        assert!(ctx.contains_dish(1));
    }

    #[test]
    fn test_menu_sorted_by_precedence() {
        let mut ctx = context();
        ctx.push(selection(dish(1, CourseType::Dessert, Cuisine::Universal)));
        ctx.push(selection(dish(2, CourseType::MainDish, Cuisine::Universal)));
        ctx.push(selection(dish(3, CourseType::Other("tapas".to_string()), Cuisine::Universal)));
        ctx.push(selection(dish(4, CourseType::Appetizer, Cuisine::Universal)));

        let menu = ctx.into_menu();
        assert_eq!(menu.dish_ids(), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_empty_menu_reported() {
        let menu = context().into_menu();
        assert!(matches!(menu.require_dishes(), Err(MenuError::EmptyMenu)));
    }
}
