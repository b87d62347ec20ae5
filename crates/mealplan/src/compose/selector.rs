//! Picking one dish for a template step.

use crate::catalog::{CookingTier, CourseType, Dish};
use crate::error::Result;
use crate::repository::{DishQuery, DishRepository};

use super::context::{CompositionContext, Selection};

/// Whether a selection may repeat a main-ingredient category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diversity {
    /// Try without repeats first, then fall back to [`Diversity::Relaxed`].
    Enforced,
    /// Accept the first dish not already on the menu.
    Relaxed,
}

/// Picks dishes from a [`DishRepository`] under the menu's constraints.
pub struct DishSelector<'a> {
    repository: &'a dyn DishRepository,
}

impl<'a> DishSelector<'a> {
    pub fn new(repository: &'a dyn DishRepository) -> Self {
        Self { repository }
    }

    /// Select one dish of any of `course_types` for the running menu.
    ///
    /// Returns `Ok(None)` when nothing eligible exists even with diversity
    /// relaxed. The winner's main-ingredient categories are recorded in the
    /// context; appending it to the menu is left to the caller.
    ///
    /// Issues at most two dish queries: a strict pass and, if that finds
    /// nothing, one relaxed pass over a fresh query.
    pub fn select(
        &self,
        ctx: &mut CompositionContext,
        course_types: &[CourseType],
        max_tier: CookingTier,
        diversity: Diversity,
    ) -> Result<Option<Selection>> {
        let query = DishQuery {
            course_types: course_types.to_vec(),
            meal_category: ctx.meal_category,
            dinner_time: ctx.dinner_time.catalog_slot(),
            max_cooking_tier: max_tier,
            season: ctx.season,
            cuisines: ctx.accepted_cuisines().clone(),
        };

        let passes: &[bool] = match diversity {
            Diversity::Enforced => &[false, true],
            Diversity::Relaxed => &[true],
        };

        for &relaxed in passes {
            let candidates = self.repository.query_dishes(&query)?;
            tracing::debug!(
                course_types = ?course_types,
                candidates = candidates.len(),
                relaxed,
                "selection pass"
            );

            if let Some(selection) = self.first_eligible(ctx, candidates, relaxed)? {
                ctx.used_categories_mut().record(&selection.main_categories);
                return Ok(Some(selection));
            }

            if !relaxed {
                tracing::debug!(course_types = ?course_types, "no diverse candidate, relaxing");
            }
        }

        Ok(None)
    }

    fn first_eligible(
        &self,
        ctx: &CompositionContext,
        candidates: Vec<Dish>,
        relaxed: bool,
    ) -> Result<Option<Selection>> {
        for dish in candidates {
            if ctx.contains_dish(dish.id) {
                continue;
            }

            let main_categories = self.repository.main_ingredient_categories(dish.id)?;
            if !relaxed && ctx.used_categories().overlaps(&main_categories) {
                continue;
            }

            return Ok(Some(Selection {
                dish,
                main_categories,
                diversity_relaxed: relaxed,
            }));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::catalog::{
        Cuisine, DinnerTime, DishId, Ingredient, MealCategory, RawAmount, Season,
        SeasonAvailability,
    };
    use crate::error::MenuError;
    use crate::repository::InMemoryCatalog;

    fn dish(id: DishId, course_type: CourseType) -> Dish {
        Dish {
            id,
            title: format!("Dish {}", id),
            description: String::new(),
            course_type,
            meal_categories: vec![MealCategory::Weeknight],
            dinner_times: vec![DinnerTime::Tomorrow],
            cooking_time: CookingTier::QUICK,
            season: SeasonAvailability::AllSeasons,
            cuisine: Cuisine::Universal,
            side_dish: false,
            image_url: None,
        }
    }

    fn main_ingredient(dish_id: DishId, category: &str) -> Ingredient {
        Ingredient {
            dish_id,
            index: 0,
            name: category.to_string(),
            amount: RawAmount::Number(1.0),
            measurement: String::new(),
            category: category.to_string(),
            is_main: true,
        }
    }

    fn context(dinner_time: DinnerTime) -> CompositionContext {
        CompositionContext::new(
            MealCategory::Weeknight,
            dinner_time,
            CookingTier::QUICK,
            Season::Spring,
            ["european".to_string()].into(),
        )
    }

    /// Counts queries and can be told to fail.
    struct CountingRepository {
        inner: InMemoryCatalog,
        queries: AtomicUsize,
        fail: bool,
    }

    impl DishRepository for CountingRepository {
        fn query_dishes(&self, query: &DishQuery) -> Result<Vec<Dish>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(MenuError::Repository("connection refused".to_string()));
            }
            self.inner.query_dishes(query)
        }

        fn main_ingredient_categories(&self, dish_id: DishId) -> Result<BTreeSet<String>> {
            self.inner.main_ingredient_categories(dish_id)
        }
    }

    fn counting(dishes: Vec<Dish>, ingredients: Vec<Ingredient>, fail: bool) -> CountingRepository {
        CountingRepository {
            inner: InMemoryCatalog::from_parts(dishes, ingredients, vec![]).unwrap(),
            queries: AtomicUsize::new(0),
            fail,
        }
    }

    #[test]
    fn test_later_matches_tomorrow_dishes() {
        let repo = counting(vec![dish(1, CourseType::Soup)], vec![], false);
        let selector = DishSelector::new(&repo);
        let mut ctx = context(DinnerTime::Later);

        let picked = selector
            .select(&mut ctx, &[CourseType::Soup], CookingTier::QUICK, Diversity::Enforced)
            .unwrap();
        assert_eq!(picked.unwrap().dish.id, 1);
    }

    #[test]
    fn test_strict_pass_skips_repeated_category() {
        let repo = counting(
            vec![dish(1, CourseType::MainDish), dish(2, CourseType::Soup), dish(3, CourseType::Soup)],
            vec![
                main_ingredient(1, "meat"),
                main_ingredient(2, "meat"),
                main_ingredient(3, "fish"),
            ],
            false,
        );
        let selector = DishSelector::new(&repo);
        let mut ctx = context(DinnerTime::Tomorrow);

        let main = selector
            .select(&mut ctx, &[CourseType::MainDish], CookingTier::QUICK, Diversity::Enforced)
            .unwrap()
            .unwrap();
        ctx.push(main);

        let soup = selector
            .select(&mut ctx, &[CourseType::Soup], CookingTier::QUICK, Diversity::Enforced)
            .unwrap()
            .unwrap();
        assert_eq!(soup.dish.id, 3);
        assert!(!soup.diversity_relaxed);
        assert_eq!(ctx.used_categories().count("fish"), 1);
    }

    #[test]
    fn test_relaxes_when_only_repeats_remain() {
        let repo = counting(
            vec![dish(1, CourseType::MainDish), dish(2, CourseType::Soup)],
            vec![main_ingredient(1, "meat"), main_ingredient(2, "meat")],
            false,
        );
        let selector = DishSelector::new(&repo);
        let mut ctx = context(DinnerTime::Tomorrow);

        let main = selector
            .select(&mut ctx, &[CourseType::MainDish], CookingTier::QUICK, Diversity::Enforced)
            .unwrap()
            .unwrap();
        ctx.push(main);

        let soup = selector
            .select(&mut ctx, &[CourseType::Soup], CookingTier::QUICK, Diversity::Enforced)
            .unwrap()
            .unwrap();
        assert_eq!(soup.dish.id, 2);
        assert!(soup.diversity_relaxed);
        assert_eq!(ctx.used_categories().count("meat"), 2);
    }

    #[test]
    fn test_never_picks_dish_twice() {
        let repo = counting(vec![dish(1, CourseType::Salad)], vec![], false);
        let selector = DishSelector::new(&repo);
        let mut ctx = context(DinnerTime::Tomorrow);

        let first = selector
            .select(&mut ctx, &[CourseType::Salad], CookingTier::QUICK, Diversity::Enforced)
            .unwrap()
            .unwrap();
        ctx.push(first);

        let second = selector
            .select(&mut ctx, &[CourseType::Salad], CookingTier::QUICK, Diversity::Enforced)
            .unwrap();
        assert!(second.is_none());
    }

    #[test]
    fn test_not_found_uses_at_most_two_queries() {
        let repo = counting(vec![dish(1, CourseType::Salad)], vec![], false);
        let selector = DishSelector::new(&repo);
        let mut ctx = context(DinnerTime::Tomorrow);

        let picked = selector
            .select(&mut ctx, &[CourseType::Dessert], CookingTier::QUICK, Diversity::Enforced)
            .unwrap();
        assert!(picked.is_none());
        assert_eq!(repo.queries.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_relaxed_request_is_single_pass() {
        let repo = counting(vec![], vec![], false);
        let selector = DishSelector::new(&repo);
        let mut ctx = context(DinnerTime::Tomorrow);

        let picked = selector
            .select(&mut ctx, &[CourseType::Soup], CookingTier::QUICK, Diversity::Relaxed)
            .unwrap();
        assert!(picked.is_none());
        assert_eq!(repo.queries.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_repository_failure_propagates() {
        let repo = counting(vec![dish(1, CourseType::Soup)], vec![], true);
        let selector = DishSelector::new(&repo);
        let mut ctx = context(DinnerTime::Tomorrow);

        let err = selector
            .select(&mut ctx, &[CourseType::Soup], CookingTier::QUICK, Diversity::Enforced)
            .unwrap_err();
        assert!(matches!(err, MenuError::Repository(_)));
        assert_eq!(repo.queries.load(Ordering::SeqCst), 1);
    }
}
