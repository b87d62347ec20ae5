//! Course templates for each meal category.
//!
//! A template is a fixed sequence of "add one dish of these course types"
//! steps. Optional steps depend on the cooking tier, on the dinner-time
//! slot, and on whether the primary dish just added wants a side dish.
//! A step that finds nothing is skipped and the template carries on.

use crate::catalog::CourseType::{
    Appetizer, Dessert, HotStarter, MainDish, Salad, SideDish, Soup, Starter,
};
use crate::catalog::{CookingTier, CourseType, DinnerTime, MealCategory};
use crate::error::Result;

use super::context::CompositionContext;
use super::selector::{Diversity, DishSelector};

/// Executes template steps against one composition context.
pub(crate) struct TemplateRun<'a> {
    selector: DishSelector<'a>,
    ctx: CompositionContext,
}

impl<'a> TemplateRun<'a> {
    pub(crate) fn new(selector: DishSelector<'a>, ctx: CompositionContext) -> Self {
        Self { selector, ctx }
    }

    pub(crate) fn into_context(self) -> CompositionContext {
        self.ctx
    }

    fn tier(&self) -> u8 {
        self.ctx.cooking_tier.get()
    }

    fn dinner_time(&self) -> DinnerTime {
        self.ctx.dinner_time
    }

    /// Add one dish at the requested cooking tier.
    fn add(&mut self, course_types: &[CourseType]) -> Result<bool> {
        let tier = self.ctx.cooking_tier;
        self.add_at(course_types, tier)
    }

    /// Add one dish with an explicit cooking-tier ceiling.
    ///
    /// Returns true only if a dish was added and it wants a side dish.
    fn add_at(&mut self, course_types: &[CourseType], tier: CookingTier) -> Result<bool> {
        Ok(self.add_course(course_types, tier)?.unwrap_or(false))
    }

    fn add_course(
        &mut self,
        course_types: &[CourseType],
        tier: CookingTier,
    ) -> Result<Option<bool>> {
        let selection = self
            .selector
            .select(&mut self.ctx, course_types, tier, Diversity::Enforced)?;

        match selection {
            Some(selection) => {
                let course = self.ctx.push(selection);
                tracing::debug!(
                    dish = course.dish.id,
                    course_type = %course.dish.course_type,
                    relaxed = course.diversity_relaxed,
                    "course added"
                );
                Ok(Some(course.dish.side_dish))
            }
            None => {
                tracing::debug!(course_types = ?course_types, tier = %tier, "step skipped");
                Ok(None)
            }
        }
    }

    /// Add a primary dish, then a side dish if that dish calls for one.
    fn add_with_side(&mut self, course_types: &[CourseType]) -> Result<()> {
        if self.add(course_types)? {
            self.add(&[SideDish])?;
        }
        Ok(())
    }
}

/// Run the template for `category`.
pub(crate) fn apply(category: MealCategory, run: &mut TemplateRun<'_>) -> Result<()> {
    match category {
        MealCategory::Weeknight => weeknight(run),
        MealCategory::Family => family(run),
        MealCategory::Guest => guest(run),
        MealCategory::Festive => festive(run),
        MealCategory::Romantic => romantic(run),
    }
}

fn weeknight(run: &mut TemplateRun<'_>) -> Result<()> {
    run.add_with_side(&[MainDish])?;

    match run.tier() {
        1 => {
            run.add(&[Salad, Soup])?;
        }
        2 => {
            run.add(&[Salad])?;
            run.add(&[Soup])?;
        }
        _ => {}
    }
    Ok(())
}

fn family(run: &mut TemplateRun<'_>) -> Result<()> {
    run.add_with_side(&[MainDish])?;
    run.add(&[Salad])?;
    run.add(&[Soup])?;

    match run.tier() {
        3 => {
            run.add(&[Starter, Dessert])?;
        }
        4 => {
            run.add(&[Starter])?;
            run.add(&[Dessert])?;
        }
        _ => {}
    }
    Ok(())
}

fn guest(run: &mut TemplateRun<'_>) -> Result<()> {
    run.add_with_side(&[Soup, MainDish])?;
    run.add(&[Salad])?;
    run.add_at(&[Salad], CookingTier::QUICK)?;
    run.add(&[Starter])?;

    if run.tier() >= 3 {
        run.add(&[Dessert])?;

        if run.dinner_time() != DinnerTime::Today {
            run.add(&[Salad, Starter])?;

            if run.dinner_time() == DinnerTime::Later {
                run.add(&[HotStarter, Starter])?;
            }
        }
    }
    Ok(())
}

fn festive(run: &mut TemplateRun<'_>) -> Result<()> {
    run.add_with_side(&[MainDish])?;

    for _ in 0..2 {
        run.add_at(&[Appetizer], CookingTier::QUICK)?;
        run.add_at(&[Salad], CookingTier::QUICK)?;
    }

    run.add(&[Appetizer])?;
    run.add(&[Salad])?;
    run.add(&[Dessert])?;

    if run.tier() == 4 {
        run.add(&[Appetizer, Starter])?;
        run.add(&[Starter, HotStarter])?;
    }

    if run.dinner_time() == DinnerTime::Later {
        run.add(&[Salad, Starter])?;
    }
    Ok(())
}

fn romantic(run: &mut TemplateRun<'_>) -> Result<()> {
    for _ in 0..3 {
        run.add_at(&[Appetizer], CookingTier::QUICK)?;
    }
    run.add(&[Salad])?;
    run.add(&[Dessert])?;

    match run.tier() {
        2 => {
            run.add(&[Appetizer])?;
        }
        3 => {
            run.add_with_side(&[MainDish, Soup, HotStarter])?;
        }
        _ => {
            run.add_with_side(&[MainDish, Soup])?;
            run.add(&[Starter, HotStarter])?;

            if run.dinner_time() == DinnerTime::Later {
                run.add(&[Appetizer, Starter])?;
            }
        }
    }
    Ok(())
}
