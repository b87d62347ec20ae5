//! Menu composition entry point.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{CookingTier, DinnerTime, MealCategory};
use crate::config::ComposerConfig;
use crate::error::Result;
use crate::repository::DishRepository;

use super::context::{ComposedMenu, CompositionContext};
use super::selector::DishSelector;
use super::templates::{self, TemplateRun};

/// What the caller wants a menu for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRequest {
    pub meal_category: MealCategory,
    pub dinner_time: DinnerTime,
    pub cooking_tier: CookingTier,
}

impl MenuRequest {
    pub fn new(meal_category: MealCategory, dinner_time: DinnerTime, cooking_tier: CookingTier) -> Self {
        Self {
            meal_category,
            dinner_time,
            cooking_tier,
        }
    }

    /// Build a request from raw request values, validating each one.
    pub fn parse(meal_category: &str, dinner_time: &str, cooking_tier: u8) -> Result<Self> {
        Ok(Self {
            meal_category: meal_category.parse()?,
            dinner_time: dinner_time.parse()?,
            cooking_tier: CookingTier::new(cooking_tier)?,
        })
    }
}

/// Assembles multi-course menus from a dish catalog.
///
/// The composer itself is immutable; every call builds its own
/// [`CompositionContext`], so one composer can serve concurrent requests.
pub struct MenuComposer {
    config: ComposerConfig,
    dishes: Arc<dyn DishRepository>,
}

impl MenuComposer {
    /// Create a composer with default configuration.
    pub fn new(dishes: Arc<dyn DishRepository>) -> Self {
        Self {
            config: ComposerConfig::default(),
            dishes,
        }
    }

    /// Create a composer with an explicit configuration.
    ///
    /// Fails with [`crate::MenuError::Validation`] if the configuration is invalid,
    /// e.g. an empty cuisine set.
    pub fn with_config(dishes: Arc<dyn DishRepository>, config: ComposerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, dishes })
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose a menu for `request`.
    ///
    /// Template steps with no eligible dish are skipped, so the menu may
    /// have fewer courses than the template asks for, or none at all. Use
    /// [`ComposedMenu::require_dishes`] to treat an empty menu as an error.
    pub fn compose(&self, request: &MenuRequest) -> Result<ComposedMenu> {
        let season = self.config.resolve_season();
        let ctx = CompositionContext::new(
            request.meal_category,
            request.dinner_time,
            request.cooking_tier,
            season,
            self.config.cuisines.clone(),
        );

        let mut run = TemplateRun::new(DishSelector::new(self.dishes.as_ref()), ctx);
        templates::apply(request.meal_category, &mut run)?;
        let menu = run.into_context().into_menu();

        tracing::info!(
            meal_category = %request.meal_category,
            dinner_time = %request.dinner_time,
            tier = %request.cooking_tier,
            season = %season,
            courses = menu.len(),
            "menu composed"
        );

        Ok(menu)
    }
}
