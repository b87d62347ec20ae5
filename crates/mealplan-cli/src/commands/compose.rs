//! Compose command - assemble a menu from a catalog.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use mealplan::{
    ComposerConfig, CookingTier, DinnerTime, IngredientAggregator, MealCategory, MenuComposer,
    MenuError, MenuRequest, Season,
};

use super::{cuisine_label, load_catalog, shopping_list};

pub struct ComposeArgs {
    pub catalog: PathBuf,
    pub category: MealCategory,
    pub time: DinnerTime,
    pub tier: u8,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub season: Option<Season>,
    pub shopping_list: bool,
    pub json: bool,
}

pub fn run(args: ComposeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = MenuRequest::new(args.category, args.time, CookingTier::new(args.tier)?);

    let mut catalog = load_catalog(&args.catalog)?;
    if let Some(seed) = args.seed {
        catalog = catalog.with_seed(seed);
    }
    let catalog = Arc::new(catalog);

    let mut config = match &args.config {
        Some(path) => ComposerConfig::load(path)?,
        None => ComposerConfig::new(),
    };
    if let Some(season) = args.season {
        config = config.with_season(season);
    }
    // Pin the season so the header and the composition agree.
    let season = config.resolve_season();
    let config = config.with_season(season);

    let composer = MenuComposer::with_config(catalog.clone(), config)?;
    let menu = composer.compose(&request)?;
    if menu.is_empty() {
        return Err(MenuError::EmptyMenu.into());
    }

    let shopping = if args.shopping_list {
        Some(IngredientAggregator::new(catalog).aggregate(&menu.dish_ids())?)
    } else {
        None
    };

    if args.json {
        let dishes: Vec<_> = menu.dishes().collect();
        let output = match &shopping {
            Some(list) => serde_json::json!({
                "dishes": dishes,
                "shopping_list": list,
            }),
            None => serde_json::to_value(&dishes)?,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        "Menu for".cyan().bold(),
        request.meal_category.to_string().white().bold(),
        format!(
            "({}, tier {}, {})",
            request.dinner_time, request.cooking_tier, season
        )
        .dimmed()
    );
    println!();

    for course in menu.courses() {
        let dish = &course.dish;
        let note = if course.diversity_relaxed {
            " repeats a main ingredient".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:12} {:32} {:>6}  {}{}",
            dish.course_type.to_string().green(),
            dish.title,
            format!("#{}", dish.id),
            cuisine_label(&dish.cuisine).dimmed(),
            note
        );
    }

    println!();
    println!("{} courses", menu.len().to_string().white().bold());

    if let Some(list) = shopping {
        println!();
        shopping_list::print_list(&list);
    }

    Ok(())
}
