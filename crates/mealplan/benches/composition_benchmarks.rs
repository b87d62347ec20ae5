//! Menu composition performance benchmarks.
//!
//! Measures template execution against synthetic in-memory catalogs of
//! increasing size.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mealplan::catalog::{RawAmount, SeasonAvailability};
use mealplan::{
    ComposerConfig, CookingTier, CourseType, Cuisine, DinnerTime, Dish, DishId, Ingredient,
    InMemoryCatalog, MealCategory, MenuComposer, MenuRequest, Season,
};

const COURSES: [CourseType; 8] = [
    CourseType::Appetizer,
    CourseType::Salad,
    CourseType::Starter,
    CourseType::HotStarter,
    CourseType::Soup,
    CourseType::MainDish,
    CourseType::SideDish,
    CourseType::Dessert,
];

const CUISINES: [&str; 6] = [
    "european",
    "asian",
    "mediterranean",
    "russian",
    "italian",
    "mexican",
];

const MAIN_CATEGORIES: [&str; 8] = [
    "meat", "chicken", "fish", "potato", "cheese", "mushrooms", "rice", "fruits",
];

/// Generate a catalog with `dishes` dishes spread over every course type.
fn generate_catalog(dishes: usize) -> InMemoryCatalog {
    let mut catalog = Vec::with_capacity(dishes);
    let mut ingredients = Vec::with_capacity(dishes * 2);

    for i in 0..dishes {
        let id = i as DishId + 1;
        let cuisine = if i % 4 == 0 {
            Cuisine::Universal
        } else {
            Cuisine::named([CUISINES[i % CUISINES.len()], CUISINES[(i / 3) % CUISINES.len()]])
        };
        catalog.push(Dish {
            id,
            title: format!("Dish {}", id),
            description: String::new(),
            course_type: COURSES[i % COURSES.len()].clone(),
            meal_categories: MealCategory::ALL.to_vec(),
            dinner_times: vec![DinnerTime::Today, DinnerTime::Tomorrow],
            cooking_time: CookingTier::new((i % 4) as u8 + 1).unwrap(),
            season: SeasonAvailability::AllSeasons,
            cuisine,
            side_dish: i % 3 == 0,
            image_url: None,
        });
        for k in 0..2 {
            ingredients.push(Ingredient {
                dish_id: id,
                index: k,
                name: format!("ingredient {}", (i + k as usize) % 50),
                amount: RawAmount::Number(1.0),
                measurement: "pcs".to_string(),
                category: MAIN_CATEGORIES[(i + k as usize) % MAIN_CATEGORIES.len()].to_string(),
                is_main: k == 0,
            });
        }
    }

    InMemoryCatalog::from_parts(catalog, ingredients, vec![])
        .unwrap()
        .with_seed(42)
}

/// Benchmark each meal category at the richest tier.
fn bench_compose_by_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_by_category");
    let composer = MenuComposer::with_config(
        Arc::new(generate_catalog(400)),
        ComposerConfig::new().with_season(Season::Winter),
    )
    .unwrap();

    for category in MealCategory::ALL {
        let request = MenuRequest::new(category, DinnerTime::Later, CookingTier::new(4).unwrap());
        group.bench_with_input(
            BenchmarkId::new("category", category),
            &request,
            |b, request| b.iter(|| black_box(composer.compose(request).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark composition as the catalog grows.
fn bench_compose_catalog_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_catalog_size");
    let request = MenuRequest::parse("festive", "later", 4).unwrap();

    for dishes in [50, 500, 5_000].iter() {
        let composer = MenuComposer::with_config(
            Arc::new(generate_catalog(*dishes)),
            ComposerConfig::new().with_season(Season::Winter),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("dishes", dishes), &request, |b, request| {
            b.iter(|| black_box(composer.compose(request).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose_by_category, bench_compose_catalog_size);
criterion_main!(benches);
