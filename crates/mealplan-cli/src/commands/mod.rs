//! CLI command implementations.

pub mod compose;
pub mod recipe;
pub mod shopping_list;

use std::path::Path;

use mealplan::{Cuisine, InMemoryCatalog};

/// Load a catalog file, failing early with a readable message if it is missing.
pub(crate) fn load_catalog(path: &Path) -> Result<InMemoryCatalog, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Catalog not found: {}", path.display()).into());
    }

    let catalog = InMemoryCatalog::load(path)?;
    tracing::debug!(
        path = %path.display(),
        dishes = catalog.dishes().len(),
        ingredients = catalog.ingredients().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub(crate) fn cuisine_label(cuisine: &Cuisine) -> String {
    match cuisine {
        Cuisine::Universal => mealplan::catalog::UNIVERSAL.to_string(),
        Cuisine::Named(names) => names.iter().cloned().collect::<Vec<_>>().join(", "),
    }
}
