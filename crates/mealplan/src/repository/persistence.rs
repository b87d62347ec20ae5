//! Loading catalogs from JSON files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Dish, Ingredient, RecipeStep};
use crate::error::{MenuError, Result};

use super::memory::InMemoryCatalog;

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

impl InMemoryCatalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mealplan::InMemoryCatalog;
    /// let catalog = InMemoryCatalog::load("catalog.json").unwrap();
    /// println!("Dishes: {}", catalog.dishes().len());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| MenuError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json(&content).map_err(|e| match e {
            MenuError::DataIntegrity(msg) => {
                MenuError::DataIntegrity(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse a catalog from JSON text.
    ///
    /// Malformed records (missing fields, out-of-range tiers, empty cuisine
    /// lists) are reported as `DataIntegrity` errors.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| MenuError::DataIntegrity(format!("invalid catalog record: {}", e)))?;

        tracing::debug!(
            dishes = file.dishes.len(),
            ingredients = file.ingredients.len(),
            steps = file.steps.len(),
            "catalog parsed"
        );

        Self::from_parts(file.dishes, file.ingredients, file.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DishRepository;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"{
        "dishes": [
            {
                "id": 1,
                "title": "Chicken Kiev",
                "type": "main dish",
                "category": ["weeknight"],
                "dinner_time": ["today"],
                "cooking_time": 2,
                "cuisine": "russian, european",
                "side_dish": true
            }
        ],
        "ingredients": [
            {"dish_id": 1, "index": 0, "name": "Chicken breasts", "amount": 2, "measurement": "pcs", "category": "chicken", "is_main": true}
        ]
    }"#;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog() {
        let file = create_test_file(CATALOG);
        let catalog = InMemoryCatalog::load(file.path()).unwrap();

        assert_eq!(catalog.dishes().len(), 1);
        assert_eq!(catalog.ingredients().len(), 1);
        assert!(catalog.steps().is_empty());
        assert!(catalog.main_ingredient_categories(1).unwrap().contains("chicken"));
    }

    #[test]
    fn test_missing_field_is_data_integrity_error() {
        let file = create_test_file(r#"{"dishes": [{"id": 1, "title": "No type"}]}"#);
        let err = InMemoryCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, MenuError::DataIntegrity(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = InMemoryCatalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, MenuError::Io { .. }));
    }
}
