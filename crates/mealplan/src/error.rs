//! Error types for the mealplan library.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::DishId;

/// Main error type for mealplan operations.
///
/// A selection step that finds no eligible dish is not an error: the
/// selector returns `Ok(None)` and the template step is skipped.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Composition finished without adding a single dish.
    #[error("No dishes found matching the criteria")]
    EmptyMenu,

    /// Caller input rejected before touching any repository.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A catalog record is malformed (missing field, non-numeric amount, ...).
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Requested dish does not exist in the catalog.
    #[error("Dish {0} not found")]
    DishNotFound(DishId),

    /// Failure reported by a repository implementation.
    #[error("Repository error: {0}")]
    Repository(String),

    /// Error reading a catalog or configuration file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mealplan operations.
pub type Result<T> = std::result::Result<T, MenuError>;
