//! Repository seams between the engines and the dish catalog.
//!
//! The engines only read through these traits. [`InMemoryCatalog`] is the
//! bundled implementation; services backed by a database implement the
//! traits over their own storage.

mod memory;
mod persistence;
mod provider;

pub use memory::InMemoryCatalog;
pub use persistence::CatalogFile;
pub use provider::{DishQuery, DishRepository, IngredientRepository, RecipeRepository};
