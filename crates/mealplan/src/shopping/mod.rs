//! Shopping-list aggregation.
//!
//! Collects the ingredients of the dishes a user settled on, collapses
//! plural/singular spellings, sums quantities that share a name and unit,
//! and groups the lines under grocery-store headings.
//!
//! ```text
//! Meat & Chicken
//!   chicken breast   2 pcs
//! Vegetables & Mushrooms
//!   tomato           5 pcs
//! ```

mod aggregate;
mod grocery;
mod normalize;

pub use aggregate::{AggregatedIngredient, IngredientAggregator, ShoppingList, format_amount};
pub use grocery::{OTHER_HEADING, aisle_rank, classify, headings};
pub use normalize::{normalize_name, singularize};
