//! Menu composition.
//!
//! [`MenuComposer`] drives a per-category template of course steps. Each
//! step asks the [`DishSelector`] for one dish; the selector enforces that
//! dishes are not repeated and that main-ingredient categories stay diverse,
//! relaxing diversity only when no compliant dish exists. After each pick the
//! [`CuisineTracker`] narrows the cuisines later courses may use.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use mealplan::{InMemoryCatalog, MenuComposer, MenuRequest};
//!
//! let catalog = InMemoryCatalog::load("catalog.json").unwrap();
//! let composer = MenuComposer::new(Arc::new(catalog));
//!
//! let request = MenuRequest::parse("family", "today", 3).unwrap();
//! let menu = composer.compose(&request).unwrap();
//! for dish in menu.dishes() {
//!     println!("{:12} {}", dish.course_type, dish.title);
//! }
//! ```

mod composer;
mod context;
mod cuisine;
mod selector;
mod templates;

pub use composer::{MenuComposer, MenuRequest};
pub use context::{ComposedMenu, CompositionContext, Course, Selection, UsedCategories};
pub use cuisine::CuisineTracker;
pub use selector::{Diversity, DishSelector};
