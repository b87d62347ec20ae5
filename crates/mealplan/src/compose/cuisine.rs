//! Tracking of the cuisines a menu can still accept.

use std::collections::BTreeSet;

use crate::catalog::Cuisine;

/// Acceptable-cuisine set for one composition run.
///
/// Starts from the configured universe and only ever shrinks: each
/// non-universal dish added to the menu intersects the set with its own
/// cuisines. Every later pick therefore shares a cuisine with every
/// earlier non-universal pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineTracker {
    accepted: BTreeSet<String>,
}

impl CuisineTracker {
    pub fn new(universe: BTreeSet<String>) -> Self {
        Self { accepted: universe }
    }

    pub fn accepted(&self) -> &BTreeSet<String> {
        &self.accepted
    }

    /// Narrow the set after `cuisine` joined the menu.
    pub fn record(&mut self, cuisine: &Cuisine) {
        let Cuisine::Named(names) = cuisine else {
            return;
        };

        let narrowed: BTreeSet<String> = self.accepted.intersection(names).cloned().collect();
        if narrowed.is_empty() {
            // The repository handed back a dish outside the accepted set.
            tracing::warn!(
                accepted = ?self.accepted,
                dish_cuisines = ?names,
                "dish cuisine does not overlap accepted cuisines"
            );
        }
        self.accepted = narrowed;
    }
}
