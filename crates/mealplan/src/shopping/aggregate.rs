//! Merging the ingredients of several dishes into one shopping list.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::DishId;
use crate::error::{MenuError, Result};
use crate::repository::IngredientRepository;

use super::grocery;
use super::normalize::normalize_name;

/// One shopping-list line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    /// Normalized ingredient name.
    pub name: String,
    /// Summed amount, e.g. `"2"` or `"1.5"`.
    pub amount: String,
    pub measurement: String,
    /// Raw category of the first row merged into this line.
    pub category: String,
}

/// Shopping list grouped by grocery heading, headings in store-aisle order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    sections: IndexMap<String, Vec<AggregatedIngredient>>,
}

impl ShoppingList {
    pub fn get(&self, heading: &str) -> Option<&[AggregatedIngredient]> {
        self.sections.get(heading).map(Vec::as_slice)
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AggregatedIngredient])> {
        self.sections
            .iter()
            .map(|(heading, items)| (heading.as_str(), items.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of lines across all headings.
    pub fn total_items(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<AggregatedIngredient>> {
        self.sections
    }
}

/// Format an amount with at most two decimals, without trailing zeros.
///
/// ```
/// use mealplan::shopping::format_amount;
///
/// assert_eq!(format_amount(2.0), "2");
/// assert_eq!(format_amount(1.5), "1.5");
/// assert_eq!(format_amount(1.0 / 3.0), "0.33");
/// ```
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Line being accumulated before formatting.
struct PendingLine {
    name: String,
    amount: f64,
    measurement: String,
    category: String,
}

/// Builds shopping lists from an [`IngredientRepository`].
pub struct IngredientAggregator {
    ingredients: Arc<dyn IngredientRepository>,
}

impl IngredientAggregator {
    pub fn new(ingredients: Arc<dyn IngredientRepository>) -> Self {
        Self { ingredients }
    }

    /// Aggregate the ingredients of `dish_ids` into a shopping list.
    ///
    /// Fails with [`MenuError::Validation`] before touching the repository
    /// when `dish_ids` is empty, and with [`MenuError::DataIntegrity`] when
    /// a stored amount is not numeric. Duplicate ids count once.
    pub fn aggregate(&self, dish_ids: &[DishId]) -> Result<ShoppingList> {
        if dish_ids.is_empty() {
            return Err(MenuError::Validation("no dish ids provided".to_string()));
        }

        let ids: Vec<DishId> = dish_ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let rows = self.ingredients.ingredients_for_dishes(&ids)?;

        // Group by (lower-cased name, measurement, category). Pre-grouped rows
        // pass through unchanged; raw recipe lines are summed here.
        let mut grouped: BTreeMap<(String, String, String), f64> = BTreeMap::new();
        for row in &rows {
            let amount = row.amount.value().map_err(|e| match e {
                MenuError::DataIntegrity(msg) => {
                    MenuError::DataIntegrity(format!("ingredient '{}': {}", row.name, msg))
                }
                other => other,
            })?;
            let key = (
                row.name.trim().to_lowercase(),
                row.measurement.clone(),
                row.category.clone(),
            );
            *grouped.entry(key).or_insert(0.0) += amount;
        }

        let mut sections: IndexMap<&'static str, Vec<PendingLine>> = IndexMap::new();
        for ((name, measurement, category), amount) in grouped {
            let name = normalize_name(&name);
            let heading = grocery::classify(&category);
            let lines = sections.entry(heading).or_default();

            match lines
                .iter_mut()
                .find(|l| l.name == name && l.measurement == measurement)
            {
                Some(existing) => {
                    tracing::debug!(
                        ingredient = %name,
                        measurement = %measurement,
                        from = existing.amount,
                        to = existing.amount + amount,
                        "merged ingredient"
                    );
                    existing.amount += amount;
                }
                None => lines.push(PendingLine {
                    name,
                    amount,
                    measurement,
                    category,
                }),
            }
        }

        sections.sort_by(|a, _, b, _| grocery::aisle_rank(a).cmp(&grocery::aisle_rank(b)));

        let sections: IndexMap<String, Vec<AggregatedIngredient>> = sections
            .into_iter()
            .map(|(heading, lines)| {
                let mut items: Vec<AggregatedIngredient> = lines
                    .into_iter()
                    .map(|l| AggregatedIngredient {
                        name: l.name,
                        amount: format_amount(l.amount),
                        measurement: l.measurement,
                        category: l.category,
                    })
                    .collect();
                items.sort_by(|a, b| {
                    (a.name.as_str(), a.measurement.as_str())
                        .cmp(&(b.name.as_str(), b.measurement.as_str()))
                });
                (heading.to_string(), items)
            })
            .collect();

        tracing::info!(
            dishes = ids.len(),
            rows = rows.len(),
            headings = sections.len(),
            "ingredients aggregated"
        );

        Ok(ShoppingList { sections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::catalog::{IngredientRow, RawAmount};

    /// Returns fixed rows and counts calls.
    struct FixedRows {
        rows: Vec<IngredientRow>,
        calls: AtomicUsize,
    }

    impl IngredientRepository for FixedRows {
        fn ingredients_for_dishes(&self, _dish_ids: &[DishId]) -> Result<Vec<IngredientRow>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.clone())
        }
    }

    fn row(name: &str, amount: RawAmount, measurement: &str, category: &str) -> IngredientRow {
        IngredientRow {
            name: name.to_string(),
            amount,
            measurement: measurement.to_string(),
            category: category.to_string(),
        }
    }

    fn aggregator(rows: Vec<IngredientRow>) -> (IngredientAggregator, Arc<FixedRows>) {
        let repo = Arc::new(FixedRows {
            rows,
            calls: AtomicUsize::new(0),
        });
        (IngredientAggregator::new(repo.clone()), repo)
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(1.5), "1.5");
        assert_eq!(format_amount(1.25), "1.25");
        assert_eq!(format_amount(0.333333), "0.33");
        assert_eq!(format_amount(10.0), "10");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_empty_ids_rejected_before_repository() {
        let (aggregator, repo) = aggregator(vec![]);
        let err = aggregator.aggregate(&[]).unwrap_err();
        assert!(matches!(err, MenuError::Validation(_)));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_plural_names_merge() {
        let (aggregator, _) = aggregator(vec![
            row("Tomato", RawAmount::Number(2.0), "pcs", "vegetables"),
            row("tomatoes", RawAmount::Number(3.0), "pcs", "vegetables"),
        ]);
        let list = aggregator.aggregate(&[1, 2]).unwrap();
        let vegetables = list.get("Vegetables & Mushrooms").unwrap();
        assert_eq!(vegetables.len(), 1);
        assert_eq!(vegetables[0].name, "tomato");
        assert_eq!(vegetables[0].amount, "5");
    }

    #[test]
    fn test_different_measurements_stay_separate() {
        let (aggregator, _) = aggregator(vec![
            row("Milk", RawAmount::Number(200.0), "ml", "dairy"),
            row("milk", RawAmount::Number(1.0), "cup", "dairy"),
            row("milk", RawAmount::Text("0.5".to_string()), "cup", "dairy"),
        ]);
        let list = aggregator.aggregate(&[1]).unwrap();
        let dairy = list.get("Eggs & Dairy").unwrap();
        assert_eq!(dairy.len(), 2);
        assert_eq!(dairy[0].measurement, "cup");
        assert_eq!(dairy[0].amount, "1.5");
        assert_eq!(dairy[1].measurement, "ml");
        assert_eq!(dairy[1].amount, "200");
    }

    #[test]
    fn test_headings_in_aisle_order_and_items_sorted() {
        let (aggregator, _) = aggregator(vec![
            row("sugar", RawAmount::Number(100.0), "g", "baking supplies"),
            row("unobtainium", RawAmount::Number(1.0), "", "mystery"),
            row("salmon", RawAmount::Number(1.0), "kg", "fish"),
            row("chicken", RawAmount::Number(1.0), "kg", "chicken"),
            row("beef", RawAmount::Number(1.0), "kg", "meat"),
        ]);
        let list = aggregator.aggregate(&[1]).unwrap();
        let headings: Vec<&str> = list.headings().collect();
        assert_eq!(
            headings,
            vec!["Meat & Chicken", "Fish & Seafood", "Baking supplies", "Other"]
        );

        let meat: Vec<&str> = list
            .get("Meat & Chicken")
            .unwrap()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(meat, vec!["beef", "chicken"]);
        assert_eq!(list.total_items(), 5);
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let (aggregator, _) = aggregator(vec![row(
            "salt",
            RawAmount::Text("to taste".to_string()),
            "",
            "seasoning",
        )]);
        let err = aggregator.aggregate(&[1]).unwrap_err();
        assert!(matches!(err, MenuError::DataIntegrity(_)));
    }

    #[test]
    fn test_serializes_as_heading_map() {
        let (aggregator, _) = aggregator(vec![row("Eggs", RawAmount::Number(2.0), "", "eggs")]);
        let list = aggregator.aggregate(&[1]).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["Eggs & Dairy"][0]["name"], "egg");
        assert_eq!(json["Eggs & Dairy"][0]["amount"], "2");
    }
}
