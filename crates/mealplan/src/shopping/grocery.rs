//! Mapping of ingredient categories to grocery-store headings.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Heading for categories the table does not know.
pub const OTHER_HEADING: &str = "Other";

/// Category keys per heading, in store-aisle order.
const AISLES: &[(&str, &[&str])] = &[
    ("Meat & Chicken", &["meat", "chicken", "turkey", "liver"]),
    ("Fish & Seafood", &["fish", "seafood"]),
    ("Deli meats", &["deli meats"]),
    ("Eggs & Dairy", &["eggs", "dairy"]),
    ("Dairy", &["cheese"]),
    ("Pasta, Beans & Cereal", &["pasta", "beans", "rice", "cereal"]),
    ("Canned Goods", &["canned fish", "canned beans", "canned goods"]),
    ("Dry food", &["dry food"]),
    ("Sweets", &["sweets"]),
    (
        "Vegetables & Mushrooms",
        &["mushrooms", "potato", "carrot", "tomato", "vegetables"],
    ),
    ("Fruits", &["fruits"]),
    ("Greenery", &["greenery"]),
    ("Sauces", &["sauces"]),
    ("Seasoning", &["seasoning"]),
    ("Baking supplies", &["baking supplies"]),
    (OTHER_HEADING, &["other"]),
];

static HEADINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    AISLES
        .iter()
        .flat_map(|(heading, keys)| keys.iter().map(move |key| (*key, *heading)))
        .collect()
});

/// Grocery heading for a raw ingredient category.
///
/// Matching ignores case and surrounding whitespace. Unknown categories map
/// to [`OTHER_HEADING`].
pub fn classify(category: &str) -> &'static str {
    let key = category.trim().to_lowercase();
    HEADINGS.get(key.as_str()).copied().unwrap_or(OTHER_HEADING)
}

/// Position of a heading in store-aisle order. Unknown headings sort last.
pub fn aisle_rank(heading: &str) -> usize {
    AISLES
        .iter()
        .position(|(h, _)| *h == heading)
        .unwrap_or(AISLES.len())
}

/// All headings in store-aisle order.
pub fn headings() -> impl Iterator<Item = &'static str> {
    AISLES.iter().map(|(heading, _)| *heading)
}
