//! Ingredient-name normalization.
//!
//! Best-effort English singularization so that "Tomatoes" and "tomato" land
//! on the same shopping-list line. Compound and non-English names are not
//! guaranteed a canonical form.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Plurals the suffix rules get wrong.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("leaves", "leaf"),
        ("loaves", "loaf"),
        ("halves", "half"),
        ("calves", "calf"),
        ("knives", "knife"),
        ("shelves", "shelf"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("teeth", "tooth"),
        ("feet", "foot"),
        ("children", "child"),
        ("people", "person"),
        ("cookies", "cookie"),
        ("brownies", "brownie"),
        ("smoothies", "smoothie"),
        ("quiches", "quiche"),
    ])
});

/// Words that end like plurals but are not, or have no singular.
static INVARIANT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "molasses", "series", "species", "grits", "swiss", "haggis", "brussels", "oats",
        "tennis", "pastis", "anis", "chablis",
    ])
});

/// Singulars whose plural takes -oes. Other -oes words only drop the s.
static O_PLURALS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "tomato", "potato", "mango", "avocado", "hero", "echo", "volcano", "mosquito", "torpedo",
    ])
});

/// Normalize an ingredient name for grouping.
///
/// Splits on whitespace, lower-cases every token, singularizes recognized
/// plurals and rejoins with single spaces.
///
/// ```
/// use mealplan::shopping::normalize_name;
///
/// assert_eq!(normalize_name("Cherry  Tomatoes"), "cherry tomato");
/// assert_eq!(normalize_name("tomato"), "tomato");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|token| singularize(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Singular form of a lower-case word, or the word itself if not a known plural.
pub fn singularize(word: &str) -> String {
    if word.chars().count() <= 3 || !word.chars().all(char::is_alphabetic) {
        return word.to_string();
    }
    if INVARIANT.contains(word) {
        return word.to_string();
    }
    if let Some(singular) = IRREGULAR.get(word) {
        return singular.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        // "pies", "ties": the singular keeps its -ie.
        if stem.chars().count() <= 1 {
            return word[..word.len() - 1].to_string();
        }
        return format!("{}y", stem);
    }
    if let Some(stem) = word.strip_suffix("oes") {
        let singular = format!("{}o", stem);
        if O_PLURALS.contains(singular.as_str()) {
            return singular;
        }
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with('s') && !["ss", "us"].iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}
