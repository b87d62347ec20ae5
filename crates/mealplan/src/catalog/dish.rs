//! Dish records and their cuisine/season tags.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::{CookingTier, CourseType, DinnerTime, MealCategory, Season};

/// Identifier of a dish in the catalog.
pub type DishId = u64;

/// Cuisine tag of a dish.
///
/// Serialized as the literal `"universal"` or a list of cuisine names. A
/// comma-separated string (`"european, asian"`) is accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CuisineRepr", into = "CuisineRepr")]
pub enum Cuisine {
    /// Fits any menu and never narrows the acceptable set.
    Universal,
    /// Lower-cased cuisine names. Never empty.
    Named(BTreeSet<String>),
}

pub const UNIVERSAL: &str = "universal";

impl Cuisine {
    /// Build a named cuisine tag. Names are trimmed and lower-cased.
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Cuisine::Named(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        )
    }

    pub fn is_universal(&self) -> bool {
        matches!(self, Cuisine::Universal)
    }

    /// True when a dish with this tag may join a menu accepting `accepted`.
    pub fn is_compatible_with(&self, accepted: &BTreeSet<String>) -> bool {
        match self {
            Cuisine::Universal => true,
            Cuisine::Named(names) => !names.is_disjoint(accepted),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CuisineRepr {
    Text(String),
    List(Vec<String>),
}

impl TryFrom<CuisineRepr> for Cuisine {
    type Error = String;

    fn try_from(repr: CuisineRepr) -> std::result::Result<Self, Self::Error> {
        let cuisine = match repr {
            CuisineRepr::Text(text) if text.trim().eq_ignore_ascii_case(UNIVERSAL) => {
                return Ok(Cuisine::Universal);
            }
            CuisineRepr::Text(text) => Cuisine::named(text.split(',')),
            CuisineRepr::List(list) => Cuisine::named(list),
        };
        match &cuisine {
            Cuisine::Named(names) if names.is_empty() => {
                Err("cuisine must be \"universal\" or at least one cuisine name".to_string())
            }
            _ => Ok(cuisine),
        }
    }
}

impl From<Cuisine> for CuisineRepr {
    fn from(value: Cuisine) -> Self {
        match value {
            Cuisine::Universal => CuisineRepr::Text(UNIVERSAL.to_string()),
            Cuisine::Named(names) => CuisineRepr::List(names.into_iter().collect()),
        }
    }
}

/// Seasons in which a dish is offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeasonRepr", into = "SeasonRepr")]
pub enum SeasonAvailability {
    AllSeasons,
    Only(BTreeSet<Season>),
}

pub const ALL_SEASONS: &str = "all-seasons";

impl SeasonAvailability {
    pub fn includes(&self, season: Season) -> bool {
        match self {
            SeasonAvailability::AllSeasons => true,
            SeasonAvailability::Only(seasons) => seasons.contains(&season),
        }
    }
}

impl Default for SeasonAvailability {
    fn default() -> Self {
        SeasonAvailability::AllSeasons
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SeasonRepr {
    Text(String),
    List(Vec<Season>),
}

impl TryFrom<SeasonRepr> for SeasonAvailability {
    type Error = String;

    fn try_from(repr: SeasonRepr) -> std::result::Result<Self, Self::Error> {
        let seasons: BTreeSet<Season> = match repr {
            SeasonRepr::Text(text) => {
                let key = text.trim().to_lowercase().replace(' ', "-");
                if key == ALL_SEASONS {
                    return Ok(SeasonAvailability::AllSeasons);
                }
                text.split(',')
                    .map(|s| s.parse::<Season>().map_err(|e| e.to_string()))
                    .collect::<std::result::Result<_, _>>()?
            }
            SeasonRepr::List(list) => list.into_iter().collect(),
        };
        if seasons.is_empty() {
            return Err("season must be \"all-seasons\" or at least one season".to_string());
        }
        Ok(SeasonAvailability::Only(seasons))
    }
}

impl From<SeasonAvailability> for SeasonRepr {
    fn from(value: SeasonAvailability) -> Self {
        match value {
            SeasonAvailability::AllSeasons => SeasonRepr::Text(ALL_SEASONS.to_string()),
            SeasonAvailability::Only(seasons) => SeasonRepr::List(seasons.into_iter().collect()),
        }
    }
}

/// A dish as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,

    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "type", alias = "course_type")]
    pub course_type: CourseType,

    /// Occasions this dish suits.
    #[serde(alias = "category")]
    pub meal_categories: Vec<MealCategory>,

    /// Slots in which the dish can be cooked.
    #[serde(alias = "dinner_time")]
    pub dinner_times: Vec<DinnerTime>,

    /// Effort needed to prepare the dish.
    pub cooking_time: CookingTier,

    #[serde(default)]
    pub season: SeasonAvailability,

    pub cuisine: Cuisine,

    /// Whether the dish is normally served with a side dish.
    #[serde(default)]
    pub side_dish: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Dish {
    pub fn suits(&self, category: MealCategory) -> bool {
        self.meal_categories.contains(&category)
    }

    pub fn cooks_at(&self, slot: DinnerTime) -> bool {
        self.dinner_times.contains(&slot)
    }
}
