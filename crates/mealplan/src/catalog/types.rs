//! Core enumerations describing where and when a dish fits in a menu.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// The slot a dish fills in a menu.
///
/// Catalogs spell course types either kebab-case (`main-dish`) or with
/// spaces (`main dish`); both are accepted. Unknown spellings are kept as
/// [`CourseType::Other`] and sort after every known course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CourseType {
    Appetizer,
    Salad,
    Starter,
    HotStarter,
    Soup,
    MainDish,
    SideDish,
    Dessert,
    /// Course type not known to the composer.
    Other(String),
}

impl CourseType {
    /// Position of this course in a served menu. Lower comes first.
    pub fn precedence(&self) -> u8 {
        match self {
            CourseType::Appetizer => 1,
            CourseType::Salad => 2,
            CourseType::Starter => 3,
            CourseType::HotStarter => 4,
            CourseType::Soup => 5,
            CourseType::MainDish => 6,
            CourseType::SideDish => 7,
            CourseType::Dessert => 8,
            CourseType::Other(_) => u8::MAX,
        }
    }

    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &str {
        match self {
            CourseType::Appetizer => "appetizer",
            CourseType::Salad => "salad",
            CourseType::Starter => "starter",
            CourseType::HotStarter => "hot-starter",
            CourseType::Soup => "soup",
            CourseType::MainDish => "main-dish",
            CourseType::SideDish => "side-dish",
            CourseType::Dessert => "dessert",
            CourseType::Other(name) => name,
        }
    }
}

impl From<String> for CourseType {
    fn from(value: String) -> Self {
        let key = value.trim().to_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "appetizer" => CourseType::Appetizer,
            "salad" => CourseType::Salad,
            "starter" => CourseType::Starter,
            "hot-starter" => CourseType::HotStarter,
            "soup" => CourseType::Soup,
            "main-dish" | "main" => CourseType::MainDish,
            "side-dish" | "side" => CourseType::SideDish,
            // "desert" is a common misspelling in older catalogs
            "dessert" | "desert" => CourseType::Dessert,
            _ => CourseType::Other(value),
        }
    }
}

impl From<CourseType> for String {
    fn from(value: CourseType) -> Self {
        match value {
            CourseType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Occasion template driving which courses a menu needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Weeknight,
    Family,
    Guest,
    Festive,
    Romantic,
}

impl MealCategory {
    pub const ALL: [MealCategory; 5] = [
        MealCategory::Weeknight,
        MealCategory::Family,
        MealCategory::Guest,
        MealCategory::Festive,
        MealCategory::Romantic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Weeknight => "weeknight",
            MealCategory::Family => "family",
            MealCategory::Guest => "guest",
            MealCategory::Festive => "festive",
            MealCategory::Romantic => "romantic",
        }
    }
}

impl FromStr for MealCategory {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        MealCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| MenuError::Validation(format!("unknown meal category '{}'", s)))
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// When the meal is going to be cooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DinnerTime {
    Today,
    Tomorrow,
    /// Further ahead than tomorrow. Matches dishes tagged for tomorrow.
    Later,
}

impl DinnerTime {
    /// The tag a catalog dish must carry to be eligible for this slot.
    pub fn catalog_slot(self) -> DinnerTime {
        match self {
            DinnerTime::Later => DinnerTime::Tomorrow,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DinnerTime::Today => "today",
            DinnerTime::Tomorrow => "tomorrow",
            DinnerTime::Later => "later",
        }
    }
}

impl FromStr for DinnerTime {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(DinnerTime::Today),
            "tomorrow" => Ok(DinnerTime::Tomorrow),
            "later" => Ok(DinnerTime::Later),
            _ => Err(MenuError::Validation(format!("unknown dinner time '{}'", s))),
        }
    }
}

impl fmt::Display for DinnerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Cooking-time budget, from 1 (quick) to 4 (all evening).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CookingTier(u8);

impl CookingTier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// The quickest tier.
    pub const QUICK: CookingTier = CookingTier(1);

    /// Create a tier, rejecting values outside 1..=4.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(CookingTier(value))
        } else {
            Err(MenuError::Validation(format!(
                "cooking tier must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CookingTier {
    type Error = MenuError;

    fn try_from(value: u8) -> Result<Self> {
        CookingTier::new(value)
    }
}

impl From<CookingTier> for u8 {
    fn from(value: CookingTier) -> Self {
        value.0
    }
}

impl fmt::Display for CookingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

/// Calendar season used to filter seasonal dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    #[serde(alias = "fall")]
    Autumn,
    Winter,
}

impl Season {
    /// Northern-hemisphere meteorological season for a month (1-12).
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn for_date(date: NaiveDate) -> Season {
        Season::from_month(date.month())
    }

    /// Season of the local clock right now.
    pub fn current() -> Season {
        Season::from_month(Local::now().month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl FromStr for Season {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(MenuError::Validation(format!("unknown season '{}'", s))),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
