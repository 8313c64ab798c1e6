use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CalorieError;

/// The closed set of foods the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Burger,
    Pizza,
    Salad,
    Smoothie,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 4] = [
        FoodCategory::Burger,
        FoodCategory::Pizza,
        FoodCategory::Salad,
        FoodCategory::Smoothie,
    ];

    /// Canonical label used in every report line.
    pub fn display_name(self) -> &'static str {
        match self {
            FoodCategory::Burger => "Burger",
            FoodCategory::Pizza => "Pizza",
            FoodCategory::Salad => "Salad",
            FoodCategory::Smoothie => "Smoothie",
        }
    }

    /// Lowercase keyword as written after `name:`.
    pub fn keyword(self) -> &'static str {
        match self {
            FoodCategory::Burger => "burger",
            FoodCategory::Pizza => "pizza",
            FoodCategory::Salad => "salad",
            FoodCategory::Smoothie => "smoothie",
        }
    }

    /// Case-insensitive keyword match.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FoodCategory {
    type Err = CalorieError;

    /// Case-insensitive, no trimming: `" pizza"` is not a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s)
            .ok_or_else(|| CalorieError::InvalidInput(format!("Unknown food: {}", s)))
    }
}
