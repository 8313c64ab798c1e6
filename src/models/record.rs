use serde::Serialize;

use crate::models::FoodCategory;
use crate::scoring;

/// A parsed food item with its calories fixed at construction.
///
/// There are no mutators: the calorie count always reflects the components
/// the record was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodRecord {
    category: FoodCategory,

    #[serde(rename = "name")]
    display_name: &'static str,

    components: Vec<String>,

    calories: u64,
}

impl FoodRecord {
    pub fn new(category: FoodCategory, components: Vec<String>) -> Self {
        let calories = scoring::score(category, &components);
        Self {
            category,
            display_name: category.display_name(),
            components,
            calories,
        }
    }

    pub fn category(&self) -> FoodCategory {
        self.category
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Ingredients, toppings or fruits in input order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn calories(&self) -> u64 {
        self.calories
    }

    /// One-line description, e.g. `Salad with Lettuce, Croutons has 90 calories.`
    ///
    /// An empty component list still keeps both spaces around the join.
    pub fn describe(&self) -> String {
        format!(
            "{} with {} has {} calories.",
            self.display_name,
            self.components.join(", "),
            self.calories
        )
    }
}
