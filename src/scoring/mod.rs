pub mod table;

pub use table::{base_calories, component_calories, component_table};

use crate::models::FoodCategory;

/// Total calories for a food: the category's base offset plus every
/// component's table value. Saturates at `u64::MAX`.
pub fn score<I, S>(category: FoodCategory, components: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    components
        .into_iter()
        .map(|c| component_calories(category, c.as_ref()))
        .fold(base_calories(category), u64::saturating_add)
}
