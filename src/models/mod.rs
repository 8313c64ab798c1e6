mod category;
mod record;

pub use category::FoodCategory;
pub use record::FoodRecord;
