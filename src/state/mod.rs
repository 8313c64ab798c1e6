mod collection;
mod persistence;

pub use collection::FoodCollection;
pub use persistence::{load_foods, read_lines, save_records_json, write_text};
