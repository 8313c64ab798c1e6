pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod parser;
pub mod scoring;
pub mod state;

pub use error::{CalorieError, Result};
pub use models::{FoodCategory, FoodRecord};
pub use state::FoodCollection;
