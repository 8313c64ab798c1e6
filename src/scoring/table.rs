use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::FoodCategory;

// ─────────────────────────────────────────────────────────────────────────────
// Base offsets (calories added regardless of components)
// ─────────────────────────────────────────────────────────────────────────────

pub const BURGER_BASE_CALORIES: u64 = 0;

/// Pizza dough.
pub const PIZZA_BASE_CALORIES: u64 = 200;

pub const SALAD_BASE_CALORIES: u64 = 0;

/// Yogurt/milk base.
pub const SMOOTHIE_BASE_CALORIES: u64 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Component tables (case-sensitive names)
// ─────────────────────────────────────────────────────────────────────────────

pub static BURGER_INGREDIENTS: LazyLock<HashMap<&'static str, u64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Tomatoes", 50);
    m.insert("Beef Patty", 150);
    m.insert("Lettuce", 200);
    m.insert("Cheese", 250);
    m.insert("Veggie Patty", 300);
    m
});

pub static PIZZA_TOPPINGS: LazyLock<HashMap<&'static str, u64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Pepperoni", 100);
    m.insert("Mushrooms", 40);
    m.insert("Onions", 30);
    m.insert("Extra Cheese", 120);
    m.insert("Olives", 60);
    m
});

pub static SALAD_INGREDIENTS: LazyLock<HashMap<&'static str, u64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Lettuce", 10);
    m.insert("Croutons", 80);
    m.insert("Chicken", 150);
    m.insert("Cheese", 100);
    m.insert("Caesar Dressing", 200);
    m
});

pub static SMOOTHIE_FRUITS: LazyLock<HashMap<&'static str, u64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Banana", 90);
    m.insert("Strawberry", 50);
    m.insert("Blueberry", 40);
    m.insert("Mango", 70);
    m.insert("Pineapple", 60);
    m
});

/// Lookup table for a category's components.
pub fn component_table(category: FoodCategory) -> &'static HashMap<&'static str, u64> {
    match category {
        FoodCategory::Burger => &BURGER_INGREDIENTS,
        FoodCategory::Pizza => &PIZZA_TOPPINGS,
        FoodCategory::Salad => &SALAD_INGREDIENTS,
        FoodCategory::Smoothie => &SMOOTHIE_FRUITS,
    }
}

/// Fixed calories a category contributes with no components.
pub fn base_calories(category: FoodCategory) -> u64 {
    match category {
        FoodCategory::Burger => BURGER_BASE_CALORIES,
        FoodCategory::Pizza => PIZZA_BASE_CALORIES,
        FoodCategory::Salad => SALAD_BASE_CALORIES,
        FoodCategory::Smoothie => SMOOTHIE_BASE_CALORIES,
    }
}

/// Calories for one component; unknown names contribute 0.
pub fn component_calories(category: FoodCategory, component: &str) -> u64 {
    *component_table(category).get(component).unwrap_or(&0)
}
