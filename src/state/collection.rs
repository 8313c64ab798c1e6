use std::fmt::Write;

use crate::error::{CalorieError, Result};
use crate::models::FoodRecord;

/// Ordered list of parsed foods. Order is the only thing sort and remove change.
#[derive(Debug, Clone, Default)]
pub struct FoodCollection {
    records: Vec<FoodRecord>,
}

impl FoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FoodRecord) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&FoodRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<FoodRecord> {
        self.records
    }

    /// Stable sort, lowest calories first.
    pub fn sort_ascending(&mut self) {
        self.records.sort_by_key(|r| r.calories());
    }

    /// Stable sort, highest calories first. Ties keep their current order.
    pub fn sort_descending(&mut self) {
        self.records.sort_by(|a, b| b.calories().cmp(&a.calories()));
    }

    /// Sum of calories over every food. Saturates at `u64::MAX`.
    pub fn aggregate_calories(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.calories())
            .fold(0, u64::saturating_add)
    }

    /// Remove the food at `index`, shifting later foods down.
    pub fn remove_at(&mut self, index: usize) -> Result<FoodRecord> {
        if index >= self.records.len() {
            return Err(CalorieError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// `<name>: calories: <n>, index <i>` per food, then a blank line.
    pub fn render_list(&self) -> String {
        let mut out = String::new();
        for (i, record) in self.records.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}: calories: {}, index {}",
                record.display_name(),
                record.calories(),
                i
            );
        }
        out.push('\n');
        out
    }

    /// One description sentence per food, then a blank line.
    pub fn render_detailed(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.describe());
            out.push('\n');
        }
        out.push('\n');
        out
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<FoodRecord>> for FoodCollection {
    fn from(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a FoodCollection {
    type Item = &'a FoodRecord;
    type IntoIter = std::slice::Iter<'a, FoodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
