use std::fmt;

use strsim::jaro_winkler;

use crate::models::{FoodCategory, FoodRecord};

/// Minimum similarity for a category suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Non-fatal event raised while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseDiagnostic {
    /// A block closed with `End` but named no known category. The block was dropped.
    UnknownCategory {
        name: String,
        line: usize,
        suggestion: Option<FoodCategory>,
    },

    /// A block that never reached `End`, either because input ran out or a
    /// new `name:` line started another block.
    UnterminatedBlock { category: String, line: usize },
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDiagnostic::UnknownCategory {
                name,
                line,
                suggestion,
            } => {
                write!(f, "Unknown food: {} (line {})", name, line)?;
                if let Some(category) = suggestion {
                    write!(f, ", did you mean '{}'?", category.keyword())?;
                }
                Ok(())
            }
            ParseDiagnostic::UnterminatedBlock { category, line } => {
                write!(f, "Block '{}' starting at line {} has no End", category, line)
            }
        }
    }
}

/// Records produced by a parse plus everything that was skipped.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<FoodRecord>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParseOutcome {
    pub fn unknown_categories(&self) -> impl Iterator<Item = &ParseDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, ParseDiagnostic::UnknownCategory { .. }))
    }
}

/// Closest known category to a misspelled name, if any is close enough.
pub fn suggest_category(name: &str) -> Option<FoodCategory> {
    let name = name.to_lowercase();
    let mut candidates: Vec<(FoodCategory, f64)> = FoodCategory::ALL
        .into_iter()
        .map(|c| (c, jaro_winkler(c.keyword(), &name)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.first().map(|(c, _)| *c)
}
