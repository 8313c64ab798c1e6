use tracing::debug;

use crate::models::{FoodCategory, FoodRecord};
use crate::parser::diagnostics::{suggest_category, ParseDiagnostic, ParseOutcome};

/// Prefix that opens a block; the rest of the line names the category.
pub const NAME_PREFIX: &str = "name:";

/// Section header inside a block, carries no data.
pub const INGREDIENTS_HEADER: &str = "Ingredients:";

/// Closes a block.
pub const END_MARKER: &str = "End";

/// Strip ASCII control characters and spaces from both ends. Other Unicode
/// whitespace such as U+00A0 is part of the line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// A block that has seen `name:` but not yet `End`.
#[derive(Debug)]
struct PendingBlock {
    category: String,
    components: Vec<String>,
    line: usize,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Collecting(PendingBlock),
}

/// Line-driven state machine turning the food list format into records.
///
/// Feed lines in order with [`RecordParser::feed`] and call
/// [`RecordParser::finish`] once input is exhausted. A block still open at
/// that point is dropped.
#[derive(Debug, Default)]
pub struct RecordParser {
    state: State,
    line_number: usize,
    outcome: ParseOutcome,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one raw line. Surrounding spaces and control characters are ignored.
    pub fn feed(&mut self, raw: &str) {
        self.line_number += 1;
        let line = trim_line(raw);
        let state = std::mem::take(&mut self.state);

        if let Some(rest) = line.strip_prefix(NAME_PREFIX) {
            if let State::Collecting(block) = state {
                self.discard(block);
            }
            self.state = State::Collecting(PendingBlock {
                category: trim_line(rest).to_lowercase(),
                components: Vec::new(),
                line: self.line_number,
            });
            return;
        }

        self.state = match state {
            State::Idle => State::Idle,
            State::Collecting(mut block) => {
                if line.eq_ignore_ascii_case(INGREDIENTS_HEADER) {
                    State::Collecting(block)
                } else if line.eq_ignore_ascii_case(END_MARKER) {
                    self.close(block);
                    State::Idle
                } else {
                    block.components.push(line.to_string());
                    State::Collecting(block)
                }
            }
        };
    }

    /// Finish parsing and hand back the records and diagnostics.
    pub fn finish(mut self) -> ParseOutcome {
        if let State::Collecting(block) = std::mem::take(&mut self.state) {
            self.discard(block);
        }
        self.outcome
    }

    fn close(&mut self, block: PendingBlock) {
        match block.category.parse::<FoodCategory>() {
            Ok(category) => {
                debug!(
                    food = category.display_name(),
                    components = block.components.len(),
                    "Parsed food"
                );
                self.outcome
                    .records
                    .push(FoodRecord::new(category, block.components));
            }
            Err(e) => {
                let suggestion = suggest_category(&block.category);
                debug!(line = block.line, error = %e, "Dropping block");
                self.outcome.diagnostics.push(ParseDiagnostic::UnknownCategory {
                    name: block.category,
                    line: block.line,
                    suggestion,
                });
            }
        }
    }

    fn discard(&mut self, block: PendingBlock) {
        debug!(food = %block.category, line = block.line, "Discarding block without End");
        self.outcome.diagnostics.push(ParseDiagnostic::UnterminatedBlock {
            category: block.category,
            line: block.line,
        });
    }
}

/// Parse a full line sequence, keeping diagnostics.
pub fn parse_with_diagnostics<I, S>(lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = RecordParser::new();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

/// Parse a full line sequence into records.
pub fn parse<I, S>(lines: I) -> Vec<FoodRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_diagnostics(lines).records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_parses_block_with_header() {
        let records = parse(lines("name: Burger\nIngredients:\nBeef Patty\nCheese\nEnd"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category(), FoodCategory::Burger);
        assert_eq!(records[0].components(), ["Beef Patty", "Cheese"]);
        assert_eq!(records[0].calories(), 400);
    }

    #[test]
    fn test_category_keyword_case_insensitive() {
        let records = parse(lines("name:   PIZZA  \nend"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_name(), "Pizza");
        assert_eq!(records[0].calories(), 200);
    }

    #[test]
    fn test_name_prefix_is_case_sensitive() {
        let outcome = parse_with_diagnostics(lines("Name: Pizza\nEnd"));
        assert!(outcome.records.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_lines_are_trimmed() {
        let records = parse(lines("  name: Salad \n\t Lettuce  \n  INGREDIENTS:  \n Croutons\n  End  "));
        assert_eq!(records[0].components(), ["Lettuce", "Croutons"]);
        assert_eq!(records[0].calories(), 90);
    }

    #[test]
    fn test_non_ascii_whitespace_is_kept() {
        let records = parse(["name: burger\u{3000}", "Cheese\u{a0}", "\tCheese\r", "End"]);
        assert!(records.is_empty());

        let records = parse(["name: burger", "Cheese\u{a0}", "\tCheese\r", "End"]);
        assert_eq!(records[0].components(), ["Cheese\u{a0}", "Cheese"]);
        assert_eq!(records[0].calories(), 250);
    }

    #[test]
    fn test_blank_line_becomes_empty_component() {
        let records = parse(lines("name: smoothie\nBanana\n\nEnd"));
        assert_eq!(records[0].components(), ["Banana", ""]);
        assert_eq!(records[0].calories(), 190);
    }

    #[test]
    fn test_unknown_category_dropped_and_parsing_continues() {
        let outcome = parse_with_diagnostics(lines(
            "name: taco\nBeef\nEnd\nname: salad\nChicken\nEnd",
        ));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].category(), FoodCategory::Salad);
        assert_eq!(
            outcome.diagnostics,
            vec![ParseDiagnostic::UnknownCategory {
                name: "taco".to_string(),
                line: 1,
                suggestion: None,
            }]
        );
    }

    #[test]
    fn test_unterminated_trailing_block_discarded() {
        let outcome = parse_with_diagnostics(lines("name: burger\nCheese\nEnd\nname: pizza\nOlives"));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].category(), FoodCategory::Burger);
        assert_eq!(outcome.unknown_categories().count(), 0);
        assert_eq!(
            outcome.diagnostics,
            vec![ParseDiagnostic::UnterminatedBlock {
                category: "pizza".to_string(),
                line: 4,
            }]
        );
    }

    #[test]
    fn test_new_name_restarts_open_block() {
        let records = parse(lines("name: pizza\nOlives\nname: burger\nTomatoes\nEnd"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category(), FoodCategory::Burger);
        assert_eq!(records[0].components(), ["Tomatoes"]);
    }

    #[test]
    fn test_lines_outside_blocks_ignored() {
        let records = parse(lines("Cheese\nEnd\nname: burger\nCheese\nEnd\nTomatoes\nEnd"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].components(), ["Cheese"]);
    }

    #[test]
    fn test_unknown_category_not_logged_at_warn() {
        use std::io;
        use std::sync::{Arc, Mutex};

        struct SharedBuf(Arc<Mutex<Vec<u8>>>);

        impl io::Write for SharedBuf {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Arc::new(Mutex::new(Vec::new()));
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || SharedBuf(writer.clone()))
            .finish();

        let outcome = tracing::subscriber::with_default(subscriber, || {
            parse_with_diagnostics(lines("name: taco\nEnd\nname: pizza"))
        });

        assert_eq!(outcome.diagnostics.len(), 2);
        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_category_is_unknown() {
        let outcome = parse_with_diagnostics(lines("name:\nEnd"));
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.unknown_categories().count(), 1);
    }

    #[test]
    fn test_empty_input() {
        let outcome = parse_with_diagnostics(Vec::<String>::new());
        assert!(outcome.records.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }
}
