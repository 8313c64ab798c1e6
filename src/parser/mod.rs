pub mod diagnostics;
pub mod record_parser;

pub use diagnostics::{suggest_category, ParseDiagnostic, ParseOutcome};
pub use record_parser::{parse, parse_with_diagnostics, RecordParser};
