use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{CalorieError, Result};
use crate::models::FoodRecord;
use crate::parser::{parse_with_diagnostics, ParseOutcome};

/// Read a text file as lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CalorieError::InputNotFound(path.display().to_string()),
        _ => CalorieError::Io(e),
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read and parse a food list file.
///
/// A missing or unreadable file is not an error here: it is logged and
/// yields an empty outcome so reporting can carry on.
pub fn load_foods<P: AsRef<Path>>(path: P) -> ParseOutcome {
    let path = path.as_ref();
    match read_lines(path) {
        Ok(lines) => {
            let outcome = parse_with_diagnostics(lines);
            info!(
                path = %path.display(),
                foods = outcome.records.len(),
                skipped = outcome.diagnostics.len(),
                "Loaded foods"
            );
            outcome
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read food list");
            ParseOutcome::default()
        }
    }
}

/// Write text, terminating every line with `\n`.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let mut normalized = String::with_capacity(content.len() + 1);
    for line in content.lines() {
        normalized.push_str(line);
        normalized.push('\n');
    }
    fs::write(path.as_ref(), normalized)?;
    info!(path = %path.as_ref().display(), "Wrote report");
    Ok(())
}

/// Save foods to a JSON file.
pub fn save_records_json<P: AsRef<Path>>(path: P, records: &[FoodRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), foods = records.len(), "Wrote JSON export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_foods_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name: Burger\r\nIngredients:\r\nBeef Patty\r\nCheese\r\nEnd\r\n")
            .unwrap();

        let outcome = load_foods(file.path());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].components(), ["Beef Patty", "Cheese"]);
        assert_eq!(outcome.records[0].calories(), 400);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, CalorieError::InputNotFound(_)));

        let outcome = load_foods(&path);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_write_text_terminates_last_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&path, "a\n\nb").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n\nb\n");

        write_text(&path, "x\n\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n\n");
    }

    #[test]
    fn test_write_text_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        assert!(matches!(write_text(&path, "x"), Err(CalorieError::Io(_))));
    }

    #[test]
    fn test_save_records_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foods.json");
        let records = crate::parser::parse(["name: salad", "Lettuce", "Croutons", "End"]);

        save_records_json(&path, &records).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Salad");
        assert_eq!(value[0]["calories"], 90);
    }
}
