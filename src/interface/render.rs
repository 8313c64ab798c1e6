use crate::error::Result;
use crate::parser::ParseDiagnostic;
use crate::state::FoodCollection;

/// Console walk-through: list, details, total, then the list sorted
/// ascending and descending. Sorts `collection` in place.
pub fn render_walkthrough(collection: &mut FoodCollection) -> String {
    let mut out = String::new();
    out.push_str(&collection.render_list());
    out.push_str(&collection.render_detailed());
    out.push_str(&format!(
        "Calories in all food: {}\n",
        collection.aggregate_calories()
    ));

    collection.sort_ascending();
    out.push_str(&collection.render_list());

    collection.sort_descending();
    out.push_str(&collection.render_list());
    out
}

/// Remove the food at `index` and render what is left.
///
/// On an out-of-range index the collection is untouched and the error is returned.
pub fn render_removal(collection: &mut FoodCollection, index: usize) -> Result<String> {
    let removed = collection.remove_at(index)?;
    Ok(format!("Removed {}\n\n{}", removed.describe(), collection.render_list()))
}

/// Print parse diagnostics for unknown foods to stderr.
pub fn display_diagnostics(diagnostics: &[ParseDiagnostic]) {
    for diagnostic in diagnostics {
        if matches!(diagnostic, ParseDiagnostic::UnknownCategory { .. }) {
            eprintln!("{}", diagnostic);
        }
    }
}
