use crate::interface::render::render_walkthrough;
use crate::state::FoodCollection;

/// Text produced by the `report` command.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    /// Console walk-through.
    pub walkthrough: String,

    /// Full report, when one was requested.
    pub report: Option<String>,
}

/// Render the walk-through and, if `with_report`, the full report.
///
/// The report is built from a copy taken before the walk-through sorts, so it
/// opens with the foods in input order. `collection` ends up sorted descending.
pub fn run_report(collection: &mut FoodCollection, with_report: bool) -> ReportOutput {
    let report = with_report.then(|| build_report(&mut collection.clone()));
    let walkthrough = render_walkthrough(collection);
    ReportOutput {
        walkthrough,
        report,
    }
}

/// Build the full text report.
///
/// Leaves `collection` sorted in descending order: the ascending and
/// descending sections sort it in place before rendering.
pub fn build_report(collection: &mut FoodCollection) -> String {
    let mut report = String::new();

    report.push_str("Initial Food List:\n");
    report.push_str(&collection.render_list());

    report.push_str("\nDetailed Food Information:\n");
    report.push_str(&collection.render_detailed());

    report.push_str(&format!(
        "\nTotal Calories: {}\n",
        collection.aggregate_calories()
    ));

    collection.sort_ascending();
    report.push_str("\nFood List (Ascending Order):\n");
    report.push_str(&collection.render_list());

    collection.sort_descending();
    report.push_str("\nFood List (Descending Order):\n");
    report.push_str(&collection.render_list());

    report
}
