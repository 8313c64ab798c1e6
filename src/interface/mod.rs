pub mod render;
pub mod report;

pub use render::{display_diagnostics, render_removal, render_walkthrough};
pub use report::{build_report, run_report, ReportOutput};
