//! Rendering of normalized findings and command plans.

mod reports;
mod summary;
mod tables;

pub use reports::{print_plan, print_plan_json, print_report, print_report_grouped,
    print_report_json, print_report_quiet};
pub use summary::{print_header, severity_counts};
pub use tables::print_findings;
