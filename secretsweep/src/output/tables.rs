use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::Write;

use crate::report::{Finding, Severity};

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    if cfg!(test) {
        table.set_width(120);
    }
    table
}

pub(super) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
        Severity::Info => Color::White,
    }
}

/// Print a findings table.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_findings(
    writer: &mut impl Write,
    title: &str,
    findings: &[Finding],
) -> std::io::Result<()> {
    if findings.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\n{}", title.bold().underline())?;
    let mut table = create_table(vec!["Rule", "Secret", "Location", "Severity"]);

    for finding in findings {
        let location = format!("{}:{}", finding.file, finding.line);
        table.add_row(vec![
            Cell::new(&finding.rule).add_attribute(Attribute::Dim),
            Cell::new(&finding.secret).add_attribute(Attribute::Bold),
            Cell::new(location),
            Cell::new(finding.severity).fg(severity_color(finding.severity)),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}
