use colored::Colorize;
use std::io::Write;

use crate::report::{Finding, Severity};

/// Print the report banner.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "\n{}", "secretsweep scan report".bold().underline())
}

/// Counts findings per severity, ordered high to info.
#[must_use]
pub fn severity_counts(findings: &[Finding]) -> [(Severity, usize); 4] {
    let mut counts = [
        (Severity::High, 0),
        (Severity::Medium, 0),
        (Severity::Low, 0),
        (Severity::Info, 0),
    ];
    for finding in findings {
        for entry in &mut counts {
            if entry.0 == finding.severity {
                entry.1 += 1;
            }
        }
    }
    counts
}

/// Print the per-severity summary line.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub(super) fn print_severity_summary(
    writer: &mut impl Write,
    findings: &[Finding],
) -> std::io::Result<()> {
    let counts = severity_counts(findings);
    let rendered: Vec<String> = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(severity, count)| format!("{count} {severity}"))
        .collect();
    writeln!(
        writer,
        "\n[SUMMARY] {} finding(s): {}",
        findings.len(),
        rendered.join(", ")
    )
}
