use colored::Colorize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::cleanup::CommandPlan;
use crate::report::{Finding, Severity};

use super::summary::{print_header, print_severity_summary};
use super::tables::print_findings;

/// Terminal color for a severity label outside of tables. Table cells use
/// the comfy-table palette instead (`tables::severity_color`).
fn severity_text_color(severity: Severity) -> colored::Color {
    match severity {
        Severity::High => colored::Color::Red,
        Severity::Medium => colored::Color::Yellow,
        Severity::Low => colored::Color::Blue,
        Severity::Info => colored::Color::White,
    }
}

/// Print the full report: banner, findings table, severity summary.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn print_report(writer: &mut impl Write, findings: &[Finding]) -> std::io::Result<()> {
    print_header(writer)?;

    if findings.is_empty() {
        writeln!(writer, "{}", "✓ No secrets found.".green())?;
        return Ok(());
    }

    print_findings(writer, "Detected Secrets", findings)?;
    print_severity_summary(writer, findings)
}

/// Print findings grouped by file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report_grouped(writer: &mut impl Write, findings: &[Finding]) -> std::io::Result<()> {
    print_header(writer)?;

    if findings.is_empty() {
        writeln!(writer, "{}", "✓ No secrets found.".green())?;
        return Ok(());
    }

    let mut grouped: BTreeMap<&str, Vec<&Finding>> = BTreeMap::new();
    for finding in findings {
        grouped.entry(finding.file.as_str()).or_default().push(finding);
    }

    for (file, file_findings) in grouped {
        writeln!(writer, "\nFile: {}", file.bold().underline())?;
        for finding in file_findings {
            let color = severity_text_color(finding.severity);
            writeln!(
                writer,
                "  Line {}: [{}] {} — {}",
                finding.line.to_string().cyan(),
                finding.severity.to_string().color(color),
                finding.rule,
                finding.secret,
            )?;
        }
    }
    print_severity_summary(writer, findings)
}

/// Print a quiet report (summary only) for CI/CD mode.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report_quiet(writer: &mut impl Write, findings: &[Finding]) -> std::io::Result<()> {
    print_severity_summary(writer, findings)
}

/// Print findings as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_report_json(writer: &mut impl Write, findings: &[Finding]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, findings)?;
    writeln!(writer)
}

/// Print a command plan, one step per line, with the combined one-liner last.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_plan(writer: &mut impl Write, plan: &CommandPlan) -> std::io::Result<()> {
    writeln!(writer, "\n{}", "Generated remediation commands".bold())?;
    for (index, step) in plan.steps.iter().enumerate() {
        writeln!(writer, "  {}. {step}", index + 1)?;
    }
    writeln!(writer, "\nRun as one line:\n{plan}")
}

/// Print a command plan as structured JSON (program + argument vectors).
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_plan_json(writer: &mut impl Write, plan: &CommandPlan) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, plan)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_findings() -> Vec<Finding> {
        vec![
            Finding {
                file: "src/auth.py".to_owned(),
                line: 17,
                secret: "ghp_0123".to_owned(),
                rule: "token".to_owned(),
                severity: Severity::High,
            },
            Finding {
                file: "config/settings.py".to_owned(),
                line: 3,
                secret: "postgres://".to_owned(),
                rule: "url".to_owned(),
                severity: Severity::Medium,
            },
        ]
    }

    #[test]
    fn test_grouped_report_colors_each_severity_label() {
        let mut out = Vec::new();
        print_report_grouped(&mut out, &sample_findings()).expect("writes");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("src/auth.py"));
        assert!(text.contains("HIGH"), "severity label rendered: {text}");
        assert!(text.contains("MEDIUM"), "severity label rendered: {text}");
        assert!(text.contains("Line"));
    }

    #[test]
    fn test_severity_text_colors_are_distinct_per_level() {
        assert_eq!(severity_text_color(Severity::High), colored::Color::Red);
        assert_eq!(severity_text_color(Severity::Medium), colored::Color::Yellow);
        assert_eq!(severity_text_color(Severity::Low), colored::Color::Blue);
        assert_eq!(severity_text_color(Severity::Info), colored::Color::White);
    }
}
