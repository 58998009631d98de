//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscheck to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, QuerySummary, StatsSummary,
};
use crate::catalog::ParseWarning;
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// This is the main entry point for reporting. Issues are sorted and
/// displayed with severity, location and details.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files_checked: usize) {
    print_success_to(files_checked, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} catalog {} - no issues found",
        files_checked,
        if files_checked == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print loader warnings: full details in verbose mode, a count otherwise.
pub fn print_load_warnings(warnings: &[ParseWarning], verbose: bool) {
    print_load_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

/// Print loader warnings to a custom writer.
pub fn print_load_warnings_to<W: Write>(warnings: &[ParseWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.detail
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} entr{} skipped while loading (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            if warnings.len() == 1 { "y" } else { "ies" },
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let loc = issue.location();
    let (file_path, line) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line
    match line {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file_path, line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
        }
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, Option<usize>) {
    match loc {
        ReportLocation::Message(message) => (&message.file_path, Some(message.line)),
        ReportLocation::File { path } => (path, None),
    }
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line) = extract_location_info(&a_loc);
    let (b_path, b_line) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.unwrap_or(0).cmp(&b_line.unwrap_or(0)))
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);
    print_load_warnings(&result.warnings, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check(_) => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.files_checked);
            }
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary, &mut io::stdout().lock());
        }
        CommandSummary::Query(summary) => {
            print_query(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "No catalog files found");
        return;
    }

    let language_width = summary
        .rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.language.as_str()))
        .max()
        .unwrap_or(0)
        .max("LANGUAGE".len());

    let _ = writeln!(
        writer,
        "{:<language_width$}  {:>8}  {:>10}  {:>8}  {:>6}",
        "LANGUAGE".bold(),
        "FINISHED".bold(),
        "UNFINISHED".bold(),
        "VANISHED".bold(),
        "DONE".bold(),
    );

    for row in &summary.rows {
        let padding = language_width - UnicodeWidthStr::width(row.language.as_str());
        let _ = writeln!(
            writer,
            "{}{:padding$}  {:>8}  {:>10}  {:>8}  {:>5.1}%",
            row.language,
            "",
            row.finished,
            row.unfinished,
            row.vanished,
            row.percent_finished(),
        );
    }
}

fn print_query<W: Write>(summary: &QuerySummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.resolved);
    if summary.found {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "translated in {} (context \"{}\")",
                summary.language, summary.context
            )
            .dimmed()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!(
                "no {} translation for \"{}\" in context \"{}\"; falling back to the source text",
                summary.language, summary.source, summary.context
            )
            .dimmed()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
