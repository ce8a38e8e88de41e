//! Terminal output formatting.
//!
//! Pure display functions, no user interaction. Styling goes through the
//! `console` crate so colors degrade cleanly on non-tty outputs.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{BumpDecision, ChangeSet};
use crate::report::{BumpReport, SkipReason};
use crate::workflow::PreviewReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("\u{2713}").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("\u{2192}").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("\u{26A0} WARNING:").yellow(), warning);
}

/// Display the analyzed changeset.
///
/// Shows the commit message and up to 10 changed files. If more than 10
/// files changed, displays the count of remaining files.
pub fn display_change_analysis(changes: &ChangeSet) {
    let first_line = changes.message.lines().next().unwrap_or("");
    println!("\n{}", style("Analyzing latest commit").bold());
    println!("  Message: {}", first_line);

    if changes.is_empty() {
        println!("  No file changes");
        return;
    }

    println!("  {} changed file(s):", changes.files.len());
    for file in changes.files.iter().take(10) {
        println!("    {} ({})", file.path, file.kind);
    }
    if changes.files.len() > 10 {
        println!("    ... and {} more files", changes.files.len() - 10);
    }
}

/// Display the classifier's decision.
pub fn display_decision(decision: &BumpDecision) {
    println!("\n{}", style("Decision").bold());
    println!("  Bump:   {}", style(decision.kind).cyan());
    println!("  Reason: {}", decision.reason);
}

/// Display the resulting version change.
///
/// Shows either "From/To" for an applied change or the unchanged version.
pub fn display_version_change(report: &BumpReport) {
    if report.changed() {
        println!("\n{}", style("Version Change:").bold());
        println!("  From: {}", style(&report.old_version).red());
        println!("  To:   {}", style(&report.new_version).green());
    } else {
        println!("\n{}", style("Version Unchanged:").bold());
        println!("  Still: {}", report.new_version);
    }
}

/// Display a skipped run.
pub fn display_skip(reason: SkipReason) {
    let detail = match reason {
        SkipReason::BotCommit => "this commit is a version bump from the bot",
        SkipReason::EnvOverride => "versioning disabled by SKIP_VERSIONING",
    };
    display_status(&format!("Skipping version analysis: {}", detail));
}

/// Display a PR impact preview.
pub fn display_preview(preview: &PreviewReport) {
    println!("\n{}", style("Version Impact Preview").bold());
    println!(
        "  Predicted bump: {} (from {})",
        style(preview.impact.predicted).cyan(),
        preview.base_version
    );
    println!("  Files changed:  {}", preview.impact.total_files);
    println!("  Source files:   {}", preview.impact.source_files);
    println!("  New files:      {}", preview.impact.new_files);
    println!("  Deleted files:  {}", preview.impact.deleted_files);
}
