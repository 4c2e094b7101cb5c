//! CLI output formatting for `check` and `enquire`.
//!
//! # Check
//!
//! Every route, then every section on it in composition order with the
//! origin of the value that would be rendered right now:
//!
//! ```text
//! Home → /
//!     001 header: live
//!     002 footer: live
//!     003 hero: fallback
//!     ...
//!
//! 5 pages, 38 sections: 35 live, 3 fallback
//! ```
//!
//! # Enquire
//!
//! ```text
//! Done
//!     Your enquiry has been sent successfully.
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::form::Notification;
use crate::pages::Route;
use crate::resolve::{Origin, SectionReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::Live => "live",
        Origin::Fallback => "fallback",
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Check
// ============================================================================

/// One route's header line followed by one line per section.
pub fn format_page_report(route: Route, report: &[SectionReport]) -> Vec<String> {
    let mut lines = vec![format!("{} → {}", route.label(), route.path())];
    for (i, section) in report.iter().enumerate() {
        lines.push(format!(
            "{}{} {}: {}",
            indent(1),
            format_index(i + 1),
            section.name,
            origin_label(section.origin)
        ));
    }
    lines
}

/// Totals across every checked route.
pub fn format_check_summary(reports: &[(Route, Vec<SectionReport>)]) -> String {
    let all: Vec<&SectionReport> = reports.iter().flat_map(|(_, r)| r).collect();
    let fallback = all
        .iter()
        .filter(|s| s.origin == Origin::Fallback)
        .count();
    format!(
        "{}, {}: {} live, {} fallback",
        plural(reports.len(), "page", "pages"),
        plural(all.len(), "section", "sections"),
        all.len() - fallback,
        fallback
    )
}

pub fn format_check_output(reports: &[(Route, Vec<SectionReport>)]) -> Vec<String> {
    let mut lines = Vec::new();
    for (route, report) in reports {
        lines.extend(format_page_report(*route, report));
        lines.push(String::new());
    }
    lines.push(format_check_summary(reports));
    lines
}

pub fn print_check_output(reports: &[(Route, Vec<SectionReport>)]) {
    for line in format_check_output(reports) {
        println!("{}", line);
    }
}

// ============================================================================
// Enquire
// ============================================================================

pub fn format_notification(notification: &Notification) -> Vec<String> {
    vec![
        notification.title.to_string(),
        format!("{}{}", indent(1), notification.description),
    ]
}

pub fn print_notification(notification: &Notification) {
    for line in format_notification(notification) {
        println!("{}", line);
    }
}
