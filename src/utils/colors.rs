//! ANSI color helper utilities for terminal output.

use crate::models::VisitStatus;
use crate::models::columns::is_blank;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Grey out a blank or sentinel cell, leave anything else untouched.
///
/// Esempio:
/// `colorize_optional("-")` → "<grey>-<reset>"
pub fn colorize_optional(value: &str) -> String {
    if is_blank(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// IN → green, OUT → red.
pub fn colorize_status(status: VisitStatus) -> String {
    match status {
        VisitStatus::In => format!("{GREEN}{status}{RESET}"),
        VisitStatus::Out => format!("{RED}{status}{RESET}"),
    }
}
