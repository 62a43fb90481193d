//! Terminal output utilities.

use std::fmt::Display;

/// Format a value as a quoted, right-aligned field of at least `width` chars.
pub fn format_field<T: Display>(value: T, width: usize) -> String {
    let quoted = format!("\"{value}\"");
    format!("{quoted:>width$}")
}
