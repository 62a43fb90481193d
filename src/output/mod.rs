//! Output formatting for resolver results.
//!
//! - [`summary`] - JSON and per account/region table output
//! - [`terminal`] - field formatting helpers

mod summary;
mod terminal;

pub use summary::{print_json, print_summary, summary_rows, SummaryRow};
pub use terminal::format_field;
