//! Output formatting for the IPv4 report.
//!
//! - [`table`] - fixed-order row building (value strings, `N/A` sentinel)
//! - [`terminal`] - aligned, colorized terminal rendering

mod table;
mod terminal;

pub use table::{build_rows, IpRow, NOT_APPLICABLE};
pub use terminal::{pad_field, render};
