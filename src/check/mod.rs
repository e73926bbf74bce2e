// Check module - expected-output comparison

pub mod comparator;
pub mod diff;

pub use comparator::{ExpectationCheck, Mismatch, compare_lines};
pub use diff::get_line_diff;
