// Report module - aggregation, rendering and live reporters

pub mod console;
pub mod json;
pub mod junit;
pub mod streaming;
pub mod text;

use crate::state::{ExecutionResult, Summary};
use anyhow::Result;
pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use junit::JunitReporter;
pub use streaming::StreamingJsonReporter;
pub use text::render;

/// Reporter trait
pub trait Reporter: Send + Sync {
    /// Called when a snippet starts
    fn on_snippet_start(&self, snippet_id: &str);

    /// Called when a snippet finishes
    fn on_snippet_end(&self, result: &ExecutionResult);

    /// Called once every result is available, in catalog order
    fn on_suite_end(&self, summary: &Summary) -> Result<()>;
}

/// Aggregate results, in the order given, into a summary
pub fn summarize<I>(results: I) -> Summary
where
    I: IntoIterator<Item = ExecutionResult>,
{
    let mut summary = Summary::new();
    for result in results {
        summary.add(result);
    }
    summary
}
