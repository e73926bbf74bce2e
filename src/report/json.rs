// JSON reporter - writes the run summary to a JSON file

use super::Reporter;
use crate::state::{ExecutionResult, Summary};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;

/// JSON reporter
pub struct JsonReporter {
    output_path: PathBuf,
}

impl JsonReporter {
    /// Create new JSON reporter
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl Reporter for JsonReporter {
    fn on_snippet_start(&self, _snippet_id: &str) {}

    fn on_snippet_end(&self, _result: &ExecutionResult) {}

    fn on_suite_end(&self, summary: &Summary) -> Result<()> {
        let file = File::create(&self.output_path).with_context(|| {
            format!(
                "Failed to create JSON report file: {}",
                self.output_path.display()
            )
        })?;

        serde_json::to_writer_pretty(file, summary)
            .context("Failed to serialize run summary to JSON")?;

        Ok(())
    }
}
