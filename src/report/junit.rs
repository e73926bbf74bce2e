// JUnit reporter - outputs run results in JUnit XML format

use super::Reporter;
use crate::state::{ExecutionResult, Outcome, SnippetStatus, Summary};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// JUnit reporter
pub struct JunitReporter {
    output_path: PathBuf,
}

impl JunitReporter {
    /// Create new JUnit reporter
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Snippet ids are `group/name`; the group becomes the JUnit class name.
fn split_id(id: &str) -> (&str, &str) {
    match id.rsplit_once('/') {
        Some((group, name)) => (group, name),
        None => ("snippets", id),
    }
}

/// Build the JUnit document for a summary
pub fn to_junit_xml(summary: &Summary) -> String {
    let metrics = summary.metrics();
    let errors = summary
        .all()
        .iter()
        .filter(|r| !r.outcome.is_success())
        .count();
    let failures = summary.failed() - errors;

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<testsuites name=\"snippetrun\" time=\"{:.3}\" tests=\"{}\" failures=\"{}\" errors=\"{}\" skipped=\"{}\">\n",
        metrics.total_duration_ms as f64 / 1000.0,
        summary.total(),
        failures,
        errors,
        summary.unchecked()
    ));
    xml.push_str(&format!(
        "  <testsuite name=\"catalog\" time=\"{:.3}\" tests=\"{}\" failures=\"{}\" errors=\"{}\" skipped=\"{}\">\n",
        metrics.total_duration_ms as f64 / 1000.0,
        summary.total(),
        failures,
        errors,
        summary.unchecked()
    ));

    for result in summary.all() {
        let (classname, name) = split_id(&result.snippet_id);
        xml.push_str(&format!(
            "    <testcase name=\"{}\" classname=\"{}\" time=\"{:.3}\">\n",
            escape_xml(name),
            escape_xml(classname),
            result.duration_ms as f64 / 1000.0
        ));

        match (&result.outcome, result.status()) {
            (Outcome::Failure(failure), _) => {
                let msg = escape_xml(&failure.to_string());
                xml.push_str(&format!(
                    "      <error message=\"{}\" type=\"SnippetFailure\">{}</error>\n",
                    msg, msg
                ));
            }
            (Outcome::Success, SnippetStatus::Fail) => {
                let msg = escape_xml(&result.failure_reason().unwrap_or_default());
                xml.push_str(&format!(
                    "      <failure message=\"{}\" type=\"OutputMismatch\">{}</failure>\n",
                    msg, msg
                ));
            }
            (Outcome::Success, SnippetStatus::Unchecked) => {
                xml.push_str("      <skipped message=\"no expected output\" />\n");
            }
            (Outcome::Success, SnippetStatus::Pass) => {}
        }

        if !result.captured_output.is_empty() {
            xml.push_str(&format!(
                "      <system-out>{}</system-out>\n",
                escape_xml(&result.captured_output.join("\n"))
            ));
        }

        xml.push_str("    </testcase>\n");
    }

    xml.push_str("  </testsuite>\n");
    xml.push_str("</testsuites>\n");
    xml
}

impl Reporter for JunitReporter {
    fn on_snippet_start(&self, _snippet_id: &str) {}

    fn on_snippet_end(&self, _result: &ExecutionResult) {}

    fn on_suite_end(&self, summary: &Summary) -> Result<()> {
        let xml = to_junit_xml(summary);

        let mut file = File::create(&self.output_path).with_context(|| {
            format!(
                "Failed to create JUnit report file: {}",
                self.output_path.display()
            )
        })?;

        file.write_all(xml.as_bytes())
            .context("Failed to write JUnit XML content")?;

        Ok(())
    }
}
