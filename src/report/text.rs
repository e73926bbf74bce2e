// Plain-text report rendering
// Output depends only on ids, outcomes and verdicts, never on timing.

use std::borrow::Cow;
use std::fmt::Write;

use crate::check::ExpectationCheck;
use crate::state::{ExecutionResult, Outcome, SnippetStatus, Summary};

/// Render one line per snippet in summary order, then a totals line.
pub fn render(summary: &Summary) -> String {
    let mut out = String::new();

    for result in summary.all() {
        let _ = writeln!(out, "{}", render_line(result));
    }

    let _ = writeln!(
        out,
        "total: {}, passed: {}, failed: {}, unchecked: {}",
        summary.total(),
        summary.passed(),
        summary.failed(),
        summary.unchecked()
    );

    out
}

fn render_line(result: &ExecutionResult) -> String {
    let tag = match result.status() {
        SnippetStatus::Pass => "PASS",
        SnippetStatus::Fail => "FAIL",
        SnippetStatus::Unchecked => "UNCHECKED",
    };

    let outcome = match &result.outcome {
        Outcome::Success => "success".to_string(),
        Outcome::Failure(failure) => format!("failure ({})", failure),
    };

    let verdict = match &result.expectation {
        ExpectationCheck::Matched => "expected output matched".to_string(),
        ExpectationCheck::Mismatched(m) => format!("expected output mismatched at {}", m),
        ExpectationCheck::NotChecked => "not checked".to_string(),
    };

    format!(
        "{:<9} {}: {}, {}",
        tag,
        single_line(&result.snippet_id),
        single_line(&outcome),
        verdict
    )
}

/// Escape control characters so a value never spans report lines
fn single_line(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}
