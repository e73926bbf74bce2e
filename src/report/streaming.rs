use crate::state::{ExecutionResult, SnippetStatus, Summary};
use anyhow::Result;
use serde_json::json;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use super::Reporter;

/// Newline-delimited JSON events on stdout, for editor integrations
pub struct StreamingJsonReporter {
    suite_started: AtomicBool,
    snippet_count: usize,
}

impl StreamingJsonReporter {
    pub fn new(snippet_count: usize) -> Self {
        Self {
            suite_started: AtomicBool::new(false),
            snippet_count,
        }
    }

    fn emit(&self, event: &serde_json::Value) {
        let mut stdout = io::stdout().lock();
        if let Ok(s) = serde_json::to_string(event) {
            let _ = writeln!(stdout, "{}", s);
        }
        let _ = stdout.flush();
    }

    fn ensure_suite_started(&self) {
        if !self.suite_started.swap(true, Ordering::SeqCst) {
            self.emit(&json!({
                "event": "suite_start",
                "snippetCount": self.snippet_count,
                "timestamp": crate::time::now_rfc3339()
            }));
        }
    }
}

impl Reporter for StreamingJsonReporter {
    fn on_snippet_start(&self, snippet_id: &str) {
        self.ensure_suite_started();

        self.emit(&json!({
            "event": "snippet_start",
            "snippetId": snippet_id,
            "timestamp": crate::time::now_rfc3339()
        }));
    }

    fn on_snippet_end(&self, result: &ExecutionResult) {
        let event_type = match result.status() {
            SnippetStatus::Pass => "snippet_pass",
            SnippetStatus::Fail => "snippet_fail",
            SnippetStatus::Unchecked => "snippet_unchecked",
        };

        let mut event = json!({
            "event": event_type,
            "snippetId": result.snippet_id,
            "duration": result.duration_ms,
            "output": result.captured_output,
            "timestamp": crate::time::now_rfc3339()
        });

        if let Some(msg) = result.failure_reason() {
            event["message"] = json!(msg);
        }

        if let Some(value) = &result.return_value {
            event["value"] = json!(value);
        }

        self.emit(&event);
    }

    fn on_suite_end(&self, summary: &Summary) -> Result<()> {
        // An empty catalog still gets a start event
        self.ensure_suite_started();

        self.emit(&json!({
            "event": "suite_end",
            "summary": {
                "total": summary.total(),
                "passed": summary.passed(),
                "failed": summary.failed(),
                "unchecked": summary.unchecked(),
                "duration": summary.metrics.total_duration_ms
            },
            "timestamp": crate::time::now_rfc3339()
        }));

        Ok(())
    }
}
