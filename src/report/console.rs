// Console reporter - progress while running, plain report at the end
// Progress and details go to stderr; stdout carries only the rendered report.

use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::check::{ExpectationCheck, get_line_diff};
use crate::cli::ProgressMode;
use crate::state::{ExecutionResult, SnippetStatus, Summary};
use indicatif::{ProgressBar, ProgressStyle};

/// Run settings echoed in verbose mode
#[derive(Debug, Clone)]
pub struct EnvironmentInfo {
    pub parallel_jobs: usize,
    pub timeout_ms: u64,
    pub filter: Option<String>,
}

/// Console reporter
pub struct ConsoleReporter {
    mode: ProgressMode,
    progress_bar: ProgressBar,
    env_info: EnvironmentInfo,
    dots_lock: Mutex<()>,
    dots_count: AtomicUsize,
}

impl ConsoleReporter {
    /// Create new console reporter
    pub fn new(mode: ProgressMode, total_snippets: u64, env_info: EnvironmentInfo) -> Self {
        let progress_bar = if matches!(mode, ProgressMode::Bar) {
            let pb = ProgressBar::new(total_snippets);
            let style = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            pb.set_style(style);
            pb
        } else {
            ProgressBar::hidden()
        };

        Self {
            mode,
            progress_bar,
            env_info,
            dots_lock: Mutex::new(()),
            dots_count: AtomicUsize::new(0),
        }
    }

    /// Failure details: reason, diff for mismatches, captured output otherwise
    pub fn print_failures(&self, results: &[ExecutionResult]) {
        let failed: Vec<&ExecutionResult> = results
            .iter()
            .filter(|r| r.status() == SnippetStatus::Fail)
            .collect();
        if failed.is_empty() {
            return;
        }

        eprintln!("❌ Failed Snippets:");
        for result in failed {
            eprintln!("   • {} ({}ms)", result.snippet_id, result.duration_ms);
            if let Some(reason) = result.failure_reason() {
                eprintln!("      Error: {}", reason);
            }
            if let ExpectationCheck::Mismatched(_) = result.expectation {
                let expected = result.expected_output.as_deref().unwrap_or(&[]);
                eprintln!("{}", get_line_diff(expected, &result.captured_output));
            } else if !result.captured_output.is_empty() {
                eprintln!("      Captured:");
                for line in &result.captured_output {
                    eprintln!("        | {}", line);
                }
            }
        }
        eprintln!();
    }

    /// Print slowest snippets
    pub fn print_slowest(&self, results: &[ExecutionResult], limit: usize) {
        if results.is_empty() {
            return;
        }

        let mut sorted: Vec<&ExecutionResult> = results.iter().collect();
        sorted.sort_by(|a, b| b.duration_ms.cmp(&a.duration_ms));

        eprintln!("🐢 Slowest Snippets:");
        for (i, result) in sorted.iter().take(limit).enumerate() {
            eprintln!("   {}. {} ({}ms)", i + 1, result.snippet_id, result.duration_ms);
        }
        eprintln!();
    }

    fn print_environment(&self, summary: &Summary) {
        eprintln!("🔧 Environment:");
        eprintln!("   • Parallel jobs: {}", self.env_info.parallel_jobs);
        eprintln!("   • Timeout: {}ms per snippet", self.env_info.timeout_ms);
        if let Some(filter) = &self.env_info.filter {
            eprintln!("   • Filter: {}", filter);
        }
        eprintln!("   • Duration: {}ms", summary.metrics().total_duration_ms);
    }
}

impl super::Reporter for ConsoleReporter {
    fn on_snippet_start(&self, snippet_id: &str) {
        if matches!(self.mode, ProgressMode::Verbose) {
            eprintln!("Running {} ... ", snippet_id);
        }
    }

    fn on_snippet_end(&self, result: &ExecutionResult) {
        match self.mode {
            ProgressMode::Dots => {
                let char = match result.status() {
                    SnippetStatus::Pass => ".",
                    SnippetStatus::Fail => "F",
                    SnippetStatus::Unchecked => "u",
                };

                let _guard = self.dots_lock.lock().unwrap_or_else(|e| e.into_inner());
                let mut stderr = std::io::stderr();
                let _ = write!(stderr, "{}", char);
                let _ = stderr.flush();

                let count = self.dots_count.fetch_add(1, Ordering::Relaxed) + 1;
                if count >= 80 {
                    eprintln!();
                    self.dots_count.store(0, Ordering::Relaxed);
                }
            }
            ProgressMode::Bar => {
                self.progress_bar.set_message(result.snippet_id.clone());
                self.progress_bar.inc(1);
            }
            ProgressMode::Verbose => match result.status() {
                SnippetStatus::Pass => eprintln!("✅ PASS {}", result.snippet_id),
                SnippetStatus::Unchecked => eprintln!("🔍 UNCHECKED {}", result.snippet_id),
                SnippetStatus::Fail => eprintln!(
                    "❌ FAIL {}: {}",
                    result.snippet_id,
                    result.failure_reason().unwrap_or_else(|| "unknown error".into())
                ),
            },
            ProgressMode::None => {}
        }
    }

    fn on_suite_end(&self, summary: &Summary) -> anyhow::Result<()> {
        self.progress_bar.finish_and_clear();

        // Ensure newline after dots
        if matches!(self.mode, ProgressMode::Dots) && self.dots_count.load(Ordering::Relaxed) > 0 {
            eprintln!();
        }

        print!("{}", super::render(summary));
        let _ = std::io::stdout().flush();

        if matches!(self.mode, ProgressMode::Verbose) {
            eprintln!();
            self.print_failures(summary.all());
            self.print_slowest(summary.all(), 5);
            self.print_environment(summary);
        }

        Ok(())
    }
}
