// Snippet executor
// Runs each snippet body on its own worker thread with a private output sink.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use futures::stream::StreamExt;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::capture::Output;
use super::failure::{SnippetFailure, panic_message};
use crate::catalog::{Catalog, Snippet};
use crate::check::{ExpectationCheck, compare_lines};
use crate::report::{self, Reporter};
use crate::state::{ExecutionResult, Outcome, Summary};

/// Default per-snippet budget in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// What a worker hands back once the body returns
struct Completed {
    output: Output,
    result: Result<Option<String>, SnippetFailure>,
}

/// Snippet executor
///
/// Holds no mutable state; `execute` may be called concurrently.
#[derive(Debug, Clone)]
pub struct Executor {
    timeout: Duration,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }
}

impl Executor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run a single snippet.
    ///
    /// Never fails: body errors, panics and timeouts all come back as a
    /// `Failure` outcome.
    pub async fn execute(&self, snippet: &Snippet) -> ExecutionResult {
        debug!("Executing snippet {}", snippet.id());
        let started = Instant::now();

        let (captured_output, outcome, return_value) = match self.spawn_worker(snippet) {
            Ok(rx) => self.await_worker(snippet.id(), rx).await,
            Err(e) => (
                Vec::new(),
                Err(SnippetFailure::fault(format!("failed to start worker: {}", e))),
                None,
            ),
        };

        // Output from an abandoned worker is unavailable, so there is nothing to compare.
        let expectation = match (&outcome, snippet.expected()) {
            (Err(failure), _) if failure.is_timeout() => ExpectationCheck::NotChecked,
            (_, Some(expected)) => compare_lines(expected, &captured_output),
            (_, None) => ExpectationCheck::NotChecked,
        };

        let outcome = match outcome {
            Ok(()) => Outcome::Success,
            Err(failure) => Outcome::Failure(failure),
        };

        let result = ExecutionResult::new(
            snippet.id(),
            captured_output,
            outcome,
            expectation,
            return_value,
            started.elapsed().as_millis() as u64,
        )
        .with_expected(snippet.expected());
        debug!("Snippet {} finished: {:?}", snippet.id(), result.status());
        result
    }

    fn spawn_worker(&self, snippet: &Snippet) -> std::io::Result<oneshot::Receiver<Completed>> {
        let body = snippet.body();
        let (tx, rx) = oneshot::channel();

        std::thread::Builder::new()
            .name(format!("snippet:{}", snippet.id()))
            .spawn(move || {
                let mut output = Output::new();
                let result = match panic::catch_unwind(AssertUnwindSafe(|| (*body)(&mut output))) {
                    Ok(Ok(value)) => Ok(value),
                    Ok(Err(e)) => Err(SnippetFailure::fault(format!("{:#}", e))),
                    Err(payload) => Err(SnippetFailure::panic(panic_message(payload.as_ref()))),
                };
                // The receiver is gone if the executor already gave up on us.
                let _ = tx.send(Completed { output, result });
            })?;

        Ok(rx)
    }

    async fn await_worker(
        &self,
        id: &str,
        rx: oneshot::Receiver<Completed>,
    ) -> (Vec<String>, Result<(), SnippetFailure>, Option<String>) {
        match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(Completed { output, result })) => {
                let lines = output.into_lines();
                match result {
                    Ok(value) => (lines, Ok(()), value),
                    Err(failure) => (lines, Err(failure), None),
                }
            }
            Ok(Err(_)) => (Vec::new(), Err(SnippetFailure::Abandoned), None),
            Err(_) => {
                let limit_ms = self.timeout.as_millis() as u64;
                warn!("Snippet {} exceeded {}ms, abandoning it", id, limit_ms);
                (Vec::new(), Err(SnippetFailure::Timeout { limit_ms }), None)
            }
        }
    }
}

/// Run every snippet of a frozen catalog with at most `jobs` in flight.
///
/// Results are re-ordered by catalog position before aggregation, so the
/// summary follows declaration order regardless of completion order.
pub async fn run_catalog(
    catalog: &Catalog,
    executor: &Executor,
    jobs: usize,
    reporters: &[Box<dyn Reporter>],
) -> Summary {
    let jobs = jobs.max(1);
    let started = Instant::now();

    let mut indexed: Vec<(usize, ExecutionResult)> =
        futures::stream::iter(catalog.all().iter().enumerate())
            .map(|(index, snippet)| async move {
                for r in reporters {
                    r.on_snippet_start(snippet.id());
                }

                let result = executor.execute(snippet).await;

                for r in reporters {
                    r.on_snippet_end(&result);
                }

                (index, result)
            })
            .buffer_unordered(jobs)
            .collect()
            .await;

    indexed.sort_by_key(|(index, _)| *index);

    let mut summary = report::summarize(indexed.into_iter().map(|(_, result)| result));
    summary.metrics.total_duration_ms = started.elapsed().as_millis() as u64;
    summary.metrics.parallel_jobs = jobs;
    summary.metrics.update_end_time();
    summary
}
