// State module - run results and aggregate counts

pub mod metrics;
pub mod result;

pub use metrics::ExecutionMetrics;
pub use result::{ExecutionResult, Outcome};

use serde::Serialize;

/// Aggregate of one full catalog run
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    unchecked: usize,
    results: Vec<ExecutionResult>,
    pub metrics: ExecutionMetrics,
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl Summary {
    pub fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            unchecked: 0,
            results: Vec::new(),
            metrics: ExecutionMetrics::default(),
        }
    }

    /// Append a result; results keep the order they are added in
    pub fn add(&mut self, result: ExecutionResult) {
        self.total += 1;

        match result.status() {
            SnippetStatus::Pass => self.passed += 1,
            SnippetStatus::Fail => self.failed += 1,
            SnippetStatus::Unchecked => self.unchecked += 1,
        }

        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn unchecked(&self) -> usize {
        self.unchecked
    }

    pub fn get(&self, index: usize) -> Option<&ExecutionResult> {
        self.results.get(index)
    }

    pub fn all(&self) -> &[ExecutionResult] {
        &self.results
    }

    /// True when no snippet failed, errored or timed out
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }

    pub fn metrics(&self) -> &ExecutionMetrics {
        &self.metrics
    }
}

/// Snippet status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SnippetStatus {
    Pass,
    Fail,
    Unchecked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::ExpectationCheck;
    use crate::execution::SnippetFailure;

    fn make(id: &str, outcome: Outcome, expectation: ExpectationCheck) -> ExecutionResult {
        ExecutionResult::new(id, Vec::new(), outcome, expectation, None, 0)
    }

    #[test]
    fn test_counts_partition_total() {
        let mut summary = Summary::new();
        summary.add(make("a", Outcome::Success, ExpectationCheck::Matched));
        summary.add(make("b", Outcome::Success, ExpectationCheck::NotChecked));
        summary.add(make(
            "c",
            Outcome::Failure(SnippetFailure::fault("x")),
            ExpectationCheck::NotChecked,
        ));

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.unchecked(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(
            summary.passed() + summary.failed() + summary.unchecked(),
            summary.total()
        );
        assert!(!summary.all_passed());
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_empty_summary_passes() {
        let summary = Summary::default();
        assert_eq!(summary.total(), 0);
        assert!(summary.all_passed());
        assert_eq!(summary.exit_code(), 0);
        assert!(summary.get(0).is_none());
    }

    #[test]
    fn test_order_preserved() {
        let mut summary = Summary::new();
        for id in ["z", "a", "m"] {
            summary.add(make(id, Outcome::Success, ExpectationCheck::NotChecked));
        }
        let ids: Vec<&str> = summary.all().iter().map(|r| r.snippet_id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
