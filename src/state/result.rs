// Execution result structures

use crate::check::ExpectationCheck;
use crate::execution::SnippetFailure;
use crate::state::SnippetStatus;
use serde::Serialize;

/// How the body itself ended, independent of any expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "failure", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure(SnippetFailure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn failure(&self) -> Option<&SnippetFailure> {
        match self {
            Self::Success => None,
            Self::Failure(f) => Some(f),
        }
    }
}

/// Per-snippet outcome record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub snippet_id: String,
    pub captured_output: Vec<String>,
    pub outcome: Outcome,
    pub expectation: ExpectationCheck,
    pub expected_output: Option<Vec<String>>,
    pub return_value: Option<String>,
    pub duration_ms: u64,
    pub executed_at: i64,
}

impl ExecutionResult {
    pub fn new(
        snippet_id: impl Into<String>,
        captured_output: Vec<String>,
        outcome: Outcome,
        expectation: ExpectationCheck,
        return_value: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            snippet_id: snippet_id.into(),
            captured_output,
            outcome,
            expectation,
            expected_output: None,
            return_value,
            duration_ms,
            executed_at: crate::time::now_timestamp(),
        }
    }

    pub fn with_expected(mut self, expected: Option<&[String]>) -> Self {
        self.expected_output = expected.map(<[String]>::to_vec);
        self
    }

    /// Classification used for counting and exit codes
    pub fn status(&self) -> SnippetStatus {
        match (&self.outcome, &self.expectation) {
            (Outcome::Failure(_), _) => SnippetStatus::Fail,
            (Outcome::Success, ExpectationCheck::Mismatched(_)) => SnippetStatus::Fail,
            (Outcome::Success, ExpectationCheck::Matched) => SnippetStatus::Pass,
            (Outcome::Success, ExpectationCheck::NotChecked) => SnippetStatus::Unchecked,
        }
    }

    /// Short reason for a failed snippet
    pub fn failure_reason(&self) -> Option<String> {
        match (&self.outcome, &self.expectation) {
            (Outcome::Failure(f), _) => Some(f.to_string()),
            (Outcome::Success, ExpectationCheck::Mismatched(m)) => {
                Some(format!("output mismatch at {}", m))
            }
            _ => None,
        }
    }
}
