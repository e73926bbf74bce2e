// Execution metrics

use serde::Serialize;

/// Timing metadata for a whole catalog run. Never part of the rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionMetrics {
    pub total_duration_ms: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub parallel_jobs: usize,
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self {
            total_duration_ms: 0,
            start_time: crate::time::now_timestamp(),
            end_time: 0,
            parallel_jobs: 1,
        }
    }
}

impl ExecutionMetrics {
    pub fn update_end_time(&mut self) {
        self.end_time = crate::time::now_timestamp();
    }
}
