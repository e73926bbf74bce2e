// Run command - execute the snippet catalog

use anyhow::Result;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::cli::{LogFormat, RunSettings};
use crate::execution::{self, Executor};
use crate::report::{self, Reporter};
use crate::state::Summary;

/// Assemble the reporters a run should notify
pub fn build_reporters(settings: &RunSettings, snippet_count: usize) -> Vec<Box<dyn Reporter>> {
    let mut reporters: Vec<Box<dyn Reporter>> = Vec::new();

    if settings.stream {
        reporters.push(Box::new(report::StreamingJsonReporter::new(snippet_count)));
    } else {
        let env_info = report::console::EnvironmentInfo {
            parallel_jobs: settings.parallel_jobs,
            timeout_ms: settings.timeout_ms,
            filter: settings.filter.clone(),
        };
        reporters.push(Box::new(report::ConsoleReporter::new(
            settings.progress,
            snippet_count as u64,
            env_info,
        )));
    }

    if let Some(format) = settings.log_format {
        if let Some(output_path) = &settings.log_output {
            match format {
                LogFormat::Json => {
                    reporters.push(Box::new(report::JsonReporter::new(output_path.clone())));
                }
                LogFormat::JUnit => {
                    reporters.push(Box::new(report::JunitReporter::new(output_path.clone())));
                }
            }
        } else {
            warn!("--log-format specified but --log-output is missing. File report will be skipped.");
        }
    }

    reporters
}

/// Run the (optionally filtered) catalog and notify every reporter.
pub async fn run_snippets(catalog: &Catalog, settings: &RunSettings) -> Result<Summary> {
    let catalog = match &settings.filter {
        Some(pattern) => {
            let filtered = catalog.filtered(pattern);
            info!(
                "Filter '{}' selected {} of {} snippet(s)",
                pattern,
                filtered.len(),
                catalog.len()
            );
            filtered
        }
        None => catalog.clone(),
    };

    if catalog.is_empty() {
        warn!("No snippets selected");
    }

    info!(
        "Running {} snippet(s) with {} job(s), {}ms timeout",
        catalog.len(),
        settings.parallel_jobs,
        settings.timeout_ms
    );

    let reporters = build_reporters(settings, catalog.len());
    let executor = Executor::new(Duration::from_millis(settings.timeout_ms));

    let summary =
        execution::run_catalog(&catalog, &executor, settings.parallel_jobs, &reporters).await;

    finish_reporters(&reporters, &summary)?;

    Ok(summary)
}

/// Give every reporter its `on_suite_end`, then surface the first failure.
pub fn finish_reporters(reporters: &[Box<dyn Reporter>], summary: &Summary) -> Result<()> {
    let mut first_error = None;

    for r in reporters {
        if let Err(e) = r.on_suite_end(summary) {
            error!("Reporter failed: {:#}", e);
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
