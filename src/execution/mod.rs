// Execution module

pub mod capture;
pub mod failure;
pub mod runner;

pub use capture::Output;
pub use failure::SnippetFailure;
pub use runner::{DEFAULT_TIMEOUT_MS, Executor, run_catalog};
