pub mod catalog;
pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod execution;
pub mod lessons;
pub mod logging;
pub mod report;
pub mod state;
pub mod time;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, Snippet};
pub use execution::{Executor, Output};
pub use report::{render, summarize};
pub use state::{ExecutionResult, Summary};
