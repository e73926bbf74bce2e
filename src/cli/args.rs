// CLI argument definitions using Clap

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Progress indicator modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Dots,
    Bar,
    None,
    Verbose,
}

impl std::str::FromStr for ProgressMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dots" => Ok(Self::Dots),
            "bar" => Ok(Self::Bar),
            "none" => Ok(Self::None),
            "verbose" => Ok(Self::Verbose),
            other => bail!(
                "Unsupported progress mode '{}': expected auto, dots, bar, none or verbose",
                other
            ),
        }
    }
}

/// File report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    JUnit,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "junit" => Some(Self::JUnit),
            _ => None,
        }
    }
}

/// Run, isolate and verify small executable lesson snippets
#[derive(Parser, Debug)]
#[command(name = "snippetrun")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run the snippet catalog and check each snippet's output", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Flatten RunArgs so `snippetrun --filter map` works without the `run` subcommand.
    #[command(flatten)]
    pub run_args: RunArgs,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(short = 'c', long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Print shell completion script (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run snippets (default)
    Run(RunArgs),

    /// List snippet ids
    List(ListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Only run snippets whose id contains this substring
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Run snippets in parallel with N workers, or "auto"
    #[arg(short = 'p', long)]
    pub parallel: Option<String>,

    /// Per-snippet timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Progress indicator style (auto, dots, bar, none, verbose)
    #[arg(long)]
    pub progress: Option<String>,

    /// Also write a report file in this format (json, junit)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Output file for the report (use with --log-format)
    #[arg(long, value_name = "OUTPUT_FILE")]
    pub log_output: Option<PathBuf>,

    /// Output streaming JSON events instead of the text report
    #[arg(long, default_value_t = false)]
    pub stream: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only list snippets whose id contains this substring
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ListArgs {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Effective run settings after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub filter: Option<String>,
    pub parallel_jobs: usize,
    pub timeout_ms: u64,
    pub progress: ProgressMode,
    pub log_format: Option<LogFormat>,
    pub log_output: Option<PathBuf>,
    pub stream: bool,
}

/// Parse a worker count ("auto" means one per available core)
pub fn parse_parallel(value: &str) -> Result<usize> {
    if value.eq_ignore_ascii_case("auto") {
        return Ok(std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4));
    }

    match value.parse::<usize>() {
        Ok(0) => bail!("--parallel must be at least 1"),
        Ok(n) => Ok(n),
        Err(_) => bail!("Invalid --parallel value '{}': expected a number or 'auto'", value),
    }
}

impl Cli {
    /// Helper to get effective RunArgs
    pub fn get_run_args(&self) -> &RunArgs {
        match &self.command {
            Some(Commands::Run(args)) => args,
            _ => &self.run_args,
        }
    }

    /// Get progress mode
    pub fn progress_mode(&self, configured: &str) -> Result<ProgressMode> {
        let progress = self.get_run_args().progress.as_deref().unwrap_or(configured);

        match progress {
            "auto" => Ok(if self.verbose {
                ProgressMode::Verbose
            } else {
                ProgressMode::Dots
            }),
            other => other.parse(),
        }
    }

    /// Merge CLI flags over the config file; CLI wins
    pub fn run_settings(&self, config: &Config) -> Result<RunSettings> {
        let args = self.get_run_args();

        let parallel = args
            .parallel
            .as_deref()
            .unwrap_or(config.general.parallel.as_str());
        let parallel_jobs = parse_parallel(parallel)?;

        let timeout_ms = args.timeout.unwrap_or(config.general.timeout_ms);
        if timeout_ms == 0 {
            bail!("Timeout must be at least 1ms");
        }

        let log_format = match args.log_format.as_deref().or(config.general.log_format.as_deref()) {
            Some(value) => match LogFormat::parse(value) {
                Some(format) => Some(format),
                None => bail!("Unsupported log format '{}': expected json or junit", value),
            },
            None => None,
        };

        let log_output = args
            .log_output
            .clone()
            .or_else(|| config.general.log_output.as_ref().map(PathBuf::from));

        Ok(RunSettings {
            filter: args.filter.clone(),
            parallel_jobs,
            timeout_ms,
            progress: self.progress_mode(&config.progress.mode)?,
            log_format,
            log_output,
            stream: args.stream,
        })
    }

    /// Colors are on unless disabled by flag or config
    pub fn color_enabled(&self, config: &Config) -> bool {
        !self.no_color && config.progress.color
    }
}
