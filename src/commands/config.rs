// Config commands - show effective configuration, write a default file

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{self, Config};

const PRECEDENCE: &str = "\nConfiguration precedence:
  1. Command-line arguments (highest)
  2. Configuration file
  3. Built-in defaults (lowest)";

pub fn handle_show_config(cli: &Cli, loaded: Option<&(Config, PathBuf)>) -> Result<()> {
    let config = loaded.map(|(c, _)| c.clone()).unwrap_or_default();
    let settings = cli.run_settings(&config)?;

    println!("Current configuration:");
    println!("\n  Effective run settings:");
    println!("    Parallel jobs: {}", settings.parallel_jobs);
    println!("    Timeout: {}ms", settings.timeout_ms);
    println!("    Progress: {:?}", settings.progress);
    if let Some(filter) = &settings.filter {
        println!("    Filter: {}", filter);
    }
    if let Some(format) = settings.log_format {
        println!("    Log format: {:?}", format);
    }
    if let Some(output) = &settings.log_output {
        println!("    Log output: {}", output.display());
    }
    println!(
        "    Color: {}",
        if cli.color_enabled(&config) {
            "enabled"
        } else {
            "disabled"
        }
    );

    match loaded {
        Some((_, path)) => println!("\n  Configuration file loaded: {}", path.display()),
        None => {
            println!("\n  No configuration file loaded");
            println!(
                "  Create one with: snippetrun --init-config {}",
                config::CONFIG_FILE_NAME
            );
        }
    }

    println!("{}", PRECEDENCE);
    Ok(())
}

pub fn handle_init_config(path: &Path) -> Result<()> {
    let toml_content = Config::default().to_toml();
    std::fs::write(path, toml_content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Configuration file created: {}", path.display());
    println!("\nYou can now edit the file to customize your settings.");
    println!("{}", PRECEDENCE);
    Ok(())
}
