// Main entry point for snippetrun

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use snippetrun::cli::{Cli, Commands};
use snippetrun::commands;
use snippetrun::config::Config;
use snippetrun::lessons;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    snippetrun::logging::init(cli.verbose);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    if cli.verbose {
        info!("Starting snippetrun v{}", env!("CARGO_PKG_VERSION"));
    }

    // Load configuration from file (if exists)
    let loaded = Config::load();
    let config = loaded.as_ref().map(|(c, _)| c.clone()).unwrap_or_default();

    if !cli.color_enabled(&config) {
        console::set_colors_enabled(false);
    }

    if cli.config {
        commands::handle_show_config(&cli, loaded.as_ref())?;
        return Ok(0);
    }

    if let Some(config_file) = &cli.init_config {
        commands::handle_init_config(config_file)?;
        return Ok(0);
    }

    if let Some(shell_type) = &cli.completion {
        commands::handle_completion(shell_type)?;
        return Ok(0);
    }

    let catalog = lessons::catalog()?;

    match &cli.command {
        Some(Commands::List(args)) => {
            commands::handle_list(&catalog, args)?;
            Ok(0)
        }
        // Implicit run when no subcommand is given
        Some(Commands::Run(_)) | None => {
            let settings = cli.run_settings(&config)?;
            let summary = commands::run_snippets(&catalog, &settings).await?;
            Ok(summary.exit_code())
        }
    }
}
