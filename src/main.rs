// ABOUTME: Entry point for the srcd CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, ComponentsCommand};
use srcd_engine::components::{ComponentManager, ListOptions, Registry};
use srcd_engine::config::Config;
use srcd_engine::error::Result;
use srcd_engine::output::{Output, OutputMode};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,srcd=info,srcd_engine=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .init();

    let mode = OutputMode::from_flags(cli.quiet, cli.json);

    if let Err(e) = run(cli, mode).await {
        let output = Output::new(mode);
        output.error(&e.to_string());
        if let Some(hint) = e.hint() {
            output.hint(hint);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mode: OutputMode) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };

    let runtime = commands::connect_to_runtime(&config).await?;
    let manager = ComponentManager::new(runtime, Registry::default())
        .with_image_removal_timeout(config.purge.image_timeout);
    let output = Output::new(mode);

    match cli.command {
        Commands::Components { command } => match command {
            ComponentsCommand::List {
                namespace,
                known,
                tag,
            } => {
                let options = ListOptions {
                    namespace,
                    known,
                    version: tag,
                };
                commands::list(&manager, options, &output).await
            }
            ComponentsCommand::Install { id } => commands::install(&manager, &id, output).await,
            ComponentsCommand::Status { id } => commands::status(&manager, &id, &output).await,
        },
        Commands::Prune => commands::prune(&manager, output).await,
    }
}
