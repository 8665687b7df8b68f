// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srcd")]
#[command(about = "Manage the containers, volumes and images behind the source{d} engine")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print only final results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to srcd.yml in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage installed components
    Components {
        #[command(subcommand)]
        command: ComponentsCommand,
    },

    /// Remove all containers, volumes and images created by srcd
    Prune,
}

#[derive(Subcommand)]
pub enum ComponentsCommand {
    /// List installed components
    List {
        /// Only show images from this namespace
        #[arg(long)]
        namespace: Option<String>,

        /// Only show images of components srcd knows how to run
        #[arg(long)]
        known: bool,

        /// Only show images with this tag
        #[arg(long = "version", value_name = "TAG")]
        tag: Option<String>,
    },

    /// Install a component by image reference or component name
    Install {
        /// Image reference (e.g. srcd/gitbase:v0.17.0) or name (e.g. srcd-cli-gitbase)
        id: String,
    },

    /// Show whether a component is installed
    Status {
        /// Image reference or component name
        id: String,
    },
}
