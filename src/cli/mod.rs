//! Command-line interface.

pub mod completions;
pub mod output;
pub mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::constants;
use crate::core::graph::GraphFormat;

/// sops-acl - Inspect who can decrypt what in a SOPS secrets repository.
#[derive(Parser, Debug)]
#[command(
    name = "sops-acl",
    about = "Inspect who can decrypt what in a SOPS secrets repository",
    version,
    after_help = "With no view flag the hierarchy tree is shown."
)]
pub struct Cli {
    /// SOPS root directory [default: ./sops]
    #[arg(short, long, env = constants::ROOT_ENV, global = true)]
    pub root: Option<PathBuf>,

    /// Config file [default: ./.sops-acl.toml when present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Plain text output (no colour, no icons)
    #[arg(long)]
    pub basic: bool,

    /// Show the secret access matrix
    #[arg(long)]
    pub table: bool,

    /// Show the public key table
    #[arg(long)]
    pub keys: bool,

    /// Export a graph of the hierarchy
    #[arg(long)]
    pub graph: bool,

    /// Graph output format [default: png]
    #[arg(long, value_enum)]
    pub graph_format: Option<GraphFormat>,

    /// Graph output file name, without extension [default: sops_hierarchy]
    #[arg(long)]
    pub graph_output: Option<String>,

    /// Show every view
    #[arg(long)]
    pub all: bool,

    /// Emit the selected views as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the summary statistics
    #[arg(long)]
    pub no_summary: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Run the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        Some(Command::Completions { shell }) => completions::execute(shell),
        None => view::execute(&cli),
    }
}
