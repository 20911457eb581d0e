//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Interactive binary-search-tree workbench: insert, traverse, search, validate, balance
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Start with an empty tree instead of the configured seed keys
    #[arg(long)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Without a subcommand the interactive menu starts.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show effective configuration
    Config,

    /// Print a config file template
    ConfigTemplate,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
