//! CLI definition and command handling

pub mod commands;
pub mod runner;

use clap::{Parser, Subcommand};

use commands::{BothCommand, BumpCommand, ListCommand, PublishCommand};

/// Liftoff - bulk version bump and publish for npm package trees
#[derive(Debug, Parser)]
#[command(name = "liftoff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Run in a sub-directory of the invocation directory
    #[arg(short = 'C', long, global = true)]
    pub context: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bump the version of every discovered package
    Bump(BumpCommand),

    /// Publish every discovered package
    Publish(PublishCommand),

    /// Bump every package, publishing each one whose bump succeeded
    Both(BothCommand),

    /// List discovered packages without acting on them
    List(ListCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // The working directory changes at most once, before any walk starts
        if let Some(context) = &self.context {
            let target = liftoff_core::resolve_context(&std::env::current_dir()?, context)?;
            std::env::set_current_dir(&target)?;
        }

        match self.command {
            Commands::Bump(ref cmd) => cmd.execute(&self),
            Commands::Publish(ref cmd) => cmd.execute(&self),
            Commands::Both(ref cmd) => cmd.execute(&self),
            Commands::List(ref cmd) => cmd.execute(&self),
        }
    }
}
