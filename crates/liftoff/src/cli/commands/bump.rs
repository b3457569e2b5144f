//! Bump command

use clap::Args;
use tracing::info;

use liftoff_core::{split_extra_args, BumpSpec, RunRequest};

use super::{run_packages, FilterArgs};
use crate::cli::Cli;

/// Bump the version of every discovered package
#[derive(Debug, Args)]
pub struct BumpCommand {
    /// Bump type: major|minor|patch|premajor|preminor|prepatch|prerelease|from-git, or an exact version
    #[arg(long, default_value = "patch")]
    pub bump_type: String,

    /// Extra arguments forwarded to the version command (whitespace-separated)
    #[arg(long, default_value = "")]
    pub version_args: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(bump_type = %self.bump_type, "executing bump command");

        let spec: BumpSpec = self.bump_type.parse()?;
        let request = RunRequest::Bump {
            spec,
            version_args: split_extra_args(&self.version_args),
        };

        run_packages(cli, self.filter.to_filter(), request)
    }
}
