//! Both command: bump then publish

use clap::Args;
use tracing::info;

use liftoff_core::{split_extra_args, BumpSpec, RunRequest};

use super::{run_packages, FilterArgs};
use crate::cli::Cli;

/// Bump every package, publishing each one whose bump succeeded
#[derive(Debug, Args)]
pub struct BothCommand {
    /// Bump type: major|minor|patch|premajor|preminor|prepatch|prerelease|from-git, or an exact version
    #[arg(long, default_value = "patch")]
    pub bump_type: String,

    /// Extra arguments forwarded to the version command (whitespace-separated)
    #[arg(long, default_value = "")]
    pub version_args: String,

    /// Extra arguments forwarded to the publish command (whitespace-separated)
    #[arg(long, default_value = "")]
    pub publish_args: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl BothCommand {
    /// Execute the both command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(bump_type = %self.bump_type, "executing both command");

        let spec: BumpSpec = self.bump_type.parse()?;
        let request = RunRequest::Both {
            spec,
            version_args: split_extra_args(&self.version_args),
            publish_args: split_extra_args(&self.publish_args),
        };

        run_packages(cli, self.filter.to_filter(), request)
    }
}
