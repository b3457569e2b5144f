//! Publish command

use clap::Args;
use tracing::info;

use liftoff_core::{split_extra_args, RunRequest};

use super::{run_packages, FilterArgs};
use crate::cli::Cli;

/// Publish every discovered package
#[derive(Debug, Args)]
pub struct PublishCommand {
    /// Extra arguments forwarded to the publish command (whitespace-separated)
    #[arg(long, default_value = "")]
    pub publish_args: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl PublishCommand {
    /// Execute the publish command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing publish command");

        let request = RunRequest::Publish {
            publish_args: split_extra_args(&self.publish_args),
        };

        run_packages(cli, self.filter.to_filter(), request)
    }
}
