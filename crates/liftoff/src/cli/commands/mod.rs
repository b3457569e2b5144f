//! Command implementations

mod both;
mod bump;
mod list;
mod publish;

pub use both::BothCommand;
pub use bump::BumpCommand;
pub use list::ListCommand;
pub use publish::PublishCommand;

use std::sync::Arc;

use clap::Args;
use tracing::info;

use liftoff_core::{DirectoryWalker, FilterSet, PackageActions, RunRequest};
use liftoff_npm::{NpmCli, DEPENDENCY_DIR};

use crate::cli::runner::PackageRunner;
use crate::cli::Cli;

/// Include/exclude filtering shared by every command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Directory names to exclude from the walk (node_modules is always excluded)
    #[arg(long, num_args = 1..)]
    pub exclude: Vec<String>,

    /// Only these directory names are considered at each level
    #[arg(long, num_args = 1..)]
    pub include: Vec<String>,
}

impl FilterArgs {
    /// Resolve the CLI lists into a FilterSet, merging the implicit exclusions
    pub fn to_filter(&self) -> FilterSet {
        FilterSet::resolve(
            self.include.clone(),
            self.exclude.clone(),
            &[DEPENDENCY_DIR],
        )
    }
}

/// Walk the tree under the current directory and run `request` against
/// every discovered package.
///
/// Each package's chain runs as its own task; discovery does not wait for
/// any chain to finish, and the process only exits once all chains have
/// reported their outcome.
pub(crate) fn run_packages(cli: &Cli, filter: FilterSet, request: RunRequest) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let npm = Arc::new(NpmCli::new());
        let walker = DirectoryWalker::new(filter, npm.manifest_name());
        let mut runner = PackageRunner::new(npm, request, cli.quiet, cli.verbose);

        let count = walker.walk(&root, |pkg| runner.dispatch(pkg)).await;
        info!(count, root = %root.display(), "dispatched all discovered packages");

        runner.wait().await;
    });

    Ok(())
}
