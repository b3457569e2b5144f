//! Per-package action chains
//!
//! Every discovered package gets its own task running its requested chain
//! (bump, publish, or bump-then-publish). Chains for different packages
//! never wait on each other; within one chain, publish only runs after its
//! bump succeeded. Each step reports its own outcome as it completes.

use std::path::Path;
use std::sync::Arc;

use console::style;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use liftoff_core::{ActionError, PackageActions, PackageDescriptor, RunRequest};

/// Spawns and tracks one task per discovered package
pub struct PackageRunner<A: PackageActions> {
    actions: Arc<A>,
    request: Arc<RunRequest>,
    quiet: bool,
    verbose: bool,
    tasks: JoinSet<()>,
}

impl<A: PackageActions> PackageRunner<A> {
    /// Create a runner for one command invocation
    pub fn new(actions: Arc<A>, request: RunRequest, quiet: bool, verbose: bool) -> Self {
        Self {
            actions,
            request: Arc::new(request),
            quiet,
            verbose,
            tasks: JoinSet::new(),
        }
    }

    /// Start the requested chain for one package without waiting on it
    pub fn dispatch(&mut self, pkg: PackageDescriptor) {
        let actions = Arc::clone(&self.actions);
        let request = Arc::clone(&self.request);
        let quiet = self.quiet;
        let verbose = self.verbose;

        self.tasks
            .spawn(async move { run_chain(actions, request, pkg, quiet, verbose).await });
    }

    /// Wait for every in-flight chain to report its outcome
    pub async fn wait(mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "package task failed to complete");
            }
        }
    }
}

async fn run_chain<A: PackageActions>(
    actions: Arc<A>,
    request: Arc<RunRequest>,
    pkg: PackageDescriptor,
    quiet: bool,
    verbose: bool,
) {
    match request.as_ref() {
        RunRequest::Bump { spec, version_args } => {
            run_bump(&*actions, &pkg, spec, version_args, quiet).await;
        }
        RunRequest::Publish { publish_args } => {
            run_publish(&*actions, &pkg, &pkg.path, publish_args, quiet, verbose).await;
        }
        RunRequest::Both {
            spec,
            version_args,
            publish_args,
        } => {
            // A failed bump short-circuits publish for this package only
            if let Some(bumped) = run_bump(&*actions, &pkg, spec, version_args, quiet).await {
                run_publish(&*actions, &pkg, &bumped.path, publish_args, quiet, verbose).await;
            }
        }
    }
}

async fn run_bump<A: PackageActions>(
    actions: &A,
    pkg: &PackageDescriptor,
    spec: &liftoff_core::BumpSpec,
    version_args: &[String],
    quiet: bool,
) -> Option<liftoff_core::BumpOutcome> {
    match actions.bump(&pkg.path, spec, version_args).await {
        Ok(outcome) => {
            info!(package = %pkg.name, version = %outcome.version, "version bumped");
            if !quiet {
                println!(
                    "{} {} to {}",
                    style("Bumped").green().bold(),
                    style(&pkg.name).bold(),
                    outcome.version
                );
            }
            Some(outcome)
        }
        Err(err) => {
            error!(package = %pkg.name, error = %err, "bump failed");
            if !quiet {
                eprintln!(
                    "{} {}: {}",
                    style("Bump failed").red().bold(),
                    style(&pkg.name).bold(),
                    err
                );
            }
            None
        }
    }
}

async fn run_publish<A: PackageActions>(
    actions: &A,
    pkg: &PackageDescriptor,
    dir: &Path,
    publish_args: &[String],
    quiet: bool,
    verbose: bool,
) {
    match actions.publish(dir, publish_args).await {
        Ok(outcome) => {
            info!(package = %pkg.name, "published");
            if !quiet {
                println!(
                    "{} {}",
                    style("Published").green().bold(),
                    style(&pkg.name).bold()
                );
                if verbose && !outcome.stdout.is_empty() {
                    println!("{}", style(&outcome.stdout).dim());
                }
            }
        }
        Err(ActionError::PrivatePackage(name)) => {
            warn!(package = %name, "skipping private package");
            if !quiet {
                println!(
                    "{} {} (private)",
                    style("Skipped").yellow().bold(),
                    style(&name).bold()
                );
            }
        }
        Err(err) => {
            error!(package = %pkg.name, error = %err, "publish failed");
            if !quiet {
                eprintln!(
                    "{} {}: {}",
                    style("Publish failed").red().bold(),
                    style(&pkg.name).bold(),
                    err
                );
            }
        }
    }
}
