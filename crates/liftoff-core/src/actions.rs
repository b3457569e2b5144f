//! Collaborator seam for the version-bump and publish operations

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::BumpSpec;
use crate::error::ActionError;

/// What to run for each discovered package
#[derive(Debug, Clone)]
pub enum RunRequest {
    /// Bump the version only
    Bump {
        spec: BumpSpec,
        version_args: Vec<String>,
    },
    /// Publish only
    Publish { publish_args: Vec<String> },
    /// Bump, then publish if the bump succeeded
    Both {
        spec: BumpSpec,
        version_args: Vec<String>,
        publish_args: Vec<String>,
    },
}

/// Successful version bump for one package
#[derive(Debug, Clone)]
pub struct BumpOutcome {
    /// Package directory the bump ran in
    pub path: PathBuf,
    /// New version as reported by the collaborator (e.g. "v1.2.4")
    pub version: String,
}

/// Successful publish for one package
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// Collaborator output, e.g. the registry's publish report
    pub stdout: String,
}

/// Trait for the external bump/publish collaborator.
///
/// Both operations are suspension points; neither blocks the walk. Failure
/// of either is isolated to the package it ran against.
#[async_trait]
pub trait PackageActions: Send + Sync + 'static {
    /// File name whose presence marks a directory as a package root
    fn manifest_name(&self) -> &'static str;

    /// Check for the manifest marker at the top level of `dir`
    fn detect(&self, dir: &Path) -> bool {
        dir.join(self.manifest_name()).exists()
    }

    /// Bump the package version in `dir`
    async fn bump(
        &self,
        dir: &Path,
        spec: &BumpSpec,
        extra_args: &[String],
    ) -> std::result::Result<BumpOutcome, ActionError>;

    /// Publish the package in `dir` to the registry
    async fn publish(
        &self,
        dir: &Path,
        extra_args: &[String],
    ) -> std::result::Result<PublishOutcome, ActionError>;
}
