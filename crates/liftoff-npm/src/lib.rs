//! npm collaborator for liftoff
//!
//! Implements the bump and publish operations by shelling out to the `npm`
//! binary with the package directory as the working directory. Pass-through
//! arguments from the CLI are forwarded verbatim.

mod manifest;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use liftoff_core::actions::{BumpOutcome, PackageActions, PublishOutcome};
use liftoff_core::config::BumpSpec;
use liftoff_core::error::ActionError;

pub use manifest::PackageJson;

/// File whose presence marks a directory as an npm package root
pub const MANIFEST_NAME: &str = "package.json";

/// Installed-dependency directory, never publishable
pub const DEPENDENCY_DIR: &str = "node_modules";

/// The npm command-line collaborator
#[derive(Debug, Clone, Default)]
pub struct NpmCli;

impl NpmCli {
    /// Create a new npm collaborator
    pub fn new() -> Self {
        Self
    }

    /// Get the package.json path
    fn manifest_path(&self, dir: &Path) -> PathBuf {
        dir.join(MANIFEST_NAME)
    }

    async fn run(
        &self,
        dir: &Path,
        subcommand: &str,
        args: &[String],
    ) -> std::result::Result<std::process::Output, ActionError> {
        let mut cmd = Command::new("npm");
        cmd.arg(subcommand).args(args).current_dir(dir);

        debug!(path = %dir.display(), subcommand, ?args, "running npm");

        cmd.output().await.map_err(|e| ActionError::CommandFailed {
            command: format!("npm {}", subcommand),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl PackageActions for NpmCli {
    fn manifest_name(&self) -> &'static str {
        MANIFEST_NAME
    }

    async fn bump(
        &self,
        dir: &Path,
        spec: &BumpSpec,
        extra_args: &[String],
    ) -> std::result::Result<BumpOutcome, ActionError> {
        let mut args = vec![spec.to_string()];
        args.extend_from_slice(extra_args);

        let output = self.run(dir, "version", &args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ActionError::BumpFailed(stderr.trim().to_string()));
        }

        // npm version prints the new version, e.g. "v1.2.4"
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(BumpOutcome {
            path: dir.to_path_buf(),
            version,
        })
    }

    async fn publish(
        &self,
        dir: &Path,
        extra_args: &[String],
    ) -> std::result::Result<PublishOutcome, ActionError> {
        let manifest = PackageJson::load(&self.manifest_path(dir))?;
        if manifest.is_private() {
            return Err(ActionError::PrivatePackage(manifest.name));
        }

        let output = self.run(dir, "publish", extra_args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ActionError::PublishFailed(stderr.trim().to_string()));
        }

        Ok(PublishOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        })
    }
}
