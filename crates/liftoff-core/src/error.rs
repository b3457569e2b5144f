//! Error types for liftoff
//!
//! Errors here are terminal-but-local: traversal and action failures are
//! logged where they happen and never aggregated; only configuration errors
//! abort a run, before the walk starts.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognized bump specifier
    #[error("Invalid bump type '{0}': expected major|minor|patch|premajor|preminor|prepatch|prerelease|from-git or an exact version")]
    InvalidBumpType(String),

    /// Context directory does not exist
    #[error("Context directory not found: {0}")]
    ContextNotFound(PathBuf),

    /// Context path exists but is not a directory
    #[error("Context is not a directory: {0}")]
    ContextNotADirectory(PathBuf),
}

/// Traversal errors, isolated to one subtree and logged at the failure site
#[derive(Debug, Error)]
pub enum WalkError {
    /// Failed to list a directory's entries
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read one entry's file type
    #[error("Failed to read metadata for {path}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors from the bump/publish collaborators, isolated to one package
#[derive(Debug, Error)]
pub enum ActionError {
    /// Package manifest not found
    #[error("Package manifest not found at {0}")]
    ManifestNotFound(PathBuf),

    /// Failed to parse manifest
    #[error("Failed to parse manifest: {0}")]
    ManifestParse(String),

    /// The command binary could not be spawned
    #[error("Command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },

    /// Version bump exited non-zero
    #[error("Failed to bump version: {0}")]
    BumpFailed(String),

    /// Publish exited non-zero
    #[error("Failed to publish package: {0}")]
    PublishFailed(String),

    /// Package is marked private and cannot be published
    #[error("Package '{0}' is marked as private")]
    PrivatePackage(String),
}
