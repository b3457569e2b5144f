//! Liftoff Core - package discovery and action dispatch
//!
//! This crate provides the directory walk that discovers publishable
//! packages, the filter/configuration resolution that drives it, and the
//! collaborator seam the bump/publish operations plug into.

pub mod actions;
pub mod config;
pub mod error;
pub mod walker;

pub use actions::{BumpOutcome, PackageActions, PublishOutcome, RunRequest};
pub use config::{resolve_context, split_extra_args, BumpSpec, FilterSet};
pub use error::{ActionError, ConfigError, WalkError};
pub use walker::{DirectoryWalker, PackageDescriptor};
