//! Package discovery walk
//!
//! Depth-first descent from a root directory, classifying each kept entry
//! as a package root (manifest marker present) or a container to descend
//! into. Read failures are isolated to the entry they hit; the walk never
//! aborts because one subtree is unreadable.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::FilterSet;
use crate::error::WalkError;

/// A directory confirmed to contain the package manifest marker
#[derive(Debug, Clone, Serialize)]
pub struct PackageDescriptor {
    /// Absolute path to the package directory
    pub path: PathBuf,
    /// Derived package name (directory base name)
    pub name: String,
}

/// Recursive package discovery over a directory tree
pub struct DirectoryWalker {
    filter: FilterSet,
    marker: &'static str,
}

impl DirectoryWalker {
    /// Create a walker with a resolved filter and a manifest marker name
    pub fn new(filter: FilterSet, marker: &'static str) -> Self {
        Self { filter, marker }
    }

    /// Walk the tree under `root`, handing each discovered package to `emit`.
    ///
    /// `emit` runs as soon as a package is classified, so dispatch
    /// interleaves with discovery of the remaining tree. Returns the number
    /// of packages emitted. The root directory itself is never a candidate;
    /// only entries below it are classified.
    ///
    /// A package directory is a leaf for discovery: nested directories with
    /// their own manifests are not visited. Sibling order follows directory
    /// enumeration order and is not guaranteed stable.
    pub async fn walk<F>(&self, root: &Path, mut emit: F) -> usize
    where
        F: FnMut(PackageDescriptor),
    {
        debug!(root = %root.display(), "starting package discovery");
        let mut emitted = 0;
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(source) => {
                    let err = WalkError::ReadDir { path: dir, source };
                    warn!(error = %err, "skipping unreadable directory");
                    continue;
                }
            };

            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(source) => {
                        let err = WalkError::ReadDir {
                            path: dir.clone(),
                            source,
                        };
                        warn!(error = %err, "stopping enumeration of directory");
                        break;
                    }
                };

                let path = entry.path();
                let file_type = match entry.file_type().await {
                    Ok(file_type) => file_type,
                    Err(source) => {
                        let err = WalkError::Stat { path, source };
                        warn!(error = %err, "skipping entry");
                        continue;
                    }
                };

                // Symlinks are not followed; descent is the only way down.
                if !file_type.is_dir() {
                    continue;
                }

                let name = entry.file_name().to_string_lossy().into_owned();
                if !self.filter.allows(&name) {
                    debug!(name, "filtered out");
                    continue;
                }

                if path.join(self.marker).exists() {
                    debug!(package = name, path = %path.display(), "discovered package");
                    emitted += 1;
                    emit(PackageDescriptor { path, name });
                } else {
                    debug!(name, "not a package, descending");
                    pending.push(path);
                }
            }
        }

        info!(count = emitted, "package discovery complete");
        emitted
    }
}
