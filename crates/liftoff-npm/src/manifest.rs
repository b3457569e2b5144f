//! npm package.json handling

use std::collections::HashMap;
use std::path::Path;

use liftoff_core::error::ActionError;
use serde::{Deserialize, Serialize};

/// The subset of package.json liftoff reads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Whether package is private
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    /// Preserve other fields
    #[serde(flatten)]
    pub other: HashMap<String, serde_json::Value>,
}

impl PackageJson {
    /// Load package.json from path
    pub fn load(path: &Path) -> std::result::Result<Self, ActionError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ActionError::ManifestNotFound(path.to_path_buf()))?;

        serde_json::from_str(&content).map_err(|e| ActionError::ManifestParse(e.to_string()))
    }

    /// Whether the manifest opts out of publishing
    pub fn is_private(&self) -> bool {
        self.private.unwrap_or(false)
    }
}
