//! Bundle report printed when no target is selected.
//!
//! The report is a JSON object mapping each asset name to its resolved
//! absolute path, or to [`NOT_FOUND_MARKER`] when the asset is absent.

use crate::assets::Asset;
use crate::context::DeploymentContext;
use crate::error::{LauncherError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::PathBuf;

/// Value reported for an asset that did not resolve.
pub const NOT_FOUND_MARKER: &str = "Not found in bundle";

/// Resolution result for every known asset, in [`Asset::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    entries: Vec<(Asset, Option<PathBuf>)>,
}

impl BundleReport {
    /// Resolve every asset against the context.
    pub fn collect(ctx: &DeploymentContext) -> Self {
        let entries = Asset::ALL
            .iter()
            .map(|&asset| (asset, ctx.resolve_asset(asset)))
            .collect();
        Self { entries }
    }

    /// Render as pretty-printed JSON (two-space indent).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LauncherError::Unexpected(format!("failed to serialize asset report: {}", e))
        })
    }
}

impl Serialize for BundleReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (asset, path) in &self.entries {
            match path {
                Some(path) => map.serialize_entry(asset.name(), &path.to_string_lossy())?,
                None => map.serialize_entry(asset.name(), NOT_FOUND_MARKER)?,
            }
        }
        map.end()
    }
}
