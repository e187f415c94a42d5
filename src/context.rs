//! Deployment context resolution for the launcher.
//!
//! This module decides, once per process, where the bundled assets live:
//!
//! - **Bundled**: the launcher runs from a packaged distribution and the
//!   assets are staged next to it (or under the root named by
//!   `YTDLX_BUNDLE_DIR`).
//! - **Source tree**: the launcher runs from a checkout and the assets live
//!   under the crate directory.
//!
//! The resulting [`DeploymentContext`] is immutable and is passed explicitly
//! to everything that needs to locate an asset.

use crate::assets::{Asset, Platform};
use crate::error::{LauncherError, Result};
use std::env;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Environment variable naming the extraction root of a bundled deployment.
pub const BUNDLE_DIR_ENV: &str = "YTDLX_BUNDLE_DIR";

/// Directory whose presence next to the executable marks a bundled layout.
const BUNDLE_MARKER_DIR: &str = "context";

/// Where the launcher's assets live for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentContext {
    /// Whether the launcher runs from a packaged distribution.
    pub is_bundled: bool,

    /// Absolute directory every asset path is relative to.
    pub base_directory: PathBuf,

    /// Platform used to pick asset paths.
    pub platform: Platform,
}

impl DeploymentContext {
    /// Build a context for a known root.
    ///
    /// The root must exist and be a directory.
    pub fn new<P: AsRef<Path>>(is_bundled: bool, base_directory: P) -> Result<Self> {
        let base = base_directory.as_ref();
        if !base.is_dir() {
            return Err(LauncherError::Unexpected(format!(
                "deployment root \"{}\" does not exist or is not a directory",
                base.display()
            )));
        }

        let base_directory = if base.is_absolute() {
            base.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|e| {
                    LauncherError::Unexpected(format!(
                        "failed to get current working directory: {}",
                        e
                    ))
                })?
                .join(base)
        };

        Ok(Self {
            is_bundled,
            base_directory,
            platform: Platform::current(),
        })
    }

    /// Detect the deployment for the running process.
    pub fn detect() -> Result<Self> {
        let bundle_override = env::var_os(BUNDLE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self::detect_from(
            bundle_override,
            exe_dir,
            PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        )
    }

    /// Detect the deployment from explicit inputs.
    ///
    /// Precedence: an explicit bundle root, then an executable directory that
    /// carries the bundle layout, then the source tree this crate was built
    /// from. A source tree that no longer exists (the binary was moved or the
    /// checkout removed) falls back to the executable's own directory.
    pub fn detect_from(
        bundle_override: Option<PathBuf>,
        exe_dir: Option<PathBuf>,
        source_tree: PathBuf,
    ) -> Result<Self> {
        if let Some(root) = bundle_override {
            return Self::new(true, root);
        }

        if let Some(dir) = &exe_dir
            && dir.join(BUNDLE_MARKER_DIR).is_dir()
        {
            return Self::new(true, dir);
        }

        if !source_tree.is_dir()
            && let Some(dir) = exe_dir
        {
            tracing::debug!(
                source_tree = %source_tree.display(),
                "source tree missing, using executable directory"
            );
            return Self::new(false, dir);
        }

        Self::new(false, source_tree)
    }

    /// Switch to another platform's asset layout.
    #[cfg(test)]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Absolute path a relative asset path would occupy, whether or not it exists.
    pub fn expected_path(&self, relative: &str) -> PathBuf {
        let native = relative.replace('/', &MAIN_SEPARATOR.to_string());
        self.base_directory.join(native)
    }

    /// Resolve a `/`-separated relative path against the base directory.
    ///
    /// Returns `None` when nothing exists there. Never fails.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let path = self.expected_path(relative);
        if path.exists() { Some(path) } else { None }
    }

    /// Resolve an asset for this context's platform.
    pub fn resolve_asset(&self, asset: Asset) -> Option<PathBuf> {
        let resolved = self.resolve(&asset.relative_path(self.platform));
        tracing::debug!(asset = asset.name(), path = ?resolved, "resolved asset");
        resolved
    }

    /// Resolve an asset that must exist, reporting where it was expected otherwise.
    pub fn require_asset(&self, asset: Asset) -> Result<PathBuf> {
        self.resolve_asset(asset)
            .ok_or_else(|| LauncherError::AssetMissing {
                asset,
                expected: self.expected_path(&asset.relative_path(self.platform)),
            })
    }
}
