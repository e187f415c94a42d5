//! Error types for the yt-dlx launcher.
//!
//! Uses thiserror for derive macros. Every failure the launcher can hit is a
//! variant here, and [`LauncherError::exit_code`] is the single place where a
//! failure becomes a process exit code.

use crate::assets::Asset;
use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launcher operations.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// A required asset did not resolve to an existing path. Nothing was launched.
    #[error("{asset} not found in bundle (expected at \"{}\")", .expected.display())]
    AssetMissing { asset: Asset, expected: PathBuf },

    /// The OS could not find the resolved path when launching it.
    #[error(
        "the executable \"{}\" for {asset} was not found at launch time.\n\
         Make sure it exists and has execute permissions: {source}",
        .path.display()
    )]
    LaunchNotFound {
        asset: Asset,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The OS refused to execute the resolved path.
    #[error(
        "permission denied to execute {asset} at \"{}\".\n\
         Make sure it has execute permissions: {source}",
        .path.display()
    )]
    LaunchPermissionDenied {
        asset: Asset,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Spawning failed for a reason other than not-found or permission denied.
    #[error("failed to start {asset} at \"{}\": {source}", .path.display())]
    SubprocessFailure {
        asset: Asset,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The launcher config file could not be read or is invalid.
    #[error("{0}")]
    Config(String),

    /// The command line could not be mapped to a target.
    #[error("{0}")]
    Usage(String),

    /// Anything else that went wrong around the launch.
    #[error("{0}")]
    Unexpected(String),
}

impl LauncherError {
    /// Classify a spawn failure by the OS error kind.
    pub fn from_spawn(asset: Asset, path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LauncherError::LaunchNotFound {
                asset,
                path,
                source,
            },
            io::ErrorKind::PermissionDenied => LauncherError::LaunchPermissionDenied {
                asset,
                path,
                source,
            },
            _ => LauncherError::SubprocessFailure {
                asset,
                path,
                source,
            },
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::LaunchNotFound { .. } => exit_codes::NOT_FOUND,
            LauncherError::LaunchPermissionDenied { .. } => exit_codes::PERMISSION_DENIED,
            LauncherError::AssetMissing { .. }
            | LauncherError::SubprocessFailure { .. }
            | LauncherError::Config(_)
            | LauncherError::Usage(_)
            | LauncherError::Unexpected(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
