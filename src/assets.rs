//! Bundled asset catalogue.
//!
//! Every companion file the launcher knows about is an [`Asset`]. Each asset
//! has exactly one bundle-relative path per [`Platform`], written with `/`
//! separators; [`crate::context::DeploymentContext::resolve`] converts them to
//! the host separator.

use std::fmt;

/// Host platform family, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Name of the platform directory under `context/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    /// Suffix appended to native executables in the bundle.
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Linux => ".bin",
        }
    }
}

/// A companion file shipped alongside the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Network anonymization proxy.
    Tor,
    /// Configuration file handed to the proxy.
    Torrc,
    /// Transcoder.
    Ffmpeg,
    /// Media prober.
    Ffprobe,
    /// Interpreted probe script.
    Ytprobe,
    /// Bundled interpreter for the probe script.
    Python,
}

/// Root directory of every asset inside the bundle.
const ASSET_ROOT: &str = "context";

impl Asset {
    /// All assets, in report order.
    pub const ALL: [Asset; 6] = [
        Asset::Tor,
        Asset::Torrc,
        Asset::Ffmpeg,
        Asset::Ffprobe,
        Asset::Ytprobe,
        Asset::Python,
    ];

    /// Logical name used in diagnostics and the asset report.
    pub fn name(self) -> &'static str {
        match self {
            Asset::Tor => "tor",
            Asset::Torrc => "torrc",
            Asset::Ffmpeg => "ffmpeg",
            Asset::Ffprobe => "ffprobe",
            Asset::Ytprobe => "ytprobe",
            Asset::Python => "python",
        }
    }

    /// Bundle-relative path of this asset on `platform`, `/`-separated.
    pub fn relative_path(self, platform: Platform) -> String {
        let dir = platform.dir_name();
        match self {
            Asset::Tor | Asset::Ffmpeg | Asset::Ffprobe => format!(
                "{}/{}/{}{}",
                ASSET_ROOT,
                dir,
                self.name(),
                platform.exe_suffix()
            ),
            Asset::Torrc => format!("{}/{}/torrc", ASSET_ROOT, dir),
            // The probe script is platform independent.
            Asset::Ytprobe => format!("{}/ytprobe.py", ASSET_ROOT),
            Asset::Python => match platform {
                Platform::Windows => format!("{}/{}/venv/Scripts/python.exe", ASSET_ROOT, dir),
                Platform::Linux => format!("{}/{}/venv/bin/python", ASSET_ROOT, dir),
            },
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
