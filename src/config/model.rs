//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Launcher configuration.
///
/// This struct represents the contents of `launcher.yaml` in the deployment
/// root. Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Flag inserted ahead of the proxy's config file path.
    #[serde(default = "default_proxy_config_flag")]
    pub proxy_config_flag: String,

    /// Interpreter for the probe script.
    ///
    /// An absolute path, a path relative to the deployment root, or a command
    /// name looked up on `PATH`. When unset the bundled interpreter is used,
    /// falling back to `python3`/`python` on `PATH`.
    #[serde(default)]
    pub interpreter: Option<String>,

    /// Rewrite applied to the probe script's output.
    #[serde(default)]
    pub ytprobe_rewrite: RewriteRule,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            proxy_config_flag: default_proxy_config_flag(),
            interpreter: None,
            ytprobe_rewrite: RewriteRule::default(),
        }
    }
}
