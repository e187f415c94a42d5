//! Configuration types and defaults for the launcher.
//!
//! This module defines the nested config structs and the default value
//! functions used by [`super::LauncherConfig`].

use serde::Deserialize;

/// Flag the proxy uses to take a configuration file path.
pub const DEFAULT_PROXY_CONFIG_FLAG: &str = "--config-file";

/// Product name the probe script prints.
pub const DEFAULT_REWRITE_FROM: &str = "yt-dlp";

/// Product name the launcher reports instead.
pub const DEFAULT_REWRITE_TO: &str = "yt-dlx";

/// Text substitution applied to the probe script's captured output.
///
/// `from` is matched literally, never as a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RewriteRule {
    /// Text to look for.
    pub from: String,

    /// Replacement text.
    pub to: String,

    /// Whether matching ignores letter case.
    pub case_insensitive: bool,

    /// Whether stderr is rewritten as well as stdout.
    pub include_stderr: bool,
}

impl Default for RewriteRule {
    fn default() -> Self {
        Self {
            from: DEFAULT_REWRITE_FROM.to_string(),
            to: DEFAULT_REWRITE_TO.to_string(),
            case_insensitive: default_true(),
            include_stderr: default_true(),
        }
    }
}

pub(super) fn default_proxy_config_flag() -> String {
    DEFAULT_PROXY_CONFIG_FLAG.to_string()
}

pub(super) fn default_true() -> bool {
    true
}
