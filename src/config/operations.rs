//! Config loading and validation.

use super::model::LauncherConfig;
use crate::context::DeploymentContext;
use crate::error::{LauncherError, Result};
use std::path::Path;

/// Name of the optional config file in the deployment root.
pub const CONFIG_FILE_NAME: &str = "launcher.yaml";

impl LauncherConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(LauncherConfig)` - Successfully loaded and validated config
    /// * `Err(LauncherError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LauncherError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `launcher.yaml` from the deployment root, or defaults when absent.
    pub fn load_for(ctx: &DeploymentContext) -> Result<Self> {
        match ctx.resolve(CONFIG_FILE_NAME) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading launcher config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: LauncherConfig = serde_yaml::from_str(yaml)
            .map_err(|e| LauncherError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `proxy_config_flag` must be non-empty
    /// - `interpreter`, when set, must be non-empty
    /// - `ytprobe_rewrite.from` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.proxy_config_flag.trim().is_empty() {
            return Err(LauncherError::Config(
                "config validation failed: proxy_config_flag must be non-empty".to_string(),
            ));
        }

        if let Some(interpreter) = &self.interpreter
            && interpreter.trim().is_empty()
        {
            return Err(LauncherError::Config(
                "config validation failed: interpreter must be non-empty when set".to_string(),
            ));
        }

        if self.ytprobe_rewrite.from.is_empty() {
            return Err(LauncherError::Config(
                "config validation failed: ytprobe_rewrite.from must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
