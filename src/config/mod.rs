//! Configuration model for the launcher.
//!
//! This module defines the config struct that represents `launcher.yaml` in
//! the deployment root. Parsing is forward-compatible (unknown fields are
//! ignored), every field has a default, and values are validated after parse.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::LauncherConfig;
pub use operations::CONFIG_FILE_NAME;
pub use types::RewriteRule;
