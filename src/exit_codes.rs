//! Exit code constants for the yt-dlx launcher.
//!
//! Callers of the launcher depend on these values:
//! - 0: Success (including the asset report)
//! - 1: Generic failure (missing asset, spawn failure, bad config or args)
//! - 126: The OS refused to execute the resolved path
//! - 127: The OS could not find the resolved path at launch time
//!
//! Any other code is the launched child's own exit code, passed through.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Generic failure: missing asset, spawn failure, invalid config or arguments.
pub const FAILURE: i32 = 1;

/// Launch denied for lack of execute permission.
pub const PERMISSION_DENIED: i32 = 126;

/// Executable vanished or was invalid when the OS attempted the launch.
pub const NOT_FOUND: i32 = 127;

/// Offset added to a signal number when a child is killed by that signal.
pub const SIGNAL_BASE: i32 = 128;
