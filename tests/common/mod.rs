//! Common test utilities for yt-dlx integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary bundle root for the launcher to run against
pub struct TestBundle {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the bundle root
    pub path: PathBuf,
}

impl TestBundle {
    /// Create an empty bundle with a `context/` directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("context")).expect("Failed to create context dir");
        Self { temp, path }
    }

    /// Platform directory name the launcher looks in
    pub fn platform_dir() -> &'static str {
        if cfg!(windows) { "windows" } else { "linux" }
    }

    /// Bundle-relative path of a native executable
    pub fn exe_path(name: &str) -> String {
        let suffix = if cfg!(windows) { ".exe" } else { ".bin" };
        format!("context/{}/{}{}", Self::platform_dir(), name, suffix)
    }

    /// Bundle-relative path of the proxy config
    pub fn torrc_path() -> String {
        format!("context/{}/torrc", Self::platform_dir())
    }

    /// Write a file in the bundle
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(relative);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write an executable shell script in the bundle
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn write_script(&self, relative: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_file(relative, &format!("#!/bin/sh\n{}\n", body));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        path
    }

    /// Launcher command pointed at this bundle
    pub fn cmd(&self) -> Command {
        ytdlx_cmd(&self.path)
    }
}

/// Launcher command with a fixed bundle root and quiet logging
#[allow(deprecated)]
pub fn ytdlx_cmd(bundle_root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("yt-dlx").expect("Failed to find yt-dlx binary");
    cmd.env("YTDLX_BUNDLE_DIR", bundle_root);
    cmd.env_remove("YTDLX_LOG");
    cmd
}
