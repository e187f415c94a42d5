use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty bundle root containing the `context/` directory.
pub(crate) fn create_test_bundle() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("context")).unwrap();
    temp_dir
}

/// Write a file at a `/`-separated path under `root`, creating parents.
pub(crate) fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = relative
        .split('/')
        .fold(root.to_path_buf(), |acc, part| acc.join(part));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a shell script and mark it executable.
#[cfg(unix)]
pub(crate) fn write_script(root: &Path, relative: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = write_file(root, relative, &format!("#!/bin/sh\n{}\n", body));
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Sets an environment variable for the lifetime of the guard.
///
/// The environment is process-global; tests using this must be `#[serial]`.
pub(crate) struct EnvVarGuard {
    key: &'static str,
    original: Option<OsString>,
}

impl EnvVarGuard {
    pub(crate) fn set(key: &'static str, value: &Path) -> Self {
        let original = std::env::var_os(key);
        // SAFETY: every test that mutates the environment is #[serial].
        unsafe { std::env::set_var(key, value) };
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: see `EnvVarGuard::set`.
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}
