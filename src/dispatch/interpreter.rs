//! Interpreter lookup for the probe script.

use crate::assets::Asset;
use crate::config::LauncherConfig;
use crate::context::DeploymentContext;
use crate::error::{LauncherError, Result};
use std::path::{Path, PathBuf};

/// Interpreters tried on `PATH` when neither config nor bundle supplies one.
const PATH_FALLBACKS: &[&str] = &["python3", "python"];

/// Find the interpreter that runs the probe script.
///
/// Order: the configured interpreter, the bundled one, then `PATH`. A
/// configured interpreter that cannot be found is an error rather than a
/// silent fallback.
pub fn resolve_interpreter(ctx: &DeploymentContext, config: &LauncherConfig) -> Result<PathBuf> {
    if let Some(configured) = &config.interpreter {
        return resolve_configured(ctx, configured);
    }

    if let Some(bundled) = ctx.resolve_asset(Asset::Python) {
        tracing::debug!(path = %bundled.display(), "using bundled interpreter");
        return Ok(bundled);
    }

    for name in PATH_FALLBACKS {
        if let Ok(found) = which::which(name) {
            tracing::debug!(path = %found.display(), "using interpreter from PATH");
            return Ok(found);
        }
    }

    Err(LauncherError::AssetMissing {
        asset: Asset::Python,
        expected: ctx.expected_path(&Asset::Python.relative_path(ctx.platform)),
    })
}

fn resolve_configured(ctx: &DeploymentContext, configured: &str) -> Result<PathBuf> {
    let path = Path::new(configured);
    let is_bare_name = path.components().count() == 1 && !path.is_absolute();

    let found = if path.is_absolute() {
        path.exists().then(|| path.to_path_buf())
    } else if is_bare_name {
        // Bare names may also live in the deployment root.
        ctx.resolve(configured).or_else(|| which::which(configured).ok())
    } else {
        ctx.resolve(configured)
    };

    match found {
        Some(found) => {
            tracing::debug!(path = %found.display(), "using configured interpreter");
            Ok(found)
        }
        None => Err(LauncherError::AssetMissing {
            asset: Asset::Python,
            expected: if path.is_absolute() || is_bare_name {
                path.to_path_buf()
            } else {
                ctx.expected_path(configured)
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_bundle, write_file};

    fn config_with(interpreter: &str) -> LauncherConfig {
        LauncherConfig {
            interpreter: Some(interpreter.to_string()),
            ..LauncherConfig::default()
        }
    }

    #[test]
    fn configured_absolute_path_is_used() {
        let bundle = create_test_bundle();
        let interp = write_file(bundle.path(), "tools/python", "");
        let ctx = DeploymentContext::new(true, bundle.path()).unwrap();

        let found = resolve_interpreter(&ctx, &config_with(interp.to_str().unwrap())).unwrap();
        assert_eq!(found, interp);
    }

    #[test]
    fn configured_relative_path_resolves_against_root() {
        let bundle = create_test_bundle();
        let interp = write_file(bundle.path(), "tools/python", "");
        let ctx = DeploymentContext::new(true, bundle.path()).unwrap();

        let found = resolve_interpreter(&ctx, &config_with("tools/python")).unwrap();
        assert_eq!(found, interp);
    }

    #[test]
    fn missing_configured_interpreter_is_asset_missing() {
        let bundle = create_test_bundle();
        let ctx = DeploymentContext::new(true, bundle.path()).unwrap();

        let err = resolve_interpreter(&ctx, &config_with("tools/missing-python")).unwrap_err();
        match err {
            LauncherError::AssetMissing { asset, expected } => {
                assert_eq!(asset, Asset::Python);
                assert!(expected.ends_with("missing-python"));
            }
            other => panic!("expected AssetMissing, got {:?}", other),
        }
    }

    #[test]
    fn missing_bare_name_is_asset_missing() {
        let bundle = create_test_bundle();
        let ctx = DeploymentContext::new(true, bundle.path()).unwrap();

        let err =
            resolve_interpreter(&ctx, &config_with("no-such-interpreter-xyz-123")).unwrap_err();
        assert!(err.to_string().contains("python not found in bundle"));
    }

    #[test]
    fn bundled_interpreter_is_preferred_over_path() {
        let bundle = create_test_bundle();
        let ctx = DeploymentContext::new(true, bundle.path()).unwrap();
        let bundled = write_file(
            bundle.path(),
            &Asset::Python.relative_path(ctx.platform),
            "",
        );

        let found = resolve_interpreter(&ctx, &LauncherConfig::default()).unwrap();
        assert_eq!(found, bundled);
    }
}
