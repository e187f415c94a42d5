//! Target dispatch and child process execution.
//!
//! This module turns the command line into exactly one action:
//!
//! - **Target**: flag selection and per-target launch policy
//! - **Interpreter**: lookup of the interpreter for the probe script
//! - **Launch**: subprocess execution with inherited or captured output
//! - **Rewrite**: literal text substitution on captured output
//!
//! Errors from every branch come back as [`LauncherError`]; the caller turns
//! them into an exit code in one place.
//!
//! [`LauncherError`]: crate::error::LauncherError

mod interpreter;
mod launch;
mod rewrite;
mod target;

pub use interpreter::resolve_interpreter;
pub use launch::{LaunchSpec, OutputMode, relay};
pub use rewrite::OutputRewrite;
pub use target::{ArgInjection, OutputPolicy, Runner, Selection, Target};

use crate::assets::Asset;
use crate::config::LauncherConfig;
use crate::context::DeploymentContext;
use crate::error::{LauncherError, Result};
use crate::exit_codes;
use crate::report::BundleReport;
use std::io::Write;

/// Run whatever the arguments select and return the exit code to terminate with.
///
/// Captured output and the asset report go to `out` and `err`; inherited
/// children write straight to the process's own streams.
pub fn dispatch<O: Write, E: Write>(
    ctx: &DeploymentContext,
    config: &LauncherConfig,
    args: &[String],
    out: &mut O,
    err: &mut E,
) -> Result<i32> {
    match Selection::parse(args)? {
        Selection::Report => {
            let report = BundleReport::collect(ctx).to_json()?;
            writeln!(out, "{}", report).map_err(|e| {
                LauncherError::Unexpected(format!("failed to write asset report: {}", e))
            })?;
            Ok(exit_codes::SUCCESS)
        }
        Selection::Launch { target, args } => {
            let spec = build_launch_spec(ctx, config, target, args)?;
            let outcome = spec.execute()?;
            relay(&outcome, out, err)
        }
    }
}

/// Build the launch for `target`: `[program] + injected + user args`.
///
/// The target's own asset is required first, so a missing binary is reported
/// before anything else is looked up.
pub fn build_launch_spec(
    ctx: &DeploymentContext,
    config: &LauncherConfig,
    target: Target,
    user_args: Vec<String>,
) -> Result<LaunchSpec> {
    let policy = target.policy();
    let asset_path = ctx.require_asset(policy.asset)?;

    let injected = match policy.injection {
        ArgInjection::None => Vec::new(),
        ArgInjection::ConfigFile(config_asset) => match ctx.resolve_asset(config_asset) {
            Some(path) => vec![
                config.proxy_config_flag.clone(),
                path.to_string_lossy().into_owned(),
            ],
            None => {
                tracing::debug!(asset = config_asset.name(), "config asset absent, not injecting");
                Vec::new()
            }
        },
    };

    let (asset, program, mut args) = match policy.runner {
        Runner::Native => (policy.asset, asset_path, Vec::new()),
        Runner::Interpreted => {
            let interpreter = resolve_interpreter(ctx, config)?;
            let script = asset_path.to_string_lossy().into_owned();
            (Asset::Python, interpreter, vec![script])
        }
    };
    args.extend(injected);
    args.extend(user_args);

    let output = match policy.output {
        OutputPolicy::Inherit => OutputMode::Inherit,
        OutputPolicy::CaptureAndRewrite => {
            OutputMode::Capture(OutputRewrite::from_rule(&config.ytprobe_rewrite)?)
        }
    };

    Ok(LaunchSpec {
        asset,
        program,
        args,
        output,
    })
}
