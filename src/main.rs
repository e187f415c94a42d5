//! yt-dlx: launcher for the executables bundled with yt-dlx.
//!
//! This is the main entry point for the `yt-dlx` CLI. It works out where the
//! bundled assets live, dispatches to the selected target, and turns the
//! outcome into the process exit code.

mod cli;
mod dispatch;
mod logging;
mod report;
pub mod assets;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::LauncherConfig;
use context::DeploymentContext;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    let code = match run(&cli.args) {
        Ok(code) => code,
        Err(err) => {
            // Print the diagnostic to stderr before exiting
            eprintln!("Error: {}", err);
            err.exit_code()
        }
    };

    ExitCode::from(exit_byte(code))
}

fn run(args: &[String]) -> error::Result<i32> {
    let ctx = DeploymentContext::detect()?;
    tracing::debug!(
        bundled = ctx.is_bundled,
        base = %ctx.base_directory.display(),
        "deployment detected"
    );

    let config = LauncherConfig::load_for(&ctx)?;
    dispatch::dispatch(&ctx, &config, args, &mut io::stdout(), &mut io::stderr())
}

/// Child codes outside 0..=255 only occur off Unix; they collapse to failure.
fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(exit_codes::FAILURE as u8)
}
