//! CLI argument parsing for yt-dlx.
//!
//! Uses clap derive macros for `--help` and `--version`. Everything else is
//! collected verbatim and handed to [`crate::dispatch::Selection::parse`],
//! since each target consumes all arguments after its flag.

use clap::Parser;

/// yt-dlx: launcher for the executables bundled with yt-dlx.
///
/// Without arguments, prints a JSON map of every bundled asset to its
/// resolved path (or "Not found in bundle").
#[derive(Parser, Debug)]
#[command(name = "yt-dlx")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Targets (each forwards every argument after it):\n  \
    --tor [ARGS]...      Run the bundled tor, adding --config-file <torrc> when present\n  \
    --ffmpeg [ARGS]...   Run the bundled ffmpeg\n  \
    --ffprobe [ARGS]...  Run the bundled ffprobe\n  \
    --ytprobe [ARGS]...  Run the probe script and relay its rewritten output")]
pub struct Cli {
    /// Target flag followed by the arguments to forward.
    #[arg(
        value_name = "TARGET",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
