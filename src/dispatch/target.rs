//! Command-line target selection.
//!
//! Each [`Target`] carries its launch policy as data: which asset runs, how
//! it is run, which arguments get injected, and whether its output is
//! captured and rewritten.

use crate::assets::Asset;
use crate::error::{LauncherError, Result};

/// A bundled program the launcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Tor,
    Ffmpeg,
    Ffprobe,
    Ytprobe,
}

/// How the target's asset is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runner {
    /// The asset is a native executable.
    Native,
    /// The asset is a script handed to an interpreter.
    Interpreted,
}

/// Arguments injected ahead of the user's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgInjection {
    None,
    /// `<config flag> <path>` when the given asset resolves.
    ConfigFile(Asset),
}

/// What happens to the child's stdout and stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPolicy {
    /// The child writes straight to the launcher's streams.
    Inherit,
    /// Both streams are captured, rewritten and relayed.
    CaptureAndRewrite,
}

/// Launch policy for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPolicy {
    pub asset: Asset,
    pub runner: Runner,
    pub injection: ArgInjection,
    pub output: OutputPolicy,
}

impl Target {
    /// All targets, in help order.
    pub const ALL: [Target; 4] = [Target::Tor, Target::Ffmpeg, Target::Ffprobe, Target::Ytprobe];

    /// The command-line flag selecting this target.
    pub fn flag(self) -> &'static str {
        match self {
            Target::Tor => "--tor",
            Target::Ffmpeg => "--ffmpeg",
            Target::Ffprobe => "--ffprobe",
            Target::Ytprobe => "--ytprobe",
        }
    }

    /// Look up a target by its flag.
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.flag() == flag)
    }

    pub fn policy(self) -> TargetPolicy {
        match self {
            Target::Tor => TargetPolicy {
                asset: Asset::Tor,
                runner: Runner::Native,
                injection: ArgInjection::ConfigFile(Asset::Torrc),
                output: OutputPolicy::Inherit,
            },
            Target::Ffmpeg => TargetPolicy {
                asset: Asset::Ffmpeg,
                runner: Runner::Native,
                injection: ArgInjection::None,
                output: OutputPolicy::Inherit,
            },
            Target::Ffprobe => TargetPolicy {
                asset: Asset::Ffprobe,
                runner: Runner::Native,
                injection: ArgInjection::None,
                output: OutputPolicy::Inherit,
            },
            Target::Ytprobe => TargetPolicy {
                asset: Asset::Ytprobe,
                runner: Runner::Interpreted,
                injection: ArgInjection::None,
                output: OutputPolicy::CaptureAndRewrite,
            },
        }
    }
}

/// What the command line asks the launcher to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Run a target with the remaining arguments.
    Launch { target: Target, args: Vec<String> },
    /// Print where every asset resolved.
    Report,
}

impl Selection {
    /// Select a target from the raw arguments (program name excluded).
    ///
    /// The first argument must be a target flag. Everything after it is
    /// forwarded untouched, including other target flags.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((first, rest)) = args.split_first() else {
            return Ok(Selection::Report);
        };

        match Target::from_flag(first) {
            Some(target) => Ok(Selection::Launch {
                target,
                args: rest.to_vec(),
            }),
            None => {
                let known = Target::ALL.map(Target::flag).join(", ");
                Err(LauncherError::Usage(format!(
                    "unrecognized arguments: {}\n\
                     Expected one of {} followed by the arguments to forward,\n\
                     or no arguments to list bundled assets.",
                    shell_words::join(args),
                    known
                )))
            }
        }
    }
}
