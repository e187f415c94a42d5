//! Child process execution.
//!
//! Runs one [`LaunchSpec`] to completion. There is no timeout: the launcher
//! blocks until the child exits or is killed from outside.

use super::rewrite::OutputRewrite;
use crate::assets::Asset;
use crate::error::{LauncherError, Result};
use crate::exit_codes;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// How the child's output streams are handled.
#[derive(Debug, Clone)]
pub enum OutputMode {
    /// The child shares the launcher's stdin, stdout and stderr.
    Inherit,
    /// Stdout and stderr are captured and rewritten before relaying.
    Capture(OutputRewrite),
}

/// Everything needed to run one child process.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Asset whose program is executed (used in diagnostics).
    pub asset: Asset,
    /// Resolved program path.
    pub program: PathBuf,
    /// Arguments after the program: injected ones first, then the user's.
    pub args: Vec<String>,
    pub output: OutputMode,
}

/// Result of running a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The child wrote directly to the launcher's streams.
    Inherited { code: i32 },
    /// The child's output was captured (and rewritten).
    Captured {
        code: i32,
        stdout: String,
        stderr: String,
    },
}

impl LaunchOutcome {
    pub fn code(&self) -> i32 {
        match self {
            LaunchOutcome::Inherited { code } | LaunchOutcome::Captured { code, .. } => *code,
        }
    }
}

impl LaunchSpec {
    /// The full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Run the child and wait for it to exit.
    pub fn execute(&self) -> Result<LaunchOutcome> {
        tracing::debug!(
            asset = self.asset.name(),
            command = %shell_words::join(self.argv()),
            "launching"
        );

        let mut command = Command::new(&self.program);
        command.args(&self.args);

        match &self.output {
            OutputMode::Inherit => {
                let status = command.status().map_err(|e| self.spawn_error(e))?;
                Ok(LaunchOutcome::Inherited {
                    code: exit_code_of(status),
                })
            }
            OutputMode::Capture(rewrite) => {
                // output() drains both pipes together, so a chatty stderr
                // cannot stall the child while stdout is being read.
                let output = command
                    .stdin(Stdio::inherit())
                    .output()
                    .map_err(|e| self.spawn_error(e))?;

                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);

                Ok(LaunchOutcome::Captured {
                    code: exit_code_of(output.status),
                    stdout: rewrite.apply_stdout(&stdout),
                    stderr: rewrite.apply_stderr(&stderr),
                })
            }
        }
    }

    fn spawn_error(&self, source: std::io::Error) -> LauncherError {
        LauncherError::from_spawn(self.asset, self.program.clone(), source)
    }
}

/// Write captured output to the launcher's streams and return the exit code.
///
/// Inherited outcomes have nothing left to relay.
pub fn relay<O: Write, E: Write>(outcome: &LaunchOutcome, out: &mut O, err: &mut E) -> Result<i32> {
    if let LaunchOutcome::Captured { stdout, stderr, .. } = outcome {
        out.write_all(stdout.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| LauncherError::Unexpected(format!("failed to write output: {}", e)))?;
        err.write_all(stderr.as_bytes())
            .and_then(|_| err.flush())
            .map_err(|e| {
                LauncherError::Unexpected(format!("failed to write error output: {}", e))
            })?;
    }

    Ok(outcome.code())
}

/// Map a child's exit status to the launcher's exit code.
///
/// A child killed by a signal reports `128 + signal`, as shells do.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RewriteRule;

    fn inherit_spec(program: PathBuf, args: &[&str]) -> LaunchSpec {
        LaunchSpec {
            asset: Asset::Ffmpeg,
            program,
            args: args.iter().map(|s| s.to_string()).collect(),
            output: OutputMode::Inherit,
        }
    }

    #[test]
    fn argv_puts_program_first() {
        let spec = inherit_spec(PathBuf::from("/b/ffmpeg.bin"), &["-i", "in.mkv"]);
        assert_eq!(spec.argv(), vec!["/b/ffmpeg.bin", "-i", "in.mkv"]);
    }

    #[test]
    fn relay_writes_captured_streams() {
        let outcome = LaunchOutcome::Captured {
            code: 3,
            stdout: "out\n".to_string(),
            stderr: "err\n".to_string(),
        };
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = relay(&outcome, &mut out, &mut err).unwrap();

        assert_eq!(code, 3);
        assert_eq!(out, b"out\n");
        assert_eq!(err, b"err\n");
    }

    #[test]
    fn relay_of_inherited_outcome_writes_nothing() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = relay(&LaunchOutcome::Inherited { code: 7 }, &mut out, &mut err).unwrap();

        assert_eq!(code, 7);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use crate::test_support::{create_test_bundle, write_file, write_script};

        #[test]
        fn child_exit_codes_propagate() {
            let bundle = create_test_bundle();
            for code in [0, 1, 42] {
                let stub = write_script(
                    bundle.path(),
                    &format!("context/exit{}.bin", code),
                    &format!("exit {}", code),
                );
                let outcome = inherit_spec(stub, &[]).execute().unwrap();
                assert_eq!(outcome, LaunchOutcome::Inherited { code });
            }
        }

        #[test]
        fn removed_program_is_launch_not_found() {
            let bundle = create_test_bundle();
            let stub = write_script(bundle.path(), "context/gone.bin", "exit 0");
            let spec = inherit_spec(stub.clone(), &[]);
            std::fs::remove_file(&stub).unwrap();

            let err = spec.execute().unwrap_err();

            assert!(matches!(err, LauncherError::LaunchNotFound { .. }));
            assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        }

        #[test]
        fn non_executable_program_is_permission_denied() {
            let bundle = create_test_bundle();
            let plain = write_file(bundle.path(), "context/plain.bin", "#!/bin/sh\nexit 0\n");

            let err = inherit_spec(plain, &[]).execute().unwrap_err();

            assert!(matches!(err, LauncherError::LaunchPermissionDenied { .. }));
            assert_eq!(err.exit_code(), exit_codes::PERMISSION_DENIED);
        }

        #[test]
        fn signal_death_maps_to_128_plus_signal() {
            let bundle = create_test_bundle();
            let stub = write_script(bundle.path(), "context/killed.bin", "kill -9 $$");

            let outcome = inherit_spec(stub, &[]).execute().unwrap();

            assert_eq!(outcome.code(), 128 + 9);
        }

        #[test]
        fn capture_rewrites_both_streams() {
            let bundle = create_test_bundle();
            let stub = write_script(
                bundle.path(),
                "context/probe.bin",
                "echo \"YT-DLP 2024 ($1)\"\necho \"yt-dlp: error\" >&2\nexit 2",
            );
            let spec = LaunchSpec {
                asset: Asset::Ytprobe,
                program: stub,
                args: vec!["arg".to_string()],
                output: OutputMode::Capture(
                    OutputRewrite::from_rule(&RewriteRule::default()).unwrap(),
                ),
            };

            let outcome = spec.execute().unwrap();

            assert_eq!(
                outcome,
                LaunchOutcome::Captured {
                    code: 2,
                    stdout: "yt-dlx 2024 (arg)\n".to_string(),
                    stderr: "yt-dlx: error\n".to_string(),
                }
            );
        }

        #[test]
        fn capture_drains_large_output_on_both_streams() {
            let bundle = create_test_bundle();
            // Well past a pipe buffer on each stream.
            let stub = write_script(
                bundle.path(),
                "context/chatty.bin",
                "i=0\nwhile [ $i -lt 20000 ]; do\n  echo \"yt-dlp line $i\"\n  echo \"yt-dlp err $i\" >&2\n  i=$((i+1))\ndone",
            );
            let spec = LaunchSpec {
                asset: Asset::Ytprobe,
                program: stub,
                args: vec![],
                output: OutputMode::Capture(
                    OutputRewrite::from_rule(&RewriteRule::default()).unwrap(),
                ),
            };

            let outcome = spec.execute().unwrap();

            match outcome {
                LaunchOutcome::Captured {
                    code,
                    stdout,
                    stderr,
                } => {
                    assert_eq!(code, 0);
                    assert_eq!(stdout.lines().count(), 20000);
                    assert_eq!(stderr.lines().count(), 20000);
                    assert!(!stdout.contains("yt-dlp"));
                    assert!(!stderr.contains("yt-dlp"));
                }
                other => panic!("expected captured outcome, got {:?}", other),
            }
        }
    }
}
