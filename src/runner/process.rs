use std::io;
use std::path::PathBuf;
use std::process::Command;

use crate::runner::{CommandError, CommandRunner, RunResult};

/// Executes command lines as child processes
///
/// Commands run in the current working directory of the process unless the
/// runner was built with [ProcessRunner::in_dir], which pins every invocation
/// to an explicit path. No state is carried between invocations.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    workdir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Create a runner that executes in the process working directory
    pub fn new() -> Self {
        ProcessRunner { workdir: None }
    }

    /// Create a runner that executes in an explicit directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        ProcessRunner {
            workdir: Some(dir.into()),
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, argv: &[&str]) -> RunResult {
        let command = argv.join(" ");

        let (program, args) = match argv.split_first() {
            Some(parts) => parts,
            None => {
                return Err(CommandError::Spawn {
                    command,
                    source: io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
                })
            }
        };

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| CommandError::Spawn {
            command: command.clone(),
            source,
        })?;

        // stdout first, then stderr, like a 2>&1 redirect
        let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
        merged.push_str(&String::from_utf8_lossy(&output.stderr));
        let merged = merged.trim().to_string();

        if output.status.success() {
            Ok(merged)
        } else {
            Err(CommandError::Failed {
                command,
                status: output.status.code().unwrap_or(-1),
                output: merged,
            })
        }
    }
}
