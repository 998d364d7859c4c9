use crate::runner::{CommandError, CommandRunner, RunResult};
use std::collections::HashMap;

/// Canned outcome for one command line
#[derive(Debug, Clone)]
enum Outcome {
    Success(String),
    Failure { status: i32, output: String },
}

/// Mock runner for testing without spawning processes
///
/// Outcomes are keyed by the space-joined command line. A command with no
/// configured outcome fails with status 127, the shell's "command not found".
pub struct MockRunner {
    outcomes: HashMap<String, Outcome>,
}

impl MockRunner {
    /// Create a new mock runner with no configured outcomes
    pub fn new() -> Self {
        MockRunner {
            outcomes: HashMap::new(),
        }
    }

    /// Configure a command line to succeed with the given output
    pub fn succeed_with(&mut self, command: impl Into<String>, output: impl Into<String>) {
        self.outcomes
            .insert(command.into(), Outcome::Success(output.into()));
    }

    /// Configure a command line to fail with the given status and output
    pub fn fail_with(&mut self, command: impl Into<String>, status: i32, output: impl Into<String>) {
        self.outcomes.insert(
            command.into(),
            Outcome::Failure {
                status,
                output: output.into(),
            },
        );
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, argv: &[&str]) -> RunResult {
        let command = argv.join(" ");
        match self.outcomes.get(&command) {
            Some(Outcome::Success(output)) => Ok(output.clone()),
            Some(Outcome::Failure { status, output }) => Err(CommandError::Failed {
                command,
                status: *status,
                output: output.clone(),
            }),
            None => Err(CommandError::Failed {
                command,
                status: 127,
                output: "mock: no outcome configured".to_string(),
            }),
        }
    }
}
