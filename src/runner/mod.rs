//! Command execution abstraction layer
//!
//! This module provides a trait-based abstraction over external command
//! execution, allowing for multiple implementations including real child
//! processes and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [CommandRunner] trait, which defines the
//! single operation git-version needs: run a command line and hand back its
//! merged output. The concrete implementations include:
//!
//! - [process::ProcessRunner]: A real implementation using `std::process`
//! - [mock::MockRunner]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [CommandRunner] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use git_version::runner::{CommandRunner, MockRunner};
//! let mut runner = MockRunner::new();
//! runner.succeed_with("git rev-parse HEAD", "1a2b3c4d5e6f7a8b");
//! let output = runner.run(&["git", "rev-parse", "HEAD"]).unwrap();
//! assert_eq!(output, "1a2b3c4d5e6f7a8b");
//! ```

pub mod mock;
pub mod process;

pub use mock::MockRunner;
pub use process::ProcessRunner;

use thiserror::Error;

/// Failure of a single external command invocation
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command started but exited with a non-zero status
    #[error("command `{command}` exited with status {status}: {output}")]
    Failed {
        command: String,
        status: i32,
        output: String,
    },

    /// The command could not be started at all
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result of one command invocation: merged, trimmed output or the failure
pub type RunResult = std::result::Result<String, CommandError>;

/// Common command execution trait for abstraction
///
/// This trait abstracts external command execution to allow for multiple
/// implementations including real child processes and mock implementations
/// for testing.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// `run` distinguishes a command that ran and failed ([CommandError::Failed],
/// carrying the exit status and merged output) from one that never started
/// ([CommandError::Spawn]). Callers decide which failures matter; the version
/// resolvers treat both as "field unavailable".
pub trait CommandRunner: Send + Sync {
    /// Run one command line and capture its output
    ///
    /// Standard output and standard error are captured together into a single
    /// stream, trimmed of surrounding whitespace.
    ///
    /// # Arguments
    /// * `argv` - Command line as program followed by its arguments
    ///
    /// # Returns
    /// * `Ok(String)` - Merged, trimmed output of a zero-status run
    /// * `Err(CommandError)` - Non-zero exit status or spawn failure
    ///
    /// # Example
    /// ```rust
    /// # use git_version::runner::{CommandRunner, ProcessRunner};
    /// let runner = ProcessRunner::new();
    /// let output = runner.run(&["echo", "hello"]).unwrap();
    /// assert_eq!(output, "hello");
    /// ```
    fn run(&self, argv: &[&str]) -> RunResult;
}
