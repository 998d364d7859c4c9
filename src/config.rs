use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GitVersionError, Result};

/// Resolver settings for git-version.
///
/// The defaults reproduce the documented command lines (`git describe --tags
/// --match=v*`, `git rev-parse --short=8 HEAD`). The command line tool always
/// runs on `Config::default()` and never probes the filesystem for settings;
/// [Config::from_file] exists for library consumers and tests that point at
/// an explicit file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program name of the version control tool to invoke.
    #[serde(default = "default_git_program")]
    pub git_program: String,

    /// Glob passed to `describe --match=` to select version tags.
    #[serde(default = "default_tag_match")]
    pub tag_match: String,

    /// Length of the abbreviated commit hash.
    #[serde(default = "default_commit_abbrev")]
    pub commit_abbrev: usize,
}

/// Returns the default version control program.
fn default_git_program() -> String {
    "git".to_string()
}

/// Returns the default version tag glob.
fn default_tag_match() -> String {
    "v*".to_string()
}

/// Returns the default abbreviated hash length.
fn default_commit_abbrev() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Config {
            git_program: default_git_program(),
            tag_match: default_tag_match(),
            commit_abbrev: default_commit_abbrev(),
        }
    }
}

impl Config {
    /// Loads configuration from an explicit TOML file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` - Loaded configuration
    /// * `Err` - If the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())?;
        toml::from_str(&config_str).map_err(|e| GitVersionError::config(e.to_string()))
    }
}
