use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::{FullVersion, Tag};
use crate::error::{GitVersionError, Result};
use crate::runner::{CommandRunner, RunResult};

/// Derives version fields from the state of a git repository
///
/// Each method issues its git queries at call time; nothing is cached, so a
/// value always reflects the repository at the moment it was asked for.
/// Fields that cannot be determined resolve to an empty string. Only the
/// `next_*` computations fail, since they cannot increment a base that is
/// not a number.
pub struct VersionResolver<R: CommandRunner> {
    runner: R,
    config: Config,
}

impl<R: CommandRunner> VersionResolver<R> {
    /// Create a new version resolver
    pub fn new(runner: R, config: Config) -> Self {
        VersionResolver { runner, config }
    }

    /// Run one git subcommand through the runner
    fn git(&self, args: &[&str]) -> RunResult {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.config.git_program.as_str());
        argv.extend_from_slice(args);
        self.runner.run(&argv)
    }

    /// Most recent version tag reachable from HEAD
    ///
    /// Uses `describe --tags` restricted to the configured tag glob. Any
    /// suffix describe appends past the tagged commit is dropped. Empty when
    /// no matching tag exists or the query fails.
    pub fn tag(&self) -> String {
        let matcher = format!("--match={}", self.config.tag_match);
        match self.git(&["describe", "--tags", &matcher]) {
            Ok(output) => Tag::from_describe(&output).name,
            Err(_) => String::new(),
        }
    }

    /// Abbreviated hash of the current commit, empty outside a repository
    pub fn commit(&self) -> String {
        let length = format!("--short={}", self.config.commit_abbrev);
        match self.git(&["rev-parse", &length, "HEAD"]) {
            Ok(output) => output.chars().take(self.config.commit_abbrev).collect(),
            Err(_) => String::new(),
        }
    }

    /// Major segment of the current tag, empty without a tag
    pub fn major(&self) -> String {
        let tag = self.tag();
        if tag.is_empty() {
            return String::new();
        }
        Tag::new(tag).major().to_string()
    }

    /// Minor segment of the current tag, empty without a tag
    pub fn minor(&self) -> String {
        let tag = self.tag();
        if tag.is_empty() {
            return String::new();
        }
        Tag::new(tag).minor().to_string()
    }

    /// Patch segment of the current tag
    ///
    /// "0" when the tag carries no patch segment, empty without a tag.
    pub fn patch(&self) -> String {
        let tag = self.tag();
        if tag.is_empty() {
            return String::new();
        }
        Tag::new(tag).patch().to_string()
    }

    /// "develop" when HEAD does not sit exactly on a tag, empty otherwise
    pub fn develop(&self) -> String {
        match self.git(&["describe", "--exact-match", "--tags"]) {
            Ok(_) => String::new(),
            Err(_) => "develop".to_string(),
        }
    }

    /// "dirty" when the build does not match what was pushed
    ///
    /// Set when HEAD differs from its upstream or when the work tree has
    /// uncommitted changes. A repository with no upstream reports dirty: the
    /// empty upstream hash never equals the HEAD hash.
    pub fn dirty(&self) -> String {
        let upstream = self.git(&["rev-parse", "@{u}"]).unwrap_or_default();
        let head = self.git(&["rev-parse", "HEAD"]).unwrap_or_default();
        let unpushed = upstream != head;

        let pending = self.git(&["status", "--porcelain"]).unwrap_or_default();

        if unpushed || !pending.is_empty() {
            "dirty".to_string()
        } else {
            String::new()
        }
    }

    /// Major segment of the version after the next major release
    pub fn next_major(&self) -> Result<u32> {
        next_number("major", &self.major())
    }

    /// Minor segment of the version after the next minor release
    pub fn next_minor(&self) -> Result<u32> {
        next_number("minor", &self.minor())
    }

    /// Patch segment of the version after the next patch release
    pub fn next_patch(&self) -> Result<u32> {
        next_number("patch", &self.patch())
    }

    /// Complete version string for the current repository state
    ///
    /// Composes `<major>.<minor>.<patch>[-develop][-dirty]+<commit>` from
    /// freshly resolved fields.
    pub fn full_version(&self) -> String {
        FullVersion {
            major: self.major(),
            minor: self.minor(),
            patch: self.patch(),
            develop: self.develop(),
            dirty: self.dirty(),
            commit: self.commit(),
        }
        .to_string()
    }

    /// Resolve every field into one report
    ///
    /// Fails when any `next_*` computation fails, mirroring the individual
    /// accessors.
    pub fn report(&self) -> Result<VersionReport> {
        Ok(VersionReport {
            tag: self.tag(),
            commit: self.commit(),
            major: self.major(),
            minor: self.minor(),
            patch: self.patch(),
            develop: self.develop(),
            dirty: self.dirty(),
            next_major: self.next_major()?,
            next_minor: self.next_minor()?,
            next_patch: self.next_patch()?,
            full: self.full_version(),
        })
    }
}

/// Increment one version segment, failing when there is no numeric base
fn next_number(segment: &str, value: &str) -> Result<u32> {
    if value.is_empty() {
        return Err(GitVersionError::version(format!(
            "cannot compute next {} version without a version tag",
            segment
        )));
    }
    value.parse::<u32>().map(|n| n + 1).map_err(|_| {
        GitVersionError::version(format!(
            "cannot compute next {} version from non-numeric '{}'",
            segment, value
        ))
    })
}

/// Every version field for one repository state
///
/// Field order matches the JSON object printed by `--all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionReport {
    pub tag: String,
    pub commit: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub develop: String,
    pub dirty: String,
    pub next_major: u32,
    pub next_minor: u32,
    pub next_patch: u32,
    pub full: String,
}
