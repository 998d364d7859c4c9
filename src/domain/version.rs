use crate::error::{GitVersionError, Result};
use std::fmt;

/// A fully composed version string broken into its parts
///
/// Renders as `<major>.<minor>.<patch>[-develop][-dirty]+<commit>`, for
/// example `2.11.2-develop-dirty+1a2b3c4d`. Fields hold the literal strings
/// the resolvers produce, so a field that could not be resolved stays empty
/// instead of failing the composition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FullVersion {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub develop: String,
    pub dirty: String,
    pub commit: String,
}

impl FullVersion {
    /// Parse a composed version string back into its parts
    ///
    /// The composed form is a valid semantic version: the state markers make
    /// up the prerelease segment and the commit hash is build metadata, so
    /// parsing delegates to the `semver` crate. Prerelease markers other than
    /// `develop` and `dirty` are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let version = semver::Version::parse(text).map_err(|e| {
            GitVersionError::version(format!("Invalid version string '{}': {}", text, e))
        })?;

        let mut develop = String::new();
        let mut dirty = String::new();
        if !version.pre.is_empty() {
            for marker in version.pre.as_str().split('-') {
                match marker {
                    "develop" => develop = marker.to_string(),
                    "dirty" => dirty = marker.to_string(),
                    other => {
                        return Err(GitVersionError::version(format!(
                            "Unrecognized marker '{}' in version '{}'",
                            other, text
                        )))
                    }
                }
            }
        }

        Ok(FullVersion {
            major: version.major.to_string(),
            minor: version.minor.to_string(),
            patch: version.patch.to_string(),
            develop,
            dirty,
            commit: version.build.as_str().to_string(),
        })
    }

    /// Whether two versions can interoperate
    ///
    /// Versions sharing a major number are compatible regardless of their
    /// minor and patch numbers.
    pub fn is_compatible_with(&self, other: &FullVersion) -> bool {
        self.major == other.major
    }

    /// Error-returning form of the compatibility check
    pub fn ensure_compatible_with(&self, other: &FullVersion) -> Result<()> {
        if self.is_compatible_with(other) {
            Ok(())
        } else {
            Err(GitVersionError::version(format!(
                "version {} is not compatible with version {}",
                self, other
            )))
        }
    }
}

impl fmt::Display for FullVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        let markers: Vec<&str> = [self.develop.as_str(), self.dirty.as_str()]
            .into_iter()
            .filter(|m| !m.is_empty())
            .collect();
        if !markers.is_empty() {
            write!(f, "-{}", markers.join("-"))?;
        }
        write!(f, "+{}", self.commit)
    }
}
