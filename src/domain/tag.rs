/// Represents a git version tag of the form `v<major>.<minor>.<patch>`
///
/// Older tags may carry fewer than three segments; accessors fall back the
/// way release tooling expects (a missing patch segment reads as "0").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Build a tag from `git describe --tags` output
    ///
    /// Past a tagged commit, describe appends `-<count>-g<hash>`; everything
    /// from the first `-` on is dropped.
    pub fn from_describe(output: &str) -> Self {
        Tag::new(output.split('-').next().unwrap_or_default())
    }

    /// Extract version number from tag (e.g., "v1.2.3" -> "1.2.3")
    pub fn version_part(&self) -> &str {
        self.name.strip_prefix('v').unwrap_or(&self.name)
    }

    /// A single dot-separated segment of the version part
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.version_part().split('.').nth(index)
    }

    /// Major version segment
    pub fn major(&self) -> &str {
        self.segment(0).unwrap_or("")
    }

    /// Minor version segment, empty when the tag has only one segment
    pub fn minor(&self) -> &str {
        self.segment(1).unwrap_or("")
    }

    /// Patch version segment, "0" when the tag has fewer than three segments
    pub fn patch(&self) -> &str {
        self.segment(2).unwrap_or("0")
    }
}
