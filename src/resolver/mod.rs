//! Resolution engine for deriving version fields from repository state

pub mod version_resolver;

pub use version_resolver::{VersionReport, VersionResolver};
