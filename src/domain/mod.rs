//! Domain logic - pure version rules independent of command execution

pub mod tag;
pub mod version;

pub use tag::Tag;
pub use version::FullVersion;
