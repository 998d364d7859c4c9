pub mod config;
pub mod domain;
pub mod error;
pub mod resolver;
pub mod runner;
pub mod ui;

pub use error::{GitVersionError, Result};
