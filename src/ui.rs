//! Terminal output formatting.
//!
//! Resolved values print unstyled on stdout. Everything here writes to
//! stderr, keeping diagnostics out of captured command substitutions.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }
}
