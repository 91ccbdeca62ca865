//! Formatting collaborator contract
//!
//! The pretty-printing step is an external collaborator: it receives source
//! text plus fixed indentation settings and returns reformatted text.
//! Failures are not expected and not modeled.

/// Fixed indentation settings handed to the formatting collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent_size: usize,
    pub max_preserve_newlines: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            max_preserve_newlines: 2,
        }
    }
}

/// External formatting collaborator
pub trait Formatter {
    fn format(&self, source: &str, options: &FormatOptions) -> String;
}
