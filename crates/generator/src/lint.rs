//! Diagnostic collaborator contract
//!
//! The lint step is an external collaborator consumed through a narrow
//! trait: it receives generated source text plus a fixed option set and
//! returns severity-coded findings. Its result is captured per call and
//! never shared across calls.

/// Severity marker: any diagnostic whose code starts with this is fatal
pub const ERROR_MARKER: char = 'E';

/// One finding reported by the lint collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity code, e.g. `E030` or `W033`
    pub code: String,

    pub message: String,

    /// Offending source snippet
    pub evidence: String,
}

/// Fixed option set handed to the lint collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintOptions {
    /// Node environment hint
    pub node: bool,

    /// Browser environment hint
    pub browser: bool,

    /// Flag undeclared identifiers
    pub undef: bool,

    /// Strict mode
    pub strict: bool,
}

/// External lint collaborator
pub trait Linter {
    fn lint(&self, source: &str, options: &LintOptions) -> Vec<Diagnostic>;
}

/// First error-severity diagnostic, if any
pub(crate) fn first_fatal(diagnostics: &[Diagnostic]) -> Option<&Diagnostic> {
    diagnostics.iter().find(|d| d.code.starts_with(ERROR_MARKER))
}
