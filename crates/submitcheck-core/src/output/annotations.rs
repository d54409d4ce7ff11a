//! Workflow-command annotations (`::error::`, `::warning::`)

use super::sink::safe_output_escape;
use std::fmt;

/// Severity of a workflow-command annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    /// Fails the step visually and lists the message in the run summary
    Error,
    /// Non-fatal problem
    Warning,
}

impl AnnotationLevel {
    /// Workflow command name
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for AnnotationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a one-line annotation, escaping the message so it stays on one line
pub fn annotation(level: AnnotationLevel, message: &str) -> String {
    format!("::{}::{}", level, safe_output_escape(message))
}

/// `::error::{message}`
#[inline]
pub fn error(message: &str) -> String {
    annotation(AnnotationLevel::Error, message)
}

/// `::warning::{message}`
#[inline]
pub fn warning(message: &str) -> String {
    annotation(AnnotationLevel::Warning, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_annotation() {
        assert_eq!(
            error("GitHub repository not found: owner/repo"),
            "::error::GitHub repository not found: owner/repo"
        );
    }

    #[test]
    fn test_multiline_message_stays_on_one_line() {
        let line = warning("first\nsecond");
        assert_eq!(line, "::warning::first%0Asecond");
        assert!(!line.contains('\n'));
    }
}
