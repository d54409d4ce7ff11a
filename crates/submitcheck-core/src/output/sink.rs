//! Step output sink: `$GITHUB_OUTPUT` when available, stdout otherwise

use crate::error::Result;
use std::io::Write;
use std::path::PathBuf;

/// Escape `%`, CR and LF for GitHub Actions. `%` goes first so escapes are not re-escaped.
pub fn safe_output_escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Destination for `key=value` step outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append escaped lines to the runner's output file
    File(PathBuf),
    /// Print unescaped lines to stdout, for running outside Actions
    Stdout,
}

impl OutputSink {
    /// Create from an optional output file path; blank paths fall back to stdout
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() => OutputSink::File(p),
            _ => OutputSink::Stdout,
        }
    }

    /// Create from `GITHUB_OUTPUT`
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from))
    }

    /// The exact line (without newline) this sink emits for `key`/`value`
    pub fn format_line(&self, key: &str, value: &str) -> String {
        match self {
            OutputSink::File(_) => format!("{}={}", key, safe_output_escape(value)),
            OutputSink::Stdout => format!("{}={}", key, value),
        }
    }

    /// Write one output, reporting failures
    pub fn try_set_output(&self, key: &str, value: &str) -> Result<()> {
        let line = self.format_line(key, value);
        match self {
            OutputSink::File(path) => {
                let mut f = std::fs::OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)?;
                writeln!(f, "{}", line)?;
            }
            OutputSink::Stdout => {
                let stdout = std::io::stdout();
                let mut w = stdout.lock();
                writeln!(w, "{}", line)?;
            }
        }
        Ok(())
    }

    /// Write one output; a failure is reported as a warning annotation and otherwise ignored
    pub fn set_output(&self, key: &str, value: &str) {
        if let Err(e) = self.try_set_output(key, value) {
            tracing::debug!(key, error = %e, "output write failed");
            eprintln!(
                "{}",
                super::annotations::warning(&format!(
                    "Could not write {} to GITHUB_OUTPUT: {}",
                    key, e
                ))
            );
        }
    }
}
