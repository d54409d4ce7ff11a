//! Error types for submitcheck-core

use crate::types::{RepoIdentifier, ValidationMode};

/// Result type alias for submitcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for submitcheck operations
///
/// `Display` renders the exact message reported to the CI log, so every
/// variant embeds the offending URL or `owner/repo` it refers to.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input (URL argument or environment variable) was not supplied
    #[error("{0}")]
    MissingInput(String),

    /// Input could not be parsed into an owner/repo pair
    #[error("Could not extract owner/repo from URL: {0}")]
    InvalidUrl(String),

    /// Input is longer than the validator accepts
    #[error("URL exceeds maximum length of {max} characters")]
    UrlTooLong {
        /// Maximum accepted length in characters
        max: usize,
    },

    /// Input does not match the grammar of the selected validation mode
    #[error("{}", mismatch_message(.mode, .url))]
    UrlMismatch {
        /// Rejected input, verbatim
        url: String,
        /// Grammar the input was checked against
        mode: ValidationMode,
    },

    /// GitHub answered 404 for the repository
    #[error("GitHub repository not found: {0}")]
    RepositoryNotFound(RepoIdentifier),

    /// GitHub answered with any other non-success status
    #[error("GitHub API error: {status} {reason}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
    },

    /// Repository is a fork; only original repositories are accepted
    #[error(
        "Repository {0} is a fork. Extensions must be original work, not derivatives of other repositories. Please submit the original repository instead."
    )]
    ForkRejected(RepoIdentifier),

    /// Transport-level HTTP failure
    #[error("GitHub API request failed: {0}")]
    Http(String),

    /// Response body could not be decoded
    #[error("Failed to parse GitHub API response: {0}")]
    Decode(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Runtime error (Tokio)
    #[error("Runtime error: {0}")]
    Runtime(String),
}

fn mismatch_message(mode: &ValidationMode, url: &str) -> String {
    match mode {
        ValidationMode::NewSubmission => format!(
            "Invalid GitHub URL: \"{}\". Expected format: https://github.com/owner/repo",
            url
        ),
        ValidationMode::PullRequest => format!(
            "Invalid GitHub PR URL format: \"{}\". Expected: https://github.com/owner/repo/pull/123",
            url
        ),
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Required input missing
    MissingInput,
    /// Unparseable URL
    InvalidUrl,
    /// URL over the length limit
    UrlTooLong,
    /// URL shape rejected by the validator
    UrlMismatch,
    /// Repository does not exist
    RepositoryNotFound,
    /// Non-success API status
    Api,
    /// Submission policy: forks are rejected
    ForkRejected,
    /// Transport error
    Http,
    /// Malformed response body
    Decode,
    /// I/O error
    Io,
    /// Runtime error
    Runtime,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInput(_) => ErrorKind::MissingInput,
            Error::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Error::UrlTooLong { .. } => ErrorKind::UrlTooLong,
            Error::UrlMismatch { .. } => ErrorKind::UrlMismatch,
            Error::RepositoryNotFound(_) => ErrorKind::RepositoryNotFound,
            Error::Api { .. } => ErrorKind::Api,
            Error::ForkRejected(_) => ErrorKind::ForkRejected,
            Error::Http(_) => ErrorKind::Http,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }
}
