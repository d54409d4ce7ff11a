//! Core type definitions

use crate::error::Error;
use std::collections::BTreeMap;
use std::fmt;

/// Bytes of code per language, as reported by the GitHub languages endpoint
///
/// Ordered by name so that iteration, and therefore tie-breaking, is deterministic.
pub type LanguageByteMap = BTreeMap<String, u64>;

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoIdentifier {
    owner: String,
    name: String,
}

impl RepoIdentifier {
    /// Create a new identifier
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Repository owner (user or organization)
    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical web URL: `https://github.com/{owner}/{name}`, no trailing slash
    pub fn normalized_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Which URL grammar the shape validator applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Repository URL submitted for review: `github.com/{owner}/{repo}`
    NewSubmission,
    /// Pull request URL: `github.com/{owner}/{repo}/pull/{number}`
    #[default]
    PullRequest,
}

impl ValidationMode {
    /// Token selecting [`ValidationMode::NewSubmission`] on the command line
    pub const NEW_SUBMISSION_TOKEN: &'static str = "new-submission";

    /// Resolve the optional mode token. Anything but `new-submission` selects PR mode.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(Self::NEW_SUBMISSION_TOKEN) => Self::NewSubmission,
            _ => Self::PullRequest,
        }
    }

    /// Get string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewSubmission => "new-submission",
            Self::PullRequest => "pull-request",
        }
    }
}

/// Result of a URL shape check
#[derive(Debug)]
pub enum ValidationOutcome {
    /// URL accepted; carried verbatim
    Valid(String),
    /// URL rejected, with the reason
    Invalid(Error),
}

impl ValidationOutcome {
    /// Whether the URL was accepted
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Convert into a `Result`, surfacing the rejection reason as the error
    pub fn into_result(self) -> crate::Result<String> {
        match self {
            Self::Valid(url) => Ok(url),
            Self::Invalid(err) => Err(err),
        }
    }
}
