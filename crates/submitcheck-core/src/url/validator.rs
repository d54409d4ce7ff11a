//! URL shape validation for submissions and pull requests

use crate::error::Error;
use crate::types::{ValidationMode, ValidationOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

/// Inputs longer than this many characters are rejected before matching
pub const MAX_URL_LENGTH: usize = 500;

/// Owner follows GitHub's username rules: 1-39 alphanumerics, hyphens only inside.
static NEW_SUBMISSION_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https://)?(?:www\.)?github\.com/[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,37}[a-zA-Z0-9])?/[a-zA-Z0-9_.-]{1,100}/?$",
    )
    .expect("new-submission URL pattern is valid")
});

static PULL_REQUEST_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https://)?(?:www\.)?github\.com/[a-zA-Z0-9_.-]{1,100}/[a-zA-Z0-9_.-]{1,100}/pull/[0-9]+/?$",
    )
    .expect("pull request URL pattern is valid")
});

impl ValidationMode {
    fn pattern(&self) -> &'static Regex {
        match self {
            ValidationMode::NewSubmission => &*NEW_SUBMISSION_URL,
            ValidationMode::PullRequest => &*PULL_REQUEST_URL,
        }
    }
}

/// Check `url` against the grammar selected by `mode`
///
/// Only accepts or rejects; an accepted URL is returned unchanged.
pub fn validate_url(url: &str, mode: ValidationMode) -> ValidationOutcome {
    if url.is_empty() {
        return ValidationOutcome::Invalid(Error::MissingInput("URL is required".to_string()));
    }

    if url.chars().count() > MAX_URL_LENGTH {
        return ValidationOutcome::Invalid(Error::UrlTooLong {
            max: MAX_URL_LENGTH,
        });
    }

    if !mode.pattern().is_match(url) {
        return ValidationOutcome::Invalid(Error::UrlMismatch {
            url: url.to_string(),
            mode,
        });
    }

    ValidationOutcome::Valid(url.to_string())
}
