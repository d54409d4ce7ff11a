//! Owner/repo extraction from GitHub web URLs

use crate::error::{Error, Result};
use crate::types::RepoIdentifier;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored at the start only: anything after the second segment is ignored.
static REPO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https://)?(?:www\.)?github\.com/([^/]+)/([^/]+)")
        .expect("repository URL pattern is valid")
});

/// Extract the owner and repository name from a GitHub URL
///
/// Accepts an optional `https://` scheme and an optional `www.` prefix.
///
/// # Example
///
/// ```
/// use submitcheck_core::url::parse_repo_url;
///
/// let repo = parse_repo_url("github.com/PortSwigger/turbo-intruder/").unwrap();
/// assert_eq!(repo.owner(), "PortSwigger");
/// assert_eq!(repo.name(), "turbo-intruder");
/// ```
pub fn parse_repo_url(url: &str) -> Result<RepoIdentifier> {
    let caps = REPO_URL
        .captures(url)
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

    let owner = &caps[1];
    let name = caps[2].trim_end_matches('/');

    Ok(RepoIdentifier::new(owner, name))
}
