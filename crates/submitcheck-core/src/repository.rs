//! Repository existence and fork check

use crate::error::{Error, Result};
use crate::http::GitHubApiClient;
use crate::url::parse_repo_url;

/// Confirm that `url` names an existing, non-fork repository
///
/// Returns the normalized `https://github.com/{owner}/{repo}` URL.
pub async fn check_repository(url: &str, client: &GitHubApiClient) -> Result<String> {
    let repo = parse_repo_url(url)?;
    tracing::info!(repository = %repo, "validating repository");

    let metadata = client.fetch_repository(&repo).await?;
    if metadata.is_fork() {
        return Err(Error::ForkRejected(repo));
    }

    Ok(repo.normalized_url())
}
