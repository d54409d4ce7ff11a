//! GitHub REST API client for repository metadata and language statistics

use crate::error::{Error, Result};
use crate::types::{LanguageByteMap, RepoIdentifier};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github.v3+json";

/// Connection settings for [`GitHubApiClient`]
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL without trailing slash
    pub api_url: String,
    /// Optional token sent as `Authorization: token <value>`
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ClientConfig {
    /// Create from explicit values; blank values count as unset
    pub fn new(api_url: Option<&str>, token: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token = token.filter(|s| !s.is_empty()).map(str::to_string);

        Self { api_url, token }
    }

    /// Create from `GITHUB_API_URL` and `GITHUB_TOKEN`
    pub fn from_env() -> Self {
        let api_url = std::env::var("GITHUB_API_URL").ok();
        let token = std::env::var("GITHUB_TOKEN").ok();
        Self::new(api_url.as_deref(), token.as_deref())
    }
}

/// Subset of the `GET /repos/{owner}/{repo}` response
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryMetadata {
    /// Whether the repository is a fork of another
    #[serde(default)]
    pub fork: Option<bool>,
}

impl RepositoryMetadata {
    /// Missing or null `fork` counts as not a fork
    #[inline]
    pub fn is_fork(&self) -> bool {
        self.fork.unwrap_or(false)
    }
}

/// GitHub API client; every call is a single GET with no retry
pub struct GitHubApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl std::fmt::Debug for GitHubApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GitHubApiClient {
    /// Create a new GitHub API client
    pub fn new(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("submitcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, config }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Fetch repository metadata
    pub async fn fetch_repository(&self, repo: &RepoIdentifier) -> Result<RepositoryMetadata> {
        let url = format!(
            "{}/repos/{}/{}",
            self.config.api_url,
            repo.owner(),
            repo.name()
        );
        self.get_json(&url, repo).await
    }

    /// Fetch bytes of code per language
    pub async fn fetch_languages(&self, repo: &RepoIdentifier) -> Result<LanguageByteMap> {
        let url = format!(
            "{}/repos/{}/{}/languages",
            self.config.api_url,
            repo.owner(),
            repo.name()
        );
        self.get_json(&url, repo).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, repo: &RepoIdentifier) -> Result<T> {
        let mut request = self.client.get(url).header("Accept", ACCEPT);

        if let Some(ref token) = self.config.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        check_status(response.status(), repo)?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Map a response status onto the error taxonomy
fn check_status(status: StatusCode, repo: &RepoIdentifier) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::NOT_FOUND {
        return Err(Error::RepositoryNotFound(repo.clone()));
    }
    Err(Error::Api {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}
