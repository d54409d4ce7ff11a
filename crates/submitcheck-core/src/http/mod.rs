//! HTTP client for GitHub API

pub mod client;

pub use client::{ClientConfig, GitHubApiClient, RepositoryMetadata, DEFAULT_API_URL};
