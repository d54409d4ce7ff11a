//! # Submitcheck Core
//!
//! Checks behind the GitHub Actions helpers that review submitted repository links:
//! - **URL parsing**: owner/repo extraction from `github.com` URLs
//! - **URL validation**: new-submission and pull request grammars
//! - **Repository check**: existence and fork status via the GitHub REST API
//! - **Language detection**: primary supported language by byte count
//! - **Output**: `key=value` step outputs and workflow-command annotations
//!
//! Every check issues at most one API request and never retries.
//!
//! ## Example
//!
//! ```no_run
//! use submitcheck_core::{check_repository, ClientConfig, GitHubApiClient};
//!
//! # async fn example() -> submitcheck_core::Result<()> {
//! let client = GitHubApiClient::new(ClientConfig::default());
//! let url = check_repository("github.com/PortSwigger/turbo-intruder/", &client).await?;
//! assert_eq!(url, "https://github.com/PortSwigger/turbo-intruder");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod http;
pub mod language;
pub mod output;
pub mod repository;
pub mod types;
pub mod url;

pub use error::{Error, ErrorKind, Result};
pub use http::{ClientConfig, GitHubApiClient};
pub use language::detect_language;
pub use output::OutputSink;
pub use repository::check_repository;
pub use types::{LanguageByteMap, RepoIdentifier, ValidationMode, ValidationOutcome};
pub use url::{parse_repo_url, validate_url};
