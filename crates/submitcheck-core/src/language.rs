//! Primary language detection
//!
//! Only languages with a supported review toolchain compete. Kotlin shares
//! the Java toolchain, so a Kotlin winner is reported as `Java`; Kotlin and
//! Java byte counts are never merged.

use crate::error::Result;
use crate::http::GitHubApiClient;
use crate::types::LanguageByteMap;
use crate::url::parse_repo_url;

/// Lowercase names of the languages that may win
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["java", "kotlin", "python", "ruby"];

/// Reported when no supported language is present
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Lowercase winner name → reported label
const LANGUAGE_ALIASES: [(&str, &str); 1] = [("kotlin", "Java")];

/// Whether `language` is on the allow-list, ignoring case
#[inline]
pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(language))
}

/// Pick the supported language with the most bytes
///
/// Ties go to the lexicographically smallest name. The winner keeps its
/// spelling from the map unless an alias applies.
pub fn select_primary_language(languages: &LanguageByteMap) -> String {
    let mut winner: Option<(&str, u64)> = None;

    // Ascending name order; an equal count never displaces the current winner.
    for (name, &bytes) in languages.iter().filter(|(name, _)| is_supported(name)) {
        match winner {
            Some((_, best)) if bytes <= best => {}
            _ => winner = Some((name.as_str(), bytes)),
        }
    }

    match winner {
        Some((name, _)) => apply_alias(name).to_string(),
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}

fn apply_alias(language: &str) -> &str {
    LANGUAGE_ALIASES
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(language))
        .map(|&(_, to)| to)
        .unwrap_or(language)
}

/// Fetch language statistics for the repository at `url` and pick its primary language
pub async fn detect_language(url: &str, client: &GitHubApiClient) -> Result<String> {
    let repo = parse_repo_url(url)?;
    tracing::info!(repository = %repo, "detecting language");

    let languages = client.fetch_languages(&repo).await?;
    tracing::debug!(
        languages = %serde_json::to_string(&languages).unwrap_or_default(),
        "language data"
    );

    let language = select_primary_language(&languages);
    tracing::info!(%language, "detected primary language");
    Ok(language)
}
