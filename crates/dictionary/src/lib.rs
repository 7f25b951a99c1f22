use dictionary_api::get_definition;
use reqwest::Url;
use serde::Deserialize;

mod dictionary;
mod dictionary_api;

pub use dictionary::{License, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the dictionary response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("{0}")]
    NotFound(NotFoundError),
    #[error("invalid dictionary url {0:?}")]
    InvalidBaseUrl(String),
}

/// Error body the API sends alongside a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct NotFoundError {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resolution: String,
}

impl NotFoundError {
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        Self {
            title: "No Definitions Found".to_string(),
            message: format!("the dictionary answered with status {status}"),
            resolution: String::new(),
        }
    }
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.title.is_empty(), self.message.is_empty()) {
            (false, false) => write!(f, "{}: {}", self.title, self.message),
            (false, true) => f.write_str(&self.title),
            (true, _) => f.write_str(&self.message),
        }
    }
}

/// Anything that can resolve a search term into a dictionary entry.
#[async_trait::async_trait]
pub trait LookupSource: Send + Sync {
    async fn lookup(&self, term: &str) -> Result<Word, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(DICTIONARY_API_URL).expect("the default dictionary url is valid"),
        }
    }

    /// Points the client at another deployment of the same API.
    pub fn with_base_url(base_url: &str) -> Result<Self, DictionaryError> {
        let parsed = Url::parse(base_url)
            .map_err(|_| DictionaryError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(DictionaryError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LookupSource for Dictionary {
    async fn lookup(&self, term: &str) -> Result<Word, DictionaryError> {
        self.get_definition(term).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            Dictionary::with_base_url("not a url"),
            Err(DictionaryError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            Dictionary::with_base_url("mailto:someone@example.com"),
            Err(DictionaryError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn default_points_at_public_api() {
        let dict = Dictionary::new();
        assert_eq!(dict.base_url().as_str(), DICTIONARY_API_URL);
    }

    #[test]
    fn not_found_display_prefers_api_text() {
        let error: NotFoundError = serde_json::from_str(include_str!(
            "../tests/fixtures/not_found.json"
        ))
        .unwrap();
        assert_eq!(
            error.to_string(),
            "No Definitions Found: Sorry pal, we couldn't find definitions for the word you were looking for."
        );
    }
}
