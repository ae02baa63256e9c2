use std::time::Duration;

use fetch::fetch_document;
use log::{debug, warn};
use scraper::Html;
use url::Url;

mod britannica;
mod dictionary;
mod extract;
mod fetch;

pub use britannica::{parse_definitions, parse_entries, parse_parts, parse_word_of_the_day};
pub use dictionary::{Definition, Entry, Image, Meaning, WordOfDay};

pub const BRITANNICA_URL: &str = "https://www.britannica.com";

const WORD_OF_DAY_PATH: [&str; 3] = ["dictionary", "eb", "word-of-day"];

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0} cannot be used as a base url")]
    NotABaseUrl(String),
    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("{url} answered with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Scheme and host every page path is appended to.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: BRITANNICA_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking client for the Britannica dictionary pages.
///
/// None of the lookups fail: a page that cannot be fetched is logged and
/// treated as a page without any of the requested content.
#[derive(Debug)]
pub struct Dictionary {
    client: reqwest::blocking::Client,
    config: DictionaryConfig,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            config: DictionaryConfig::default(),
        }
    }

    pub fn with_config(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DictionaryError::Client)?;
        Ok(Self { client, config })
    }

    pub fn domain(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Fetches and parses any page, reporting why it could not be loaded.
    pub fn document(&self, url: &str) -> Result<Html, DictionaryError> {
        fetch_document(&self.client, Url::parse(url)?)
    }

    pub fn get_entries(&self, word: &str) -> Vec<Entry> {
        self.word_page(word)
            .map(|document| parse_entries(&document, self.domain()))
            .unwrap_or_default()
    }

    pub fn get_total_entries(&self, word: &str) -> usize {
        self.get_entries(word).len()
    }

    pub fn get_word_of_the_day(&self) -> WordOfDay {
        self.page(&WORD_OF_DAY_PATH)
            .map(|document| parse_word_of_the_day(&document))
            .unwrap_or_default()
    }

    pub fn get_parts(&self, word: &str) -> Vec<String> {
        self.word_page(word)
            .map(|document| parse_parts(&document))
            .unwrap_or_default()
    }

    pub fn get_definitions(&self, word: &str) -> Vec<Definition> {
        self.word_page(word)
            .map(|document| parse_definitions(&document))
            .unwrap_or_default()
    }

    fn word_page(&self, word: &str) -> Option<Html> {
        let word = word.trim();
        if word.is_empty() {
            debug!("empty word, nothing to look up");
            return None;
        }
        self.page(&["dictionary", word])
    }

    fn page(&self, segments: &[&str]) -> Option<Html> {
        match self
            .page_url(segments)
            .and_then(|url| fetch_document(&self.client, url))
        {
            Ok(document) => Some(document),
            Err(error) => {
                warn!("An error occurred: {error}");
                None
            }
        }
    }

    fn page_url(&self, segments: &[&str]) -> Result<Url, DictionaryError> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.path_segments_mut()
            .map_err(|_| DictionaryError::NotABaseUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
