use std::env;
use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use drill_core::model::Word;

use crate::error::TranslationError;

/// Shown when the dictionary page has no translation element.
pub const NO_TRANSLATION: &str = "No translation found.";

const DEFAULT_URL_TEMPLATE: &str = "https://dictionary.cambridge.org/zht/%E8%A9%9E%E5%85%B8/%E8%8B%B1%E8%AA%9E-%E6%BC%A2%E8%AA%9E-%E7%B9%81%E9%AB%94/{word}";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36";
const DEFAULT_MARKER_CLASS: &str = "dtrans";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// URL with a `{word}` placeholder. The word is substituted verbatim.
    pub url_template: String,
    pub user_agent: String,
    /// CSS class of the element holding the translation.
    pub marker_class: String,
}

impl DictionaryConfig {
    /// Defaults, overridden by `DRILL_DICTIONARY_URL`, `DRILL_USER_AGENT`
    /// and `DRILL_TRANSLATION_CLASS` when set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url_template: env_or("DRILL_DICTIONARY_URL", defaults.url_template),
            user_agent: env_or("DRILL_USER_AGENT", defaults.user_agent),
            marker_class: env_or("DRILL_TRANSLATION_CLASS", defaults.marker_class),
        }
    }

    #[must_use]
    pub fn url_for(&self, word: &str) -> String {
        self.url_template.replace("{word}", word)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            marker_class: DEFAULT_MARKER_CLASS.into(),
        }
    }
}

fn env_or(key: &str, fallback: String) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(fallback)
}

/// A looked-up translation. Displays as the scraped text or [`NO_TRANSLATION`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Translation {
    Found(String),
    NotFound,
}

impl Translation {
    /// Empty or whitespace-only text counts as not found.
    #[must_use]
    pub fn from_text(text: Option<String>) -> Self {
        match text {
            Some(text) if !text.trim().is_empty() => Self::Found(text.trim().to_owned()),
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Translation::Found(text) => text,
            Translation::NotFound => NO_TRANSLATION,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Translation::Found(_))
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up one word. Called on every presentation; results are never cached.
#[async_trait]
pub trait TranslationSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `TranslationError` when the lookup itself fails. A page without a
    /// translation is `Ok(Translation::NotFound)`, not an error.
    async fn lookup(&self, word: &Word) -> Result<Translation, TranslationError>;
}

/// Text of the first element matching `selector`, if any.
#[must_use]
pub fn extract_translation(html: &str, selector: &Selector) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

fn marker_selector(class: &str) -> Result<Selector, TranslationError> {
    Selector::parse(&format!(".{class}")).map_err(|err| TranslationError::InvalidMarker {
        class: class.to_string(),
        reason: err.to_string(),
    })
}

/// Scrapes a web dictionary page for the translation element.
#[derive(Clone)]
pub struct DictionaryScraper {
    client: Client,
    config: DictionaryConfig,
    selector: Selector,
}

impl DictionaryScraper {
    /// # Errors
    ///
    /// Returns `TranslationError` if the HTTP client cannot be built or the
    /// marker class is not a valid CSS class name.
    pub fn new(config: DictionaryConfig) -> Result<Self, TranslationError> {
        let selector = marker_selector(&config.marker_class)?;
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            config,
            selector,
        })
    }

    /// # Errors
    ///
    /// See [`DictionaryScraper::new`].
    pub fn from_env() -> Result<Self, TranslationError> {
        Self::new(DictionaryConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }
}

#[async_trait]
impl TranslationSource for DictionaryScraper {
    async fn lookup(&self, word: &Word) -> Result<Translation, TranslationError> {
        let url = self.config.url_for(word.as_str());
        tracing::debug!(%word, %url, "looking up translation");

        // Error statuses still carry a page worth searching.
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%word, %status, bytes = body.len(), "dictionary responded");

        let translation = Translation::from_text(extract_translation(&body, &self.selector));
        if !translation.is_found() {
            tracing::info!(%word, class = %self.config.marker_class, "no translation element");
        }
        Ok(translation)
    }
}
