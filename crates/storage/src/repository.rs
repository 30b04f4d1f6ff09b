use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use drill_core::model::{WordList, WordListError};
use thiserror::Error;

use crate::file::FileWordSource;

/// Errors surfaced by word sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    WordList(#[from] WordListError),
}

/// Source of raw word-list lines.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Load every line, untrimmed, in order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing data cannot be read.
    async fn load_lines(&self) -> Result<Vec<String>, StorageError>;

    /// Human-readable origin of the lines, used in logs.
    fn describe(&self) -> String;
}

/// Load a source and build the trimmed, non-empty `WordList` from it.
///
/// # Errors
///
/// Returns `StorageError::Io` for read failures and `StorageError::WordList`
/// when the source holds no words.
pub async fn load_word_list(source: &dyn WordSource) -> Result<WordList, StorageError> {
    let lines = source.load_lines().await?;
    Ok(WordList::from_lines(lines)?)
}

/// Fixed lines held in memory, for tests and embedding.
#[derive(Clone, Default)]
pub struct InMemoryWordSource {
    lines: Arc<Vec<String>>,
}

impl InMemoryWordSource {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Arc::new(lines.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl WordSource for InMemoryWordSource {
    async fn load_lines(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lines.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} lines)", self.lines.len())
    }
}

/// Word source selected at startup.
#[derive(Clone)]
pub struct Storage {
    pub words: Arc<dyn WordSource>,
}

impl Storage {
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            words: Arc::new(FileWordSource::new(path)),
        }
    }

    #[must_use]
    pub fn in_memory<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Arc::new(InMemoryWordSource::new(lines)),
        }
    }

    /// # Errors
    ///
    /// See [`load_word_list`].
    pub async fn load_word_list(&self) -> Result<WordList, StorageError> {
        load_word_list(self.words.as_ref()).await
    }
}
