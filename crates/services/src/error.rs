//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::model::SessionError;
use storage::StorageError;

/// Errors emitted by translation sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslationError {
    #[error("invalid translation marker class {class:?}: {reason}")]
    InvalidMarker { class: String, reason: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `DrillService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrillError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
