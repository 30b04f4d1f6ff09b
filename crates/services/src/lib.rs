#![forbid(unsafe_code)]

pub mod drill;
pub mod error;
pub mod picker;
pub mod translation;

pub use drill_core::Clock;

pub use drill::{ActiveDrill, DrillService, DrillStep, Prompt};
pub use error::{DrillError, TranslationError};
pub use picker::WordPicker;
pub use translation::{
    DictionaryConfig, DictionaryScraper, NO_TRANSLATION, Translation, TranslationSource,
    extract_translation,
};
