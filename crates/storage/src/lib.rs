#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use file::{FileWordSource, load_lines};
pub use repository::{InMemoryWordSource, Storage, StorageError, WordSource, load_word_list};
