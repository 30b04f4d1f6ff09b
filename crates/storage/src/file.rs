use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::repository::{StorageError, WordSource};

/// Read a UTF-8 text file and return one entry per line, line terminators included.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file is missing, unreadable or not UTF-8.
pub async fn load_lines(path: &Path) -> Result<Vec<String>, StorageError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(text.split_inclusive('\n').map(str::to_owned).collect())
}

/// A newline-delimited word file on disk.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WordSource for FileWordSource {
    async fn load_lines(&self) -> Result<Vec<String>, StorageError> {
        load_lines(&self.path).await
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
