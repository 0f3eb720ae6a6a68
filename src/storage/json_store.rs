// ABOUTME: JSON document store rooted at the configured data directory
// ABOUTME: Missing or unparsable documents load as defaults; saves go through a temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Reads and writes whole JSON documents inside one directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Store rooted at `data_dir`; the directory is created on first save
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the documents
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a document
    #[must_use]
    pub fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load a document, falling back to `T::default()`
    ///
    /// A missing file and a file whose contents do not parse as `T` both
    /// yield the default; the latter is logged.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be read
    pub async fn load_or_default<T>(&self, file: &str) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(file);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                AppLogger::log_storage_operation("load_missing", file, true);
                return Ok(T::default());
            }
            Err(e) => {
                AppLogger::log_storage_operation("load", file, false);
                return Err(AppError::storage(format!(
                    "Failed to read {}: {e}",
                    path.display()
                ))
                .with_source(e));
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => {
                AppLogger::log_storage_operation("load", file, true);
                Ok(value)
            }
            Err(e) => {
                warn!(file = %file, error = %e, "Unparsable data file, using defaults");
                Ok(T::default())
            }
        }
    }

    /// Persist a document as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub async fn save<T>(&self, file: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync,
    {
        let contents = serde_json::to_string_pretty(value)?;

        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}: {e}",
                self.data_dir.display()
            ))
            .with_source(e)
        })?;

        let path = self.path(file);
        let tmp_path = self.path(&format!("{file}.tmp"));
        let result = async {
            fs::write(&tmp_path, contents).await?;
            fs::rename(&tmp_path, &path).await
        }
        .await;

        AppLogger::log_storage_operation("save", file, result.is_ok());
        result.map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", path.display())).with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let value: BTreeMap<String, String> = store.load_or_default("absent.json").await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested"));

        let mut value = BTreeMap::new();
        value.insert("milk".to_owned(), "oat milk".to_owned());
        store.save("subs.json", &value).await.unwrap();

        let loaded: BTreeMap<String, String> = store.load_or_default("subs.json").await.unwrap();
        assert_eq!(loaded, value);
        assert!(!store.path("subs.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_garbage_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let store = JsonStore::new(dir.path());

        let value: BTreeMap<String, String> = store.load_or_default("bad.json").await.unwrap();
        assert!(value.is_empty());
    }
}
