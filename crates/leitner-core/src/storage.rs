// Rust guideline compliant 2026-10-19

//! Durable state file.
//!
//! This module reads and writes the JSON state document. Loading separates
//! three outcomes: no file yet (`Ok(None)`), a file that is not valid JSON
//! (`Error::Corruption`), and any other IO failure (`Error::Io`). Saving is
//! atomic (temp file + rename) and serialized so two saves never overlap.

use crate::{Document, Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistence gateway for the state document.
#[derive(Debug)]
pub struct StateFile {
    /// Path to the JSON state file.
    path: PathBuf,
    /// Held for the duration of a save.
    save_guard: Mutex<()>,
}

impl StateFile {
    /// Creates a new StateFile instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON state file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self {
            path,
            save_guard: Mutex::new(()),
        })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the state file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the state file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }
}

impl StateFile {
    /// Loads the state document.
    ///
    /// # Returns
    ///
    /// `Ok(Some(document))` if the file exists and parses, `Ok(None)` if
    /// there is no file at the path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but is not valid JSON (`Error::Corruption`)
    /// - The file cannot be read for any other reason (`Error::Io`)
    pub fn load(&self) -> Result<Option<Document>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no state file found");
                return Ok(None);
            }
            Err(err) => return Err(Error::Io(err)),
        };

        let value = serde_json::from_slice(&bytes).map_err(|source| Error::Corruption {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "loaded state file");
        Ok(Some(Document::from_value(value)))
    }
}

impl StateFile {
    /// Saves the state document.
    ///
    /// Writes pretty-printed JSON to a temp file in the same directory,
    /// syncs it and renames it over the target. Missing parent directories
    /// are created. If any step fails the previous file is left untouched.
    ///
    /// # Arguments
    ///
    /// * `document` - The document to persist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The lock cannot be acquired
    /// - The temp file cannot be written or renamed
    pub fn save(&self, document: &Document) -> Result<()> {
        let _guard = self
            .save_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut json = document.to_pretty_string()?;
        json.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.with_lock(|| {
            let temp_path = self.temp_path();
            let result = write_and_rename(&temp_path, &self.path, json.as_bytes());
            if result.is_err() {
                let _ = fs::remove_file(&temp_path);
            }
            result
        })?;

        tracing::debug!(path = %self.path.display(), bytes = json.len(), "saved state file");
        Ok(())
    }

    /// Executes a closure with an exclusive lock on the state file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock cannot be acquired
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}

fn write_and_rename(temp_path: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    {
        let mut file = File::create(temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    fs::rename(temp_path, target)?;
    Ok(())
}
