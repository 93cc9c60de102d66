//! Durable whole-document storage.
//!
//! One JSON file holds the entire [`Document`]; every save replaces it
//! atomically (temp file in the target directory, then rename), so a
//! concurrent `load` observes either the old or the new content, never a
//! partial write. There is no locking: two racing saves resolve to
//! last-write-wins over the whole document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::Document;

pub const DATA_FILE_NAME: &str = "data.json";
pub const GUARD_FILE_NAME: &str = ".htaccess";

#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
    /// Whether this store should lay down the access guard next to the
    /// data file. Set by the caller only when the file sits in its default
    /// location; always skippable via configuration.
    guard: bool,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: false,
        }
    }

    pub fn with_access_guard(mut self, guard: bool) -> Self {
        self.guard = guard;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted document.
    ///
    /// Never fails: a missing file yields the canonical empty document and
    /// malformed or legacy content is recovered per [`Document::decode`].
    /// Unexpected read errors are logged and also recover empty, favoring
    /// availability over strictness.
    pub fn load(&self) -> Document {
        match fs::read(&self.path) {
            Ok(bytes) => Document::decode(&bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Document::default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "unreadable document, recovering empty: {}", e
                );
                Document::default()
            }
        }
    }

    /// Replace the persisted document in one atomic step.
    ///
    /// Missing parent directories are created first. On success the new
    /// content is immediately visible to the next `load` by this process.
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(document)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| StoreError::DirectoryUnwritable {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let mut tmp =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::WriteFailed {
                path: self.path.clone(),
                source: e,
            })?;
        tmp.write_all(&json).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;
        tmp.persist(&self.path).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e.error,
        })?;

        Ok(())
    }

    /// Lay down an Apache `.htaccess` denying direct fetch of the data file
    /// through a web server that happens to serve its directory.
    ///
    /// Deployment hardening only, not part of the data contract: it runs
    /// once (an existing guard file is left alone), and failure is logged
    /// rather than surfaced.
    pub fn ensure_access_guard(&self) {
        if !self.guard {
            return;
        }
        let Some(dir) = self.path.parent() else {
            return;
        };
        let guard_path = dir.join(GUARD_FILE_NAME);
        if guard_path.exists() {
            return;
        }
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DATA_FILE_NAME);
        let contents = format!(
            "<Files \"{}\">\n  Order Deny,Allow\n  Deny from all\n</Files>\n",
            file_name
        );
        match fs::write(&guard_path, contents) {
            Ok(()) => tracing::info!(path = %guard_path.display(), "wrote access guard"),
            Err(e) => tracing::warn!(
                path = %guard_path.display(),
                "failed to write access guard: {}", e
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot create data directory {path}: {source}")]
    DirectoryUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
