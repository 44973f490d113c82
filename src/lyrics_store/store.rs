//! JSON file backed lyrics store.

use super::models::LyricsCollection;
use super::trait_def::{LyricsStore, StoreError};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Lyrics collection stored as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileLyricsStore {
    path: PathBuf,
}

impl JsonFileLyricsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Write `bytes` to a sibling temp file, then rename it over the target.
    fn write_atomically(&self, bytes: &[u8]) -> io::Result<()> {
        let permissions = match fs::metadata(&self.path) {
            Ok(metadata) => {
                if metadata.permissions().readonly() {
                    return Err(io::Error::new(
                        io::ErrorKind::PermissionDenied,
                        "refusing to replace a lyrics file whose write permission bits are cleared",
                    ));
                }
                Some(metadata.permissions())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e),
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(bytes)?;
        temp_file.as_file().sync_all()?;
        if let Some(permissions) = permissions {
            temp_file.as_file().set_permissions(permissions)?;
        }
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl LyricsStore for JsonFileLyricsStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<LyricsCollection, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let collection = LyricsCollection::try_from(value).map_err(|source| StoreError::Shape {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Loaded {} records from {:?}",
            collection.len(),
            self.path
        );
        Ok(collection)
    }

    fn save(&self, collection: &LyricsCollection) -> Result<(), StoreError> {
        let mut content = serde_json::to_string_pretty(collection).map_err(StoreError::Serialize)?;
        content.push('\n');

        self.write_atomically(content.as_bytes())
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "Wrote {} records ({} bytes) to {:?}",
            collection.len(),
            content.len(),
            self.path
        );
        Ok(())
    }
}
