//! LyricsStore trait definition.

use super::models::{LyricsCollection, ShapeError};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or persisting a collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read lyrics file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse lyrics file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid lyrics file {path:?}: {source}")]
    Shape { path: PathBuf, source: ShapeError },

    #[error("Failed to serialize lyrics collection: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to write lyrics file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Trait for lyric collection storage backends.
///
/// A collection is loaded once and saved once; there is no incremental write.
pub trait LyricsStore: Send + Sync {
    /// Location the collection is read from and written to.
    fn path(&self) -> &Path;

    /// Read and validate the whole collection.
    fn load(&self) -> Result<LyricsCollection, StoreError>;

    /// Replace the stored collection. Either the whole new content lands or
    /// the previous content stays untouched.
    fn save(&self, collection: &LyricsCollection) -> Result<(), StoreError>;
}
