//! Lyrics file fixtures backed by temporary directories

use super::constants::DEFAULT_RELATIVE_PATH;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A lyrics file at `<tempdir>/res/lyrics.json`, removed on drop.
pub struct LyricsFixture {
    dir: TempDir,
    path: PathBuf,
}

impl LyricsFixture {
    /// Creates the fixture with raw file content.
    pub fn with_content(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_RELATIVE_PATH);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        Self { dir, path }
    }

    /// Creates the fixture from a JSON value written compactly.
    pub fn with_records(records: Value) -> Self {
        Self::with_content(&serde_json::to_string(&records).unwrap())
    }

    /// Working directory in which the file sits at the default location.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_raw(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }

    pub fn read_json(&self) -> Value {
        serde_json::from_str(&self.read_raw()).unwrap()
    }
}
