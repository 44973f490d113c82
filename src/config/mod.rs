mod file_config;

pub use file_config::FileConfig;

use crate::annotator::AnnotationSettings;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Collection annotated when nothing else is configured.
pub const DEFAULT_LYRICS_FILE: &str = "./res/lyrics.json";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub lyrics_file: Option<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub lyrics_file: PathBuf,
    pub dry_run: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let lyrics_file = file
            .lyrics_file
            .map(PathBuf::from)
            .or_else(|| cli.lyrics_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LYRICS_FILE));

        if lyrics_file.as_os_str().is_empty() {
            bail!("lyrics_file must not be empty");
        }

        let dry_run = file.dry_run.unwrap_or(cli.dry_run);

        Ok(Self {
            lyrics_file,
            dry_run,
        })
    }

    pub fn annotation_settings(&self) -> AnnotationSettings {
        AnnotationSettings {
            dry_run: self.dry_run,
        }
    }
}
