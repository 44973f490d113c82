use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lyrics_sentiment::config::{self, AppConfig, FileConfig};
use lyrics_sentiment::{Annotator, JsonFileLyricsStore, VaderScorer};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(about = "Annotate a JSON lyrics collection with VADER sentiment scores")]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// JSON array of lyric records to annotate in place.
    /// Defaults to ./res/lyrics.json.
    #[clap(long, value_parser = parse_path)]
    pub lyrics_file: Option<PathBuf>,

    /// Score and report without rewriting the lyrics file.
    #[clap(long)]
    pub dry_run: bool,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            lyrics_file: args.lyrics_file.clone(),
            dry_run: args.dry_run,
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = config::CliConfig::from(&cli_args);
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    // The scorer must be ready before the lyrics file is touched.
    let scorer = VaderScorer::initialize().context("Failed to set up the sentiment scorer")?;

    let store = JsonFileLyricsStore::new(&app_config.lyrics_file);
    let annotator = Annotator::new(Arc::new(scorer), app_config.annotation_settings());
    annotator
        .run(&store)
        .with_context(|| format!("Failed to annotate {:?}", app_config.lyrics_file))?;

    Ok(())
}
