//! Sentiment annotation pass.
//!
//! Loads a lyrics collection, scores every record that has lyrics but no
//! sentiment yet, and writes the whole collection back in one go.

mod error;
mod summary;

pub use error::AnnotateError;
pub use summary::{AnnotationSettings, AnnotationSummary};

use crate::lyrics_store::{JsonFileLyricsStore, LyricsCollection, LyricsStore};
use crate::sentiment::{SentimentScorer, SetupError, VaderScorer};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Annotator {
    scorer: Arc<dyn SentimentScorer>,
    settings: AnnotationSettings,
}

impl Annotator {
    pub fn new(scorer: Arc<dyn SentimentScorer>, settings: AnnotationSettings) -> Self {
        Self { scorer, settings }
    }

    /// Score records in place. Record order and unrelated fields are untouched.
    pub fn annotate_collection(
        &self,
        collection: &mut LyricsCollection,
    ) -> Result<AnnotationSummary, AnnotateError> {
        let mut summary = AnnotationSummary {
            total: collection.len(),
            ..Default::default()
        };

        for (index, record) in collection.records_mut().iter_mut().enumerate() {
            let Some(lyrics) = record.lyrics() else {
                debug!("Record {} has no lyrics, skipping", index);
                summary.without_lyrics += 1;
                continue;
            };

            if record.has_sentiment() {
                debug!("Record {} already has a sentiment, skipping", index);
                summary.already_scored += 1;
                continue;
            }

            let raw = self.scorer.polarity_scores(lyrics).compound;
            let compound = raw.clamp(-1.0, 1.0);
            if raw.is_finite() && compound != raw {
                warn!(
                    "Scorer {} returned out of range compound {} for record {}, clamped to {}",
                    self.scorer.name(),
                    raw,
                    index,
                    compound
                );
            }

            record
                .set_sentiment(compound)
                .map_err(|_| AnnotateError::InvalidScore { index, value: raw })?;
            debug!("Record {} scored {:.4}", index, compound);
            summary.scored += 1;
        }

        Ok(summary)
    }

    /// Load, annotate and persist the collection held by `store`.
    pub fn run(&self, store: &dyn LyricsStore) -> Result<AnnotationSummary, AnnotateError> {
        info!(
            "Annotating {:?} with the {} scorer",
            store.path(),
            self.scorer.name()
        );

        let mut collection = store.load()?;
        let summary = self.annotate_collection(&mut collection)?;

        if self.settings.dry_run {
            info!("Dry run, leaving {:?} untouched", store.path());
        } else {
            store.save(&collection)?;
        }

        info!(
            "Annotation complete: {} records, {} scored, {} already scored, {} without lyrics",
            summary.total, summary.scored, summary.already_scored, summary.without_lyrics
        );
        Ok(summary)
    }
}

/// Annotate the lyrics file at `path` with VADER compound scores.
///
/// Sets up the scorer before touching the file, then rewrites the file once
/// after every record has been processed.
pub fn annotate(path: &Path) -> Result<AnnotationSummary, AnnotateError> {
    annotate_with(path, VaderScorer::initialize)
}

/// Same as [`annotate`] with a caller-supplied scorer setup step.
///
/// `init_scorer` runs before the file is opened; if it fails the file is
/// never read or written.
pub fn annotate_with<S, F>(path: &Path, init_scorer: F) -> Result<AnnotationSummary, AnnotateError>
where
    S: SentimentScorer + 'static,
    F: FnOnce() -> Result<S, SetupError>,
{
    let scorer = init_scorer()?;
    let annotator = Annotator::new(Arc::new(scorer), AnnotationSettings::default());
    annotator.run(&JsonFileLyricsStore::new(path))
}
