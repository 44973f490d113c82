//! Lyrics Sentiment Library
//!
//! Annotates a JSON collection of song records with a compound sentiment score.
//! The binary is a thin wrapper around [`annotate`] and [`Annotator`].

pub mod annotator;
pub mod config;
pub mod lyrics_store;
pub mod sentiment;

// Re-export commonly used types for convenience
pub use annotator::{
    annotate, annotate_with, AnnotateError, AnnotationSettings, AnnotationSummary, Annotator,
};
pub use lyrics_store::{JsonFileLyricsStore, LyricsCollection, LyricsRecord, LyricsStore};
pub use sentiment::{PolarityScores, SentimentScorer, SetupError, VaderScorer};
