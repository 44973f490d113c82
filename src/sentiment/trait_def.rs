//! SentimentScorer trait definition.

use thiserror::Error;

/// Polarity breakdown of a piece of text.
///
/// `negative`, `neutral` and `positive` are proportions of the text.
/// `compound` is the normalized overall polarity in [-1.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

/// Errors raised while preparing a scorer for use.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Scorer resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Scorer output is missing the '{0}' component")]
    MissingComponent(&'static str),

    #[error("Scorer self-check failed: {0}")]
    SelfCheckFailed(String),
}

/// Trait for sentiment scorers.
///
/// Implementations are fully initialized when constructed; scoring itself
/// cannot fail.
pub trait SentimentScorer: Send + Sync {
    /// Short identifier of the scorer (e.g., "vader").
    fn name(&self) -> &str;

    /// Score the given text.
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}
