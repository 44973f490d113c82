//! VADER-backed sentiment scorer.
//!
//! Wraps the `vader_sentiment` crate. The lexicon ships inside the crate and
//! is loaded into memory once by [`VaderScorer::initialize`].

use super::trait_def::{PolarityScores, SentimentScorer, SetupError};
use std::collections::HashMap;
use tracing::{debug, info};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Sentence run through the analyzer during setup. Must score clearly positive.
const SELF_CHECK_TEXT: &str = "I love this song, it is wonderful and happy";

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Load the lexicon and verify the analyzer produces usable scores.
    ///
    /// Call once per process before scoring anything.
    pub fn initialize() -> Result<Self, SetupError> {
        let analyzer = std::panic::catch_unwind(SentimentIntensityAnalyzer::new).map_err(|_| {
            SetupError::ResourceUnavailable("failed to load the VADER lexicon".to_string())
        })?;

        let scorer = Self { analyzer };
        let check = scorer.self_check()?;
        info!(
            "VADER lexicon loaded (self-check compound={:.4})",
            check.compound
        );
        Ok(scorer)
    }

    fn self_check(&self) -> Result<PolarityScores, SetupError> {
        let raw = self.analyzer.polarity_scores(SELF_CHECK_TEXT);
        for component in ["neg", "neu", "pos", "compound"] {
            if !raw.contains_key(component) {
                return Err(SetupError::MissingComponent(component));
            }
        }

        let scores = to_polarity_scores(&raw);
        if !scores.compound.is_finite() || scores.compound <= 0.0 {
            return Err(SetupError::SelfCheckFailed(format!(
                "expected a positive compound score for the self-check sentence, got {}",
                scores.compound
            )));
        }
        Ok(scores)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Proportions are rounded to 3 decimals and compound to 4, the precision
/// reference VADER reports.
fn to_polarity_scores(raw: &HashMap<&str, f64>) -> PolarityScores {
    let component = |key: &str| raw.get(key).copied().unwrap_or(0.0);
    PolarityScores {
        negative: round_to(component("neg"), 3),
        neutral: round_to(component("neu"), 3),
        positive: round_to(component("pos"), 3),
        compound: round_to(component("compound"), 4),
    }
}

impl SentimentScorer for VaderScorer {
    fn name(&self) -> &str {
        "vader"
    }

    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let scores = to_polarity_scores(&self.analyzer.polarity_scores(text));
        debug!(
            "Scored {} chars: neg={:.3} neu={:.3} pos={:.3} compound={:.4}",
            text.len(),
            scores.negative,
            scores.neutral,
            scores.positive,
            scores.compound
        );
        scores
    }
}
