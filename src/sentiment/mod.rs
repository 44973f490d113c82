mod trait_def;
mod vader;

pub use trait_def::{PolarityScores, SentimentScorer, SetupError};
pub use vader::VaderScorer;
