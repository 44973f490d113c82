use crate::lyrics_store::StoreError;
use crate::sentiment::SetupError;
use thiserror::Error;

/// Errors that abort an annotation run. Nothing is written when one occurs.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Record {index} received a non-finite sentiment score ({value})")]
    InvalidScore { index: usize, value: f64 },
}
