mod models;
mod store;
mod trait_def;

pub use models::{
    LyricsCollection, LyricsRecord, RecordError, ShapeError, LYRICS_FIELD, SENTIMENT_FIELD,
};
pub use store::JsonFileLyricsStore;
pub use trait_def::{LyricsStore, StoreError};
