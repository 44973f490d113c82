//! Shared constants for end-to-end tests

/// Lyrics that VADER scores clearly positive
pub const HAPPY_LYRICS: &str = "I am so happy and joyful";

/// Lyrics that VADER scores clearly negative
pub const SAD_LYRICS: &str = "I hate everything, this is terrible";

/// Lyrics with no sentiment-bearing words
pub const NEUTRAL_LYRICS: &str = "The table is made of wood";

/// Path of the lyrics file relative to the working directory when no flag is given
pub const DEFAULT_RELATIVE_PATH: &str = "res/lyrics.json";

/// Name of the binary under test
pub const BIN_PATH: &str = env!("CARGO_BIN_EXE_lyrics-sentiment");
