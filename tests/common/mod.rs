//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{LyricsFixture, HAPPY_LYRICS};
//!
//! #[test]
//! fn test_happy() {
//!     let fixture = LyricsFixture::with_records(serde_json::json!([{"lyrics": HAPPY_LYRICS}]));
//!     lyrics_sentiment::annotate(fixture.path()).unwrap();
//! }
//! ```

#![allow(dead_code)]

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::LyricsFixture;
