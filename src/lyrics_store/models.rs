//! Data models for lyric collections.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Input field holding the raw lyric text.
pub const LYRICS_FIELD: &str = "lyrics";
/// Output field holding the compound score. Its presence marks a record as processed.
pub const SENTIMENT_FIELD: &str = "sentiment";

/// Why a single JSON value is not a usable record.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("'lyrics' must be a string, found {0}")]
    LyricsNotAString(&'static str),

    #[error("sentiment score must be finite, got {0}")]
    NonFiniteScore(f64),
}

/// Why a JSON document is not a usable collection.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("expected a top-level JSON array, found {0}")]
    NotAnArray(&'static str),

    #[error("record {index}: {reason}")]
    InvalidRecord { index: usize, reason: RecordError },
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One song record.
///
/// Kept as an ordered map so fields this tool does not know about are written
/// back semantically unchanged, in their original order and with their number
/// text preserved. String escapes are normalized on output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LyricsRecord {
    fields: Map<String, Value>,
}

impl LyricsRecord {
    /// Lyric text, if the record has any.
    pub fn lyrics(&self) -> Option<&str> {
        self.fields.get(LYRICS_FIELD).and_then(Value::as_str)
    }

    pub fn has_sentiment(&self) -> bool {
        self.fields.contains_key(SENTIMENT_FIELD)
    }

    /// Numeric sentiment, if present and numeric.
    pub fn sentiment(&self) -> Option<f64> {
        self.fields.get(SENTIMENT_FIELD).and_then(Value::as_f64)
    }

    /// Store the score. A new field is appended after the existing ones.
    pub fn set_sentiment(&mut self, score: f64) -> Result<(), RecordError> {
        let number = Number::from_f64(score).ok_or(RecordError::NonFiniteScore(score))?;
        self.fields
            .insert(SENTIMENT_FIELD.to_string(), Value::Number(number));
        Ok(())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Map<String, Value>> for LyricsRecord {
    type Error = RecordError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get(LYRICS_FIELD) {
            None | Some(Value::String(_)) => Ok(Self { fields }),
            Some(other) => Err(RecordError::LyricsNotAString(json_type_name(other))),
        }
    }
}

impl TryFrom<Value> for LyricsRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            other => Err(RecordError::NotAnObject(json_type_name(&other))),
        }
    }
}

/// Ordered list of records, as persisted in the lyrics file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LyricsCollection {
    records: Vec<LyricsRecord>,
}

impl LyricsCollection {
    pub fn new(records: Vec<LyricsRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LyricsRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [LyricsRecord] {
        &mut self.records
    }
}

impl TryFrom<Value> for LyricsCollection {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(ShapeError::NotAnArray(json_type_name(&other))),
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                LyricsRecord::try_from(item)
                    .map_err(|reason| ShapeError::InvalidRecord { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_from_array_of_objects() {
        let value = json!([
            {"title": "Song A", "lyrics": "la la la"},
            {"title": "Instrumental"},
        ]);
        let collection = LyricsCollection::try_from(value).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.records()[0].lyrics(), Some("la la la"));
        assert_eq!(collection.records()[1].lyrics(), None);
    }

    #[test]
    fn test_collection_rejects_non_array() {
        let err = LyricsCollection::try_from(json!({"lyrics": "x"})).unwrap_err();
        assert_eq!(err, ShapeError::NotAnArray("an object"));
    }

    #[test]
    fn test_collection_rejects_non_object_record() {
        let err = LyricsCollection::try_from(json!([{"lyrics": "ok"}, "oops"])).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidRecord {
                index: 1,
                reason: RecordError::NotAnObject("a string"),
            }
        );
        assert_eq!(err.to_string(), "record 1: expected a JSON object, found a string");
    }

    #[test]
    fn test_collection_rejects_non_string_lyrics() {
        let err = LyricsCollection::try_from(json!([{"lyrics": null}])).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidRecord {
                index: 0,
                reason: RecordError::LyricsNotAString("null"),
            }
        );
    }

    #[test]
    fn test_existing_sentiment_is_not_validated() {
        let collection =
            LyricsCollection::try_from(json!([{"lyrics": "x", "sentiment": "n/a"}])).unwrap();
        let record = &collection.records()[0];
        assert!(record.has_sentiment());
        assert_eq!(record.sentiment(), None);
    }

    #[test]
    fn test_set_sentiment_appends_last() {
        let mut record =
            LyricsRecord::try_from(json!({"title": "T", "lyrics": "x", "year": 1999})).unwrap();
        record.set_sentiment(-0.25).unwrap();

        let keys: Vec<&str> = record.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "lyrics", "year", "sentiment"]);
        assert_eq!(record.sentiment(), Some(-0.25));
    }

    #[test]
    fn test_set_sentiment_rejects_nan() {
        let mut record = LyricsRecord::try_from(json!({"lyrics": "x"})).unwrap();
        assert!(matches!(
            record.set_sentiment(f64::NAN),
            Err(RecordError::NonFiniteScore(_))
        ));
        assert!(!record.has_sentiment());
    }

    #[test]
    fn test_passthrough_fields_serialize_verbatim() {
        let input = r#"[{"z":1,"a":{"nested":[true,null]},"price":1.50,"big":12345678901234567890}]"#;
        let value: Value = serde_json::from_str(input).unwrap();
        let collection = LyricsCollection::try_from(value).unwrap();

        let output = serde_json::to_string(&collection).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_string_escapes_normalized_numbers_kept() {
        let input = r#"[{"path":"\u00e9\/x","ratio":2.50}]"#;
        let value: Value = serde_json::from_str(input).unwrap();
        let collection = LyricsCollection::try_from(value).unwrap();

        let output = serde_json::to_string(&collection).unwrap();
        assert_eq!(output, r#"[{"path":"é/x","ratio":2.50}]"#);
    }
}
