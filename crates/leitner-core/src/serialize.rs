// Rust guideline compliant 2026-10-19

//! Conversion between the live store and its JSON state document.
//!
//! Serialization is total and deterministic. Deserialization is strict: the
//! first structural problem is reported as `Error::Validation` with a message
//! naming the offending field, and nothing is coerced except the optional
//! card fields `hint` and `tags`.

use crate::{BucketMap, BucketStore, Error, Flashcard, PracticeRecord, Result};
use serde_json::{json, Map, Value};

/// A JSON state document.
///
/// Wraps the raw value so that freshly loaded, not yet validated JSON and
/// serialized state share one type.
#[derive(Debug, Clone, PartialEq)]
pub struct Document(Value);

impl Document {
    /// Wraps a JSON value.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the document and returns the JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Renders the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Converts live state into a state document.
///
/// # Arguments
///
/// * `buckets` - The bucket map
/// * `history` - The practice history
/// * `day` - The current day
///
/// # Returns
///
/// A document with decimal-string bucket keys mapping to card arrays, and
/// history and day passed through.
pub fn serialize(buckets: &BucketMap, history: &[PracticeRecord], day: u64) -> Document {
    let mut serialized_buckets = Map::new();
    for (bucket, cards) in buckets.iter() {
        let cards: Vec<Value> = cards.iter().map(card_to_value).collect();
        serialized_buckets.insert(bucket.to_string(), Value::Array(cards));
    }

    let history: Vec<Value> = history.iter().map(record_to_value).collect();

    Document(json!({
        "buckets": serialized_buckets,
        "history": history,
        "day": day,
    }))
}

fn card_to_value(card: &Flashcard) -> Value {
    let mut object = Map::new();
    object.insert("front".to_string(), Value::from(card.front.as_str()));
    object.insert("back".to_string(), Value::from(card.back.as_str()));
    if !card.hint.is_empty() {
        object.insert("hint".to_string(), Value::from(card.hint.as_str()));
    }
    object.insert("tags".to_string(), Value::from(card.tags.clone()));
    Value::Object(object)
}

fn record_to_value(record: &PracticeRecord) -> Value {
    json!({
        "cardFront": record.card_front,
        "cardBack": record.card_back,
        "timestamp": record.timestamp,
        "difficulty": u8::from(record.difficulty),
        "previousBucket": record.previous_bucket,
        "newBucket": record.new_bucket,
    })
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Validation(message.into())
}

/// Reconstructs live state from a state document.
///
/// # Arguments
///
/// * `document` - The document to validate and convert
///
/// # Returns
///
/// The bucket map, the practice history and the day.
///
/// # Errors
///
/// Returns `Error::Validation` if:
/// - The top-level value is not an object
/// - `buckets` is missing or not an object
/// - `history` is missing or not an array
/// - `day` is missing or not a non-negative integer
/// - A bucket key is not a canonical non-negative integer string
/// - A bucket value is not an array
/// - A card is not an object or lacks a non-empty string `front` or `back`
/// - A history entry is not a valid practice record
/// - The same card appears more than once
pub fn deserialize(document: &Document) -> Result<(BucketMap, Vec<PracticeRecord>, u64)> {
    let root = document
        .as_value()
        .as_object()
        .ok_or_else(|| invalid("top-level value must be an object"))?;

    let serialized_buckets = match root.get("buckets") {
        Some(Value::Object(buckets)) => buckets,
        Some(_) => return Err(invalid("`buckets` must be an object")),
        None => return Err(invalid("missing field `buckets`")),
    };

    let serialized_history = match root.get("history") {
        Some(Value::Array(history)) => history,
        Some(_) => return Err(invalid("`history` must be an array")),
        None => return Err(invalid("missing field `history`")),
    };

    let day = match root.get("day") {
        Some(Value::Number(day)) => day
            .as_u64()
            .ok_or_else(|| invalid(format!("`day` must be a non-negative integer, got {}", day)))?,
        Some(_) => return Err(invalid("`day` must be a number")),
        None => return Err(invalid("missing field `day`")),
    };

    let mut buckets = BucketMap::new();
    for (key, cards) in serialized_buckets {
        let bucket = parse_bucket_key(key)?;
        let cards = cards
            .as_array()
            .ok_or_else(|| invalid(format!("bucket {:?} must be an array of cards", key)))?;

        buckets.ensure_bucket(bucket);
        for value in cards {
            let card = parse_card(key, value)?;
            buckets.insert(bucket, card).map_err(|err| match err {
                Error::DuplicateCard { front, back } => invalid(format!(
                    "card {:?} / {:?} appears more than once",
                    front, back
                )),
                other => invalid(other.to_string()),
            })?;
        }
    }

    let history = serialized_history
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            serde_json::from_value::<PracticeRecord>(entry.clone()).map_err(|err| {
                invalid(format!(
                    "history entry {} is not a valid practice record: {}",
                    position, err
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((buckets, history, day))
}

/// Parses a bucket key, accepting only the canonical decimal form.
fn parse_bucket_key(key: &str) -> Result<u32> {
    let bucket: u32 = key.parse().map_err(|_| {
        invalid(format!(
            "bucket key {:?} is not a non-negative integer",
            key
        ))
    })?;

    if bucket.to_string() != key {
        return Err(invalid(format!(
            "bucket key {:?} is not in canonical decimal form",
            key
        )));
    }

    Ok(bucket)
}

fn parse_card(bucket_key: &str, value: &Value) -> Result<Flashcard> {
    let object = value.as_object().ok_or_else(|| {
        invalid(format!("card in bucket {:?} must be an object", bucket_key))
    })?;

    let front = required_text(object, "front", bucket_key)?;
    let back = required_text(object, "back", bucket_key)?;

    let hint = object
        .get("hint")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let tags = match object.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    Ok(Flashcard {
        front,
        back,
        hint,
        tags,
    })
}

fn required_text(object: &Map<String, Value>, field: &str, bucket_key: &str) -> Result<String> {
    let text = object.get(field).and_then(Value::as_str).ok_or_else(|| {
        invalid(format!(
            "card in bucket {:?} is missing string field `{}`",
            bucket_key, field
        ))
    })?;

    if text.trim().is_empty() {
        return Err(invalid(format!(
            "card in bucket {:?} has an empty `{}`",
            bucket_key, field
        )));
    }

    Ok(text.to_string())
}

impl BucketStore {
    /// Serializes the whole store.
    pub fn to_document(&self) -> Document {
        serialize(self.buckets(), self.history(), self.day())
    }

    /// Rebuilds a store from a state document.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the document is malformed.
    pub fn from_document(document: &Document) -> Result<Self> {
        let (buckets, history, day) = deserialize(document)?;
        Ok(Self::from_parts(buckets, history, day))
    }
}
