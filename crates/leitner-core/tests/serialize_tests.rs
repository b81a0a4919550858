// Rust guideline compliant 2026-10-19

//! Unit tests for state document serialization.
//!
//! Every validation rule is exercised with a document that breaks exactly
//! that rule.

use leitner_core::{
    deserialize, serialize, BucketMap, BucketStore, Difficulty, Document, Error, Flashcard,
    PracticeRecord, NO_BUCKET,
};
use serde_json::json;

fn validation_message(value: serde_json::Value) -> String {
    match deserialize(&Document::from_value(value)) {
        Err(Error::Validation(message)) => message,
        other => panic!("expected validation error, got {:?}", other),
    }
}

fn sample_record() -> PracticeRecord {
    PracticeRecord {
        card_front: "A".to_string(),
        card_back: "a".to_string(),
        timestamp: 1_712_000_000_123,
        difficulty: Difficulty::Hard,
        previous_bucket: 1,
        new_bucket: 1,
    }
}

#[test]
fn test_serialize_empty_state() {
    let document = serialize(&BucketMap::new(), &[], 0);
    assert_eq!(
        document.as_value(),
        &json!({ "buckets": {}, "history": [], "day": 0 })
    );
}

#[test]
fn test_serialize_populated_state() {
    let mut buckets = BucketMap::new();
    buckets
        .insert(
            0,
            Flashcard::new("A", "a")
                .expect("card")
                .with_hint("first letter")
                .with_tags(["letters"]),
        )
        .expect("insert");
    buckets
        .insert(2, Flashcard::new("B", "b").expect("card"))
        .expect("insert");
    buckets.ensure_bucket(1);

    let document = serialize(&buckets, &[sample_record()], 7);
    assert_eq!(
        document.as_value(),
        &json!({
            "buckets": {
                "0": [{ "front": "A", "back": "a", "hint": "first letter", "tags": ["letters"] }],
                "1": [],
                "2": [{ "front": "B", "back": "b", "tags": [] }],
            },
            "history": [{
                "cardFront": "A",
                "cardBack": "a",
                "timestamp": 1_712_000_000_123i64,
                "difficulty": 1,
                "previousBucket": 1,
                "newBucket": 1,
            }],
            "day": 7,
        })
    );
}

#[test]
fn test_serialize_is_deterministic() {
    let mut forward = BucketMap::new();
    let mut backward = BucketMap::new();
    let cards = ["x", "m", "a", "q"];
    for front in cards {
        forward
            .insert(0, Flashcard::new(front, "back").expect("card"))
            .expect("insert");
    }
    for front in cards.iter().rev() {
        backward
            .insert(0, Flashcard::new(*front, "back").expect("card"))
            .expect("insert");
    }

    let left = serialize(&forward, &[], 1).to_pretty_string().expect("render");
    let right = serialize(&backward, &[], 1).to_pretty_string().expect("render");
    assert_eq!(left, right);
}

#[test]
fn test_deserialize_valid_document() {
    let document = Document::from_value(json!({
        "buckets": {
            "0": [{ "front": "A", "back": "a", "hint": "h", "tags": ["t1", "t2"] }],
            "3": [{ "front": "B", "back": "b" }],
            "4": [],
        },
        "history": [{
            "cardFront": "A",
            "cardBack": "a",
            "timestamp": 1_712_000_000_123i64,
            "difficulty": 1,
            "previousBucket": 1,
            "newBucket": 1,
        }],
        "day": 12,
    }));

    let (buckets, history, day) = deserialize(&document).expect("valid document");
    assert_eq!(day, 12);
    assert_eq!(history, vec![sample_record()]);
    assert_eq!(buckets.bucket_of("A", "a"), Some(0));
    assert_eq!(buckets.bucket_of("B", "b"), Some(3));
    assert_eq!(buckets.cards(4).map(|cards| cards.len()), Some(0));

    let a = buckets.get("A", "a").expect("card A");
    assert_eq!(a.hint, "h");
    assert_eq!(a.tags, vec!["t1".to_string(), "t2".to_string()]);

    let b = buckets.get("B", "b").expect("card B");
    assert_eq!(b.hint, "");
    assert!(b.tags.is_empty());
}

#[test]
fn test_deserialize_defaults_malformed_optional_fields() {
    let document = Document::from_value(json!({
        "buckets": {
            "0": [
                { "front": "A", "back": "a", "hint": 42, "tags": "not-a-list" },
                { "front": "B", "back": "b", "hint": null, "tags": ["ok", 3] },
            ],
        },
        "history": [],
        "day": 0,
    }));

    let (buckets, _, _) = deserialize(&document).expect("valid document");
    for (front, back) in [("A", "a"), ("B", "b")] {
        let card = buckets.get(front, back).expect("card");
        assert_eq!(card.hint, "");
        assert!(card.tags.is_empty());
    }
}

#[test]
fn test_deserialize_history_with_unknown_bucket() {
    let value = json!({
        "buckets": { "0": [{ "front": "A", "back": "a", "tags": [] }] },
        "history": [{
            "cardFront": "Gone",
            "cardBack": "card",
            "timestamp": 5,
            "difficulty": 2,
            "previousBucket": 2,
            "newBucket": -1,
        }],
        "day": 3,
    });

    let (buckets, history, day) =
        deserialize(&Document::from_value(value.clone())).expect("valid document");
    assert_eq!(history[0].previous_bucket, 2);
    assert_eq!(history[0].new_bucket, NO_BUCKET);

    let restored = serialize(&buckets, &history, day);
    assert_eq!(restored.as_value(), &value);
}

#[test]
fn test_store_document_round_trip() {
    let mut store = BucketStore::with_cards(vec![
        Flashcard::new("A", "a").expect("card"),
        Flashcard::new("B", "b").expect("card"),
    ])
    .expect("store");
    store.review("A", "a", Difficulty::Easy, 5).expect("review");
    store.advance_day();

    let restored = BucketStore::from_document(&store.to_document()).expect("restore");
    assert_eq!(restored, store);
}

#[test]
fn test_reject_non_object_top_level() {
    let message = validation_message(json!([1, 2, 3]));
    assert!(message.contains("top-level"), "{}", message);
    let message = validation_message(json!(null));
    assert!(message.contains("top-level"), "{}", message);
}

#[test]
fn test_reject_missing_or_invalid_buckets() {
    let message = validation_message(json!({ "history": [], "day": 0 }));
    assert!(message.contains("buckets"), "{}", message);

    let message = validation_message(json!({ "buckets": [], "history": [], "day": 0 }));
    assert!(message.contains("`buckets` must be an object"), "{}", message);

    let message = validation_message(json!({ "buckets": "x", "history": [], "day": 0 }));
    assert!(message.contains("`buckets` must be an object"), "{}", message);
}

#[test]
fn test_reject_invalid_history() {
    let message = validation_message(json!({ "buckets": {}, "history": {}, "day": 0 }));
    assert!(message.contains("`history` must be an array"), "{}", message);

    let message = validation_message(json!({ "buckets": {}, "day": 0 }));
    assert!(message.contains("history"), "{}", message);

    let message = validation_message(json!({
        "buckets": {},
        "history": [{ "cardFront": "A", "cardBack": "a", "timestamp": 1, "difficulty": 7, "previousBucket": 0, "newBucket": 0 }],
        "day": 0,
    }));
    assert!(message.contains("history entry 0"), "{}", message);
}

#[test]
fn test_reject_invalid_day() {
    let message = validation_message(json!({ "buckets": {}, "history": [], "day": "3" }));
    assert!(message.contains("`day` must be a number"), "{}", message);

    let message = validation_message(json!({ "buckets": {}, "history": [] }));
    assert!(message.contains("day"), "{}", message);

    let message = validation_message(json!({ "buckets": {}, "history": [], "day": -1 }));
    assert!(message.contains("non-negative integer"), "{}", message);

    let message = validation_message(json!({ "buckets": {}, "history": [], "day": 1.5 }));
    assert!(message.contains("non-negative integer"), "{}", message);
}

#[test]
fn test_reject_non_canonical_bucket_keys() {
    for key in ["01", "-1", "", "+1", "1.0", "abc", " 1", "99999999999"] {
        let message = validation_message(json!({
            "buckets": { key: [] },
            "history": [],
            "day": 0,
        }));
        assert!(message.contains("bucket key"), "key {:?}: {}", key, message);
    }
}

#[test]
fn test_reject_bucket_value_not_array() {
    let message = validation_message(json!({
        "buckets": { "0": { "front": "A", "back": "a" } },
        "history": [],
        "day": 0,
    }));
    assert!(message.contains("must be an array"), "{}", message);
}

#[test]
fn test_reject_card_missing_fields() {
    let message = validation_message(json!({
        "buckets": { "0": [{ "front": "A" }] },
        "history": [],
        "day": 0,
    }));
    assert!(message.contains("`back`"), "{}", message);

    let message = validation_message(json!({
        "buckets": { "0": [{ "front": 1, "back": "a" }] },
        "history": [],
        "day": 0,
    }));
    assert!(message.contains("`front`"), "{}", message);

    let message = validation_message(json!({
        "buckets": { "0": ["A"] },
        "history": [],
        "day": 0,
    }));
    assert!(message.contains("must be an object"), "{}", message);

    let message = validation_message(json!({
        "buckets": { "0": [{ "front": "", "back": "a" }] },
        "history": [],
        "day": 0,
    }));
    assert!(message.contains("empty"), "{}", message);
}

#[test]
fn test_reject_duplicate_cards() {
    let message = validation_message(json!({
        "buckets": {
            "0": [{ "front": "A", "back": "a" }],
            "2": [{ "front": "A", "back": "a", "hint": "other" }],
        },
        "history": [],
        "day": 0,
    }));
    assert!(message.contains("more than once"), "{}", message);
}
