// Rust guideline compliant 2026-10-19

//! Property-based tests for state document serialization.

use leitner_core::{
    deserialize, serialize, BucketMap, Difficulty, Document, Flashcard, PracticeRecord, StateFile,
    RETIRED_BUCKET,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9?!' ]{0,12}[a-zA-Z0-9]").unwrap()
}

fn arb_card() -> impl Strategy<Value = Flashcard> {
    (
        arb_text(),
        arb_text(),
        prop::option::of(arb_text()),
        prop::collection::vec(prop::string::string_regex("[a-z]{1,10}").unwrap(), 0..4),
    )
        .prop_map(|(front, back, hint, tags)| Flashcard {
            front,
            back,
            hint: hint.unwrap_or_default(),
            tags,
        })
}

fn arb_buckets() -> impl Strategy<Value = BucketMap> {
    (
        prop::collection::vec((0u32..=RETIRED_BUCKET + 2, arb_card()), 0..25),
        prop::collection::vec(0u32..8, 0..3),
    )
        .prop_map(|(cards, empty_buckets)| {
            let mut buckets = BucketMap::new();
            for (bucket, card) in cards {
                // Duplicated identities are skipped to keep the map valid.
                let _ = buckets.insert(bucket, card);
            }
            for bucket in empty_buckets {
                buckets.ensure_bucket(bucket);
            }
            buckets
        })
}

fn arb_record() -> impl Strategy<Value = PracticeRecord> {
    (
        arb_text(),
        arb_text(),
        0i64..4_000_000_000_000i64,
        prop_oneof![
            Just(Difficulty::Wrong),
            Just(Difficulty::Hard),
            Just(Difficulty::Easy),
        ],
        -1i64..=i64::from(RETIRED_BUCKET),
        -1i64..=i64::from(RETIRED_BUCKET),
    )
        .prop_map(
            |(card_front, card_back, timestamp, difficulty, previous_bucket, new_bucket)| {
                PracticeRecord {
                    card_front,
                    card_back,
                    timestamp,
                    difficulty,
                    previous_bucket,
                    new_bucket,
                }
            },
        )
}

fn assert_same_buckets(left: &BucketMap, right: &BucketMap) -> Result<(), TestCaseError> {
    prop_assert_eq!(left.bucket_count(), right.bucket_count());
    for (bucket, cards) in left.iter() {
        let other = right.cards(bucket);
        prop_assert!(other.is_some(), "bucket {} missing", bucket);
        prop_assert_eq!(Some(cards), other);
        for card in cards {
            let restored = right.get(&card.front, &card.back).expect("card present");
            prop_assert_eq!(&restored.hint, &card.hint);
            prop_assert_eq!(&restored.tags, &card.tags);
        }
    }
    Ok(())
}

proptest! {
    /// Serializing then deserializing reproduces buckets, history and day.
    #[test]
    fn test_round_trip(
        buckets in arb_buckets(),
        history in prop::collection::vec(arb_record(), 0..10),
        day in any::<u64>(),
    ) {
        let document = serialize(&buckets, &history, day);
        let (restored, restored_history, restored_day) =
            deserialize(&document).expect("round trip");

        assert_same_buckets(&buckets, &restored)?;
        prop_assert_eq!(restored_history, history);
        prop_assert_eq!(restored_day, day);
    }

    /// The round trip also holds through the pretty-printed file form.
    #[test]
    fn test_round_trip_through_file(
        buckets in arb_buckets(),
        history in prop::collection::vec(arb_record(), 0..5),
        day in 0u64..10_000,
    ) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state = StateFile::new(temp_dir.path().join("state.json")).expect("state file");

        state.save(&serialize(&buckets, &history, day)).expect("save");
        let loaded: Document = state.load().expect("load").expect("file present");
        let (restored, restored_history, restored_day) =
            deserialize(&loaded).expect("round trip");

        assert_same_buckets(&buckets, &restored)?;
        prop_assert_eq!(restored_history, history);
        prop_assert_eq!(restored_day, day);
    }
}
