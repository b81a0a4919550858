// Rust guideline compliant 2026-10-19

//! Unit tests for the scheduler module.
//!
//! These tests validate the documented scenarios, every bucket transition,
//! and progress edge cases.

use leitner_core::scheduler::is_due;
use leitner_core::{
    due, hint, next_bucket, progress, update, BucketMap, Difficulty, Error, Flashcard,
    PracticeRecord, RETIRED_BUCKET,
};
use std::collections::BTreeSet;

fn card(front: &str, back: &str) -> Flashcard {
    Flashcard::new(front, back).expect("valid card")
}

/// Builds `{0: {A, B}, 1: {C}}`.
fn sample_buckets() -> BucketMap {
    let mut buckets = BucketMap::new();
    buckets.insert(0, card("A", "a")).expect("insert A");
    buckets.insert(0, card("B", "b")).expect("insert B");
    buckets.insert(1, card("C", "c")).expect("insert C");
    buckets
}

fn fronts(cards: &BTreeSet<Flashcard>) -> Vec<&str> {
    cards.iter().map(|card| card.front.as_str()).collect()
}

fn record(difficulty: Difficulty) -> PracticeRecord {
    PracticeRecord {
        card_front: "A".to_string(),
        card_back: "a".to_string(),
        timestamp: 1_700_000_000_000,
        difficulty,
        previous_bucket: 0,
        new_bucket: 0,
    }
}

#[test]
fn test_due_day_two_includes_bucket_one() {
    let buckets = sample_buckets();
    assert_eq!(fronts(&due(&buckets, 2)), vec!["A", "B", "C"]);
}

#[test]
fn test_due_day_three_excludes_bucket_one() {
    let buckets = sample_buckets();
    assert_eq!(fronts(&due(&buckets, 3)), vec!["A", "B"]);
}

#[test]
fn test_due_day_zero_is_full_review() {
    let mut buckets = sample_buckets();
    buckets.insert(3, card("D", "d")).expect("insert D");
    assert_eq!(fronts(&due(&buckets, 0)), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_due_never_includes_retired() {
    let mut buckets = sample_buckets();
    buckets
        .insert(RETIRED_BUCKET, card("R", "r"))
        .expect("insert R");
    for day in 0..32 {
        assert!(
            !due(&buckets, day).iter().any(|card| card.front == "R"),
            "retired card due on day {}",
            day
        );
    }
}

#[test]
fn test_due_power_of_two_intervals() {
    assert!(is_due(0, 7));
    assert!(is_due(2, 4));
    assert!(!is_due(2, 6));
    assert!(is_due(3, 16));
    assert!(!is_due(3, 12));
}

#[test]
fn test_due_empty_map() {
    assert!(due(&BucketMap::new(), 0).is_empty());
}

#[test]
fn test_update_wrong_moves_to_zero() {
    let buckets = sample_buckets();
    let updated = update(&buckets, &card("C", "c"), Difficulty::Wrong).expect("update");
    assert_eq!(updated.bucket_of("C", "c"), Some(0));
    assert_eq!(updated.cards(1).map(|cards| cards.len()), Some(0));
}

#[test]
fn test_update_hard_keeps_bucket() {
    let buckets = sample_buckets();
    let updated = update(&buckets, &card("C", "c"), Difficulty::Hard).expect("update");
    assert_eq!(updated.bucket_of("C", "c"), Some(1));
}

#[test]
fn test_update_easy_promotes() {
    let buckets = sample_buckets();
    let updated = update(&buckets, &card("C", "c"), Difficulty::Easy).expect("update");
    assert_eq!(updated.bucket_of("C", "c"), Some(2));
    assert!(updated.cards(2).is_some(), "target bucket should be created");
}

#[test]
fn test_update_easy_ladder_to_retired() {
    let mut buckets = sample_buckets();
    let target = card("A", "a");
    let mut seen = vec![0];
    for _ in 0..10 {
        buckets = update(&buckets, &target, Difficulty::Easy).expect("update");
        seen.push(buckets.bucket_of("A", "a").expect("card present"));
    }
    assert_eq!(&seen[..6], &[0, 1, 2, 3, 4, 4]);
    assert!(seen[5..].iter().all(|bucket| *bucket == RETIRED_BUCKET));
}

#[test]
fn test_update_retired_is_terminal() {
    let mut buckets = BucketMap::new();
    buckets
        .insert(RETIRED_BUCKET, card("R", "r"))
        .expect("insert R");
    for difficulty in Difficulty::ALL {
        let updated = update(&buckets, &card("R", "r"), difficulty).expect("update");
        assert_eq!(updated.bucket_of("R", "r"), Some(RETIRED_BUCKET));
    }
}

#[test]
fn test_update_does_not_mutate_input() {
    let buckets = sample_buckets();
    let before = buckets.clone();
    let updated = update(&buckets, &card("A", "a"), Difficulty::Easy).expect("update");
    assert_eq!(buckets, before);
    assert_ne!(updated, before);
}

#[test]
fn test_update_matches_by_value() {
    let buckets = sample_buckets();
    let lookalike = card("C", "c").with_hint("different hint").with_tags(["x"]);
    let updated = update(&buckets, &lookalike, Difficulty::Wrong).expect("update");
    let stored = updated.get("C", "c").expect("card present");
    assert_eq!(stored.hint, "", "stored card data should be kept");
    assert_eq!(updated.bucket_of("C", "c"), Some(0));
}

#[test]
fn test_update_missing_card() {
    let buckets = sample_buckets();
    let result = update(&buckets, &card("Z", "z"), Difficulty::Easy);
    match result {
        Err(Error::CardNotFound { front, back }) => {
            assert_eq!(front, "Z");
            assert_eq!(back, "z");
        }
        other => panic!("expected CardNotFound, got {:?}", other),
    }
}

#[test]
fn test_next_bucket_table() {
    assert_eq!(next_bucket(0, Difficulty::Wrong), 0);
    assert_eq!(next_bucket(0, Difficulty::Hard), 0);
    assert_eq!(next_bucket(0, Difficulty::Easy), 1);
    assert_eq!(next_bucket(3, Difficulty::Wrong), 0);
    assert_eq!(next_bucket(3, Difficulty::Hard), 3);
    assert_eq!(next_bucket(3, Difficulty::Easy), RETIRED_BUCKET);
    assert_eq!(next_bucket(RETIRED_BUCKET, Difficulty::Wrong), RETIRED_BUCKET);
    assert_eq!(next_bucket(9, Difficulty::Easy), 9);
}

#[test]
fn test_hint_never_reveals_back() {
    for back in [
        "Cristiano Ronaldo",
        "x",
        "FC Barcelona",
        "Stephen Curry",
        "A_",
        "x_ y_",
        "_",
        "*",
    ] {
        let masked = hint(&card("q", back));
        assert_ne!(masked, back);
        assert_eq!(masked.chars().count(), back.chars().count());
        assert_eq!(masked, hint(&card("q", back)), "hint must be deterministic");
    }
}

#[test]
fn test_progress_empty() {
    let stats = progress(&BucketMap::new(), &[]);
    assert_eq!(stats.accuracy, 0.0);
    assert_eq!(stats.total_cards, 0);
    assert_eq!(stats.retired_cards, 0);
    assert_eq!(stats.total_reviews, 0);
    assert!(stats.buckets.is_empty());
}

#[test]
fn test_progress_counts_and_accuracy() {
    let mut buckets = sample_buckets();
    buckets
        .insert(RETIRED_BUCKET, card("R", "r"))
        .expect("insert R");
    buckets.ensure_bucket(2);
    let history = vec![
        record(Difficulty::Easy),
        record(Difficulty::Wrong),
        record(Difficulty::Hard),
        record(Difficulty::Easy),
    ];

    let stats = progress(&buckets, &history);
    assert_eq!(stats.buckets.get(&0), Some(&2));
    assert_eq!(stats.buckets.get(&1), Some(&1));
    assert_eq!(stats.buckets.get(&2), Some(&0));
    assert_eq!(stats.buckets.get(&RETIRED_BUCKET), Some(&1));
    assert_eq!(stats.total_cards, 3);
    assert_eq!(stats.retired_cards, 1);
    assert_eq!(stats.total_reviews, 4);
    assert_eq!(stats.easy_reviews, 2);
    assert_eq!(stats.wrong_reviews, 1);
    assert_eq!(stats.hard_reviews, 1);
    assert!((stats.accuracy - 0.5).abs() < f64::EPSILON);
}
