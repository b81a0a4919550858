// Rust guideline compliant 2026-10-19

//! Bucket scheduling algorithm.
//!
//! Cards move between buckets according to review outcomes:
//!
//! - Wrong → bucket 0
//! - Hard → same bucket
//! - Easy → next bucket, capped at the retired bucket
//! - Retired → retired (terminal, for every outcome)
//!
//! A bucket `b` is due on day `d` when `d mod 2^b == 0`, so bucket 0 is due
//! every day and day 0 reviews every scheduled card. Retired cards are never
//! due.

use crate::{
    is_retired, BucketMap, Difficulty, Error, Flashcard, PracticeRecord, Result, RETIRED_BUCKET,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Returns true if bucket `bucket` is scheduled for review on `day`.
///
/// Intervals past `2^63` only line up with day 0.
pub fn is_due(bucket: u32, day: u64) -> bool {
    match 1u64.checked_shl(bucket) {
        Some(interval) => day % interval == 0,
        None => day == 0,
    }
}

/// Computes the set of cards due for review on `day`.
///
/// # Arguments
///
/// * `buckets` - The bucket map to inspect
/// * `day` - The current day number
///
/// # Returns
///
/// The union of all cards in non-retired buckets that are due on `day`.
pub fn due(buckets: &BucketMap, day: u64) -> BTreeSet<Flashcard> {
    buckets
        .iter()
        .filter(|(bucket, _)| !is_retired(*bucket) && is_due(*bucket, day))
        .flat_map(|(_, cards)| cards.iter().cloned())
        .collect()
}

/// Computes the bucket a card moves to after a review.
///
/// # Arguments
///
/// * `current` - The bucket the card is in now
/// * `difficulty` - The review outcome
///
/// # Returns
///
/// The target bucket index.
pub fn next_bucket(current: u32, difficulty: Difficulty) -> u32 {
    if is_retired(current) {
        return current;
    }

    match difficulty {
        Difficulty::Wrong => 0,
        Difficulty::Hard => current,
        Difficulty::Easy => (current + 1).min(RETIRED_BUCKET),
    }
}

/// Applies a review outcome to a card and returns the new bucket map.
///
/// The input map is left untouched.
///
/// # Arguments
///
/// * `buckets` - The current bucket map
/// * `card` - The reviewed card (matched by front and back)
/// * `difficulty` - The review outcome
///
/// # Returns
///
/// A new bucket map with the card in its target bucket.
///
/// # Errors
///
/// Returns `Error::CardNotFound` if the card is not in any bucket.
pub fn update(buckets: &BucketMap, card: &Flashcard, difficulty: Difficulty) -> Result<BucketMap> {
    let not_found = || Error::card_not_found(&card.front, &card.back);

    let current = buckets
        .bucket_of(&card.front, &card.back)
        .ok_or_else(not_found)?;
    let target = next_bucket(current, difficulty);

    let mut next = buckets.clone();
    let (_, stored) = next.remove(&card.front, &card.back).ok_or_else(not_found)?;
    next.insert(target, stored)?;

    Ok(next)
}

/// Returns a hint for a card.
///
/// The card's own hint is used when present and not identical to the back.
/// Otherwise the back text is masked word by word: words longer than one
/// character keep their first character, every other character becomes `_`.
/// Backs that survive that mask unchanged (`"A_"`, `"_"`) are starred out
/// instead, so the hint never equals the back.
pub fn hint(card: &Flashcard) -> String {
    if !card.hint.trim().is_empty() && card.hint != card.back {
        return card.hint.clone();
    }

    let masked = mask_answer(&card.back);
    if masked == card.back {
        return star_answer(&card.back);
    }
    masked
}

fn star_answer(answer: &str) -> String {
    answer
        .chars()
        .map(|ch| match ch {
            ch if ch.is_whitespace() => ch,
            '*' => '_',
            _ => '*',
        })
        .collect()
}

fn mask_answer(answer: &str) -> String {
    let mut masked = String::with_capacity(answer.len());
    let mut word: Vec<char> = Vec::new();

    for ch in answer.chars() {
        if ch.is_whitespace() {
            push_masked_word(&mut masked, &word);
            word.clear();
            masked.push(ch);
        } else {
            word.push(ch);
        }
    }
    push_masked_word(&mut masked, &word);

    masked
}

fn push_masked_word(out: &mut String, word: &[char]) {
    match word {
        [] => {}
        [_] => out.push('_'),
        [first, rest @ ..] => {
            out.push(*first);
            out.extend(std::iter::repeat('_').take(rest.len()));
        }
    }
}

/// Learning progress summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressStats {
    /// Number of cards per bucket, including empty and retired buckets.
    pub buckets: BTreeMap<u32, usize>,
    /// Number of cards still being scheduled.
    pub total_cards: usize,
    /// Number of retired cards.
    pub retired_cards: usize,
    /// Number of recorded reviews.
    pub total_reviews: usize,
    /// Reviews answered wrong.
    pub wrong_reviews: usize,
    /// Reviews answered hard.
    pub hard_reviews: usize,
    /// Reviews answered easy.
    pub easy_reviews: usize,
    /// Share of easy reviews, 0 when there is no history.
    pub accuracy: f64,
}

/// Summarizes learning progress.
///
/// # Arguments
///
/// * `buckets` - The current bucket map
/// * `history` - The practice history
///
/// # Returns
///
/// Per-bucket counts, live and retired totals, and review accuracy.
pub fn progress(buckets: &BucketMap, history: &[PracticeRecord]) -> ProgressStats {
    let mut per_bucket = BTreeMap::new();
    let mut total_cards = 0;
    let mut retired_cards = 0;

    for (bucket, cards) in buckets.iter() {
        per_bucket.insert(bucket, cards.len());
        if is_retired(bucket) {
            retired_cards += cards.len();
        } else {
            total_cards += cards.len();
        }
    }

    let count = |difficulty: Difficulty| {
        history
            .iter()
            .filter(|record| record.difficulty == difficulty)
            .count()
    };
    let wrong_reviews = count(Difficulty::Wrong);
    let hard_reviews = count(Difficulty::Hard);
    let easy_reviews = count(Difficulty::Easy);

    let accuracy = if history.is_empty() {
        0.0
    } else {
        easy_reviews as f64 / history.len() as f64
    };

    ProgressStats {
        buckets: per_bucket,
        total_cards,
        retired_cards,
        total_reviews: history.len(),
        wrong_reviews,
        hard_reviews,
        easy_reviews,
        accuracy,
    }
}
