// Rust guideline compliant 2026-10-19

//! In-memory bucket store.
//!
//! The store owns the bucket map, the append-only practice history and the
//! day counter. It is the single value a hosting process passes around; all
//! mutations go through the scheduler.

use crate::scheduler::{self, ProgressStats};
use crate::{is_retired, BucketMap, Difficulty, Error, Flashcard, PracticeRecord, Result};
use std::collections::BTreeSet;

/// Live scheduling state: buckets, history and day counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketStore {
    buckets: BucketMap,
    history: Vec<PracticeRecord>,
    day: u64,
}

impl BucketStore {
    /// Creates an empty store at day 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store at day 0 with all cards in bucket 0.
    ///
    /// # Errors
    ///
    /// Returns an error if a card is invalid or duplicated.
    pub fn with_cards<I>(cards: I) -> Result<Self>
    where
        I: IntoIterator<Item = Flashcard>,
    {
        let mut store = Self::new();
        store.buckets.ensure_bucket(0);
        for card in cards {
            store.add_card(card)?;
        }
        Ok(store)
    }

    /// Assembles a store from previously persisted parts.
    pub fn from_parts(buckets: BucketMap, history: Vec<PracticeRecord>, day: u64) -> Self {
        Self {
            buckets,
            history,
            day,
        }
    }

    /// Returns the bucket map.
    pub fn buckets(&self) -> &BucketMap {
        &self.buckets
    }

    /// Returns the practice history in insertion order.
    pub fn history(&self) -> &[PracticeRecord] {
        &self.history
    }

    /// Returns the current day.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Advances the day counter by one and returns the new day.
    pub fn advance_day(&mut self) -> u64 {
        self.day = self.day.saturating_add(1);
        tracing::debug!(day = self.day, "advanced day");
        self.day
    }

    /// Adds a new card to bucket 0.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The card fails validation
    /// - A card with the same front and back already exists
    pub fn add_card(&mut self, card: Flashcard) -> Result<()> {
        self.buckets.insert(0, card)
    }

    /// Finds a card by front and back.
    pub fn find_card(&self, front: &str, back: &str) -> Option<&Flashcard> {
        self.buckets.get(front, back)
    }

    /// Returns the bucket holding the card, if any.
    pub fn bucket_of(&self, front: &str, back: &str) -> Option<u32> {
        self.buckets.bucket_of(front, back)
    }

    /// Returns true if a card with this identity exists.
    pub fn contains(&self, front: &str, back: &str) -> bool {
        self.buckets.contains(front, back)
    }

    /// Records a review and moves the card to its new bucket.
    ///
    /// # Arguments
    ///
    /// * `front` - Front text of the reviewed card
    /// * `back` - Back text of the reviewed card
    /// * `difficulty` - Review outcome
    /// * `timestamp` - Review time in Unix milliseconds
    ///
    /// # Returns
    ///
    /// The appended practice record.
    ///
    /// # Errors
    ///
    /// Returns `Error::CardNotFound` if the card does not exist.
    pub fn review(
        &mut self,
        front: &str,
        back: &str,
        difficulty: Difficulty,
        timestamp: i64,
    ) -> Result<PracticeRecord> {
        let card = self
            .find_card(front, back)
            .cloned()
            .ok_or_else(|| Error::card_not_found(front, back))?;
        let previous_bucket = self
            .bucket_of(front, back)
            .ok_or_else(|| Error::card_not_found(front, back))?;

        let updated = scheduler::update(&self.buckets, &card, difficulty)?;
        let new_bucket = updated
            .bucket_of(front, back)
            .ok_or_else(|| Error::card_not_found(front, back))?;
        self.buckets = updated;

        let record = PracticeRecord {
            card_front: card.front,
            card_back: card.back,
            timestamp,
            difficulty,
            previous_bucket: i64::from(previous_bucket),
            new_bucket: i64::from(new_bucket),
        };
        self.history.push(record.clone());

        tracing::debug!(
            front = %record.card_front,
            difficulty = %difficulty,
            previous_bucket,
            new_bucket,
            "recorded review"
        );

        Ok(record)
    }

    /// Returns the cards due on the current day.
    pub fn due_cards(&self) -> BTreeSet<Flashcard> {
        scheduler::due(&self.buckets, self.day)
    }

    /// Returns a hint for the card.
    ///
    /// # Errors
    ///
    /// Returns `Error::CardNotFound` if the card does not exist.
    pub fn hint_for(&self, front: &str, back: &str) -> Result<String> {
        self.find_card(front, back)
            .map(scheduler::hint)
            .ok_or_else(|| Error::card_not_found(front, back))
    }

    /// Summarizes progress over the whole store.
    pub fn progress(&self) -> ProgressStats {
        scheduler::progress(&self.buckets, &self.history)
    }

    /// Returns true if no card is left to schedule.
    pub fn is_exhausted(&self) -> bool {
        self.buckets.all_cards().all(|(bucket, _)| is_retired(bucket))
    }
}
