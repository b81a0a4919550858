// Rust guideline compliant 2026-10-19

//! Bucket map with a value-keyed card index.
//!
//! Cards are grouped into numbered buckets. The index maps each card identity
//! `(front, back)` to the bucket holding it and is kept in step with bucket
//! contents on every mutation, so a card lives in at most one bucket.

use crate::{Error, Flashcard, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

type CardKey = (String, String);

/// Mapping from bucket index to the set of cards in that bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketMap {
    buckets: BTreeMap<u32, BTreeSet<Flashcard>>,
    index: HashMap<CardKey, u32>,
}

fn key_of(front: &str, back: &str) -> CardKey {
    (front.to_string(), back.to_string())
}

impl BucketMap {
    /// Creates an empty bucket map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a card into a bucket, creating the bucket if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The card fails validation
    /// - A card with the same identity already exists in any bucket
    pub fn insert(&mut self, bucket: u32, card: Flashcard) -> Result<()> {
        card.validate()?;

        let key = key_of(&card.front, &card.back);
        if self.index.contains_key(&key) {
            return Err(Error::duplicate_card(&card.front, &card.back));
        }

        self.index.insert(key, bucket);
        self.buckets.entry(bucket).or_default().insert(card);
        Ok(())
    }

    /// Creates an empty bucket if it does not exist yet.
    pub fn ensure_bucket(&mut self, bucket: u32) {
        self.buckets.entry(bucket).or_default();
    }

    /// Removes a card by identity.
    ///
    /// The bucket itself is kept even if it becomes empty.
    ///
    /// # Returns
    ///
    /// The bucket the card was in and the removed card, or None if absent.
    pub fn remove(&mut self, front: &str, back: &str) -> Option<(u32, Flashcard)> {
        let bucket = self.index.remove(&key_of(front, back))?;
        let probe = probe(front, back);
        let card = self.buckets.get_mut(&bucket)?.take(&probe)?;
        Some((bucket, card))
    }

    /// Returns the bucket index holding the card, if any.
    pub fn bucket_of(&self, front: &str, back: &str) -> Option<u32> {
        self.index.get(&key_of(front, back)).copied()
    }

    /// Returns true if a card with this identity exists in any bucket.
    pub fn contains(&self, front: &str, back: &str) -> bool {
        self.bucket_of(front, back).is_some()
    }

    /// Returns the stored card with this identity.
    pub fn get(&self, front: &str, back: &str) -> Option<&Flashcard> {
        let bucket = self.bucket_of(front, back)?;
        self.buckets.get(&bucket)?.get(&probe(front, back))
    }

    /// Returns the cards in a bucket, if the bucket exists.
    pub fn cards(&self, bucket: u32) -> Option<&BTreeSet<Flashcard>> {
        self.buckets.get(&bucket)
    }

    /// Iterates over buckets in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &BTreeSet<Flashcard>)> {
        self.buckets.iter().map(|(bucket, cards)| (*bucket, cards))
    }

    /// Iterates over all cards with their bucket index.
    pub fn all_cards(&self) -> impl Iterator<Item = (u32, &Flashcard)> {
        self.iter()
            .flat_map(|(bucket, cards)| cards.iter().map(move |card| (bucket, card)))
    }

    /// Returns the total number of cards across all buckets.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no bucket holds a card.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the number of buckets, including empty ones.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

fn probe(front: &str, back: &str) -> Flashcard {
    Flashcard {
        front: front.to_string(),
        back: back.to_string(),
        hint: String::new(),
        tags: Vec::new(),
    }
}
