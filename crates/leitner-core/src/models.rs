// Rust guideline compliant 2026-10-19

//! Core data models for Leitner.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Reserved terminal bucket for fully mastered cards.
///
/// Buckets `0..RETIRED_BUCKET` are scheduled; any index at or above it is
/// treated as retired.
pub const RETIRED_BUCKET: u32 = 4;

/// Bucket value recorded in history when a card's bucket could not be found.
///
/// Older state files carry it; new reviews always record real buckets.
pub const NO_BUCKET: i64 = -1;

/// Returns true if the bucket index is the retired bucket (or beyond it).
pub fn is_retired(bucket: u32) -> bool {
    bucket >= RETIRED_BUCKET
}

/// A flashcard.
///
/// Identity is the `(front, back)` pair: equality, hashing and ordering ignore
/// `hint` and `tags`.
#[derive(Debug, Clone, Serialize)]
pub struct Flashcard {
    /// Prompt side of the card.
    pub front: String,
    /// Answer side of the card.
    pub back: String,
    /// Optional author-provided hint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hint: String,
    /// Tags for categorization.
    pub tags: Vec<String>,
}

impl Flashcard {
    /// Creates a new card with an empty hint and no tags.
    ///
    /// # Errors
    ///
    /// Returns an error if `front` or `back` is blank.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> crate::Result<Self> {
        let card = Self {
            front: front.into(),
            back: back.into(),
            hint: String::new(),
            tags: Vec::new(),
        };
        card.validate()?;
        Ok(card)
    }

    /// Sets the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the card data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Front is blank
    /// - Back is blank
    pub fn validate(&self) -> crate::Result<()> {
        if self.front.trim().is_empty() {
            return Err(crate::Error::InvalidCard(
                "Front cannot be empty".to_string(),
            ));
        }

        if self.back.trim().is_empty() {
            return Err(crate::Error::InvalidCard(
                "Back cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns true if this card has the given identity.
    pub fn is(&self, front: &str, back: &str) -> bool {
        self.front == front && self.back == back
    }

    /// Returns the identity key of the card.
    pub fn key(&self) -> (&str, &str) {
        (&self.front, &self.back)
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Flashcard {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flashcard {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Outcome of a single review.
///
/// Persisted as the integers `0`, `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    /// The answer was not recalled.
    Wrong,
    /// The answer was recalled with effort.
    Hard,
    /// The answer was recalled easily.
    Easy,
}

impl Difficulty {
    /// All difficulties in wire order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Wrong, Difficulty::Hard, Difficulty::Easy];

    /// Returns the lowercase name of the difficulty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Wrong => "wrong",
            Difficulty::Hard => "hard",
            Difficulty::Easy => "easy",
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Wrong => 0,
            Difficulty::Hard => 1,
            Difficulty::Easy => 2,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Difficulty::Wrong),
            1 => Ok(Difficulty::Hard),
            2 => Ok(Difficulty::Easy),
            other => Err(format!("difficulty must be 0, 1 or 2, got {}", other)),
        }
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "wrong" | "w" | "0" => Ok(Difficulty::Wrong),
            "hard" | "h" | "1" => Ok(Difficulty::Hard),
            "easy" | "e" | "2" => Ok(Difficulty::Easy),
            other => Err(crate::Error::InvalidCard(format!(
                "Unknown difficulty: {} (expected wrong, hard or easy)",
                other
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a single practice event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeRecord {
    /// Front text of the practiced card.
    pub card_front: String,
    /// Back text of the practiced card.
    pub card_back: String,
    /// Unix timestamp of the review in milliseconds.
    pub timestamp: i64,
    /// Review outcome.
    pub difficulty: Difficulty,
    /// Bucket before the review, [`NO_BUCKET`] if it was unknown.
    pub previous_bucket: i64,
    /// Bucket after the review, [`NO_BUCKET`] if it was unknown.
    pub new_bucket: i64,
}
