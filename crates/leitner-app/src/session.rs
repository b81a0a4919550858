// Rust guideline compliant 2026-10-19

//! Session lifecycle for a hosting process.
//!
//! A session loads the state file once at startup, seeds the sample deck
//! when no state exists, exposes the store to scheduling operations and
//! saves on request. `shutdown` saves at most once no matter how often it is
//! called.

use crate::error::{AppError, Result};
use crate::seed::default_deck;
use crate::time::unix_millis;
use leitner_core::{BucketStore, Config, Difficulty, Flashcard, PracticeRecord, StateFile};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Where the session state came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupSource {
    /// Loaded from an existing state file.
    Loaded,
    /// No state file existed; the sample deck was seeded.
    Seeded,
    /// No state file existed; an empty deck was created.
    Empty,
}

/// Cards scheduled for the current day.
#[derive(Debug, Clone, Serialize)]
pub struct DueCards {
    /// The due cards.
    pub cards: Vec<Flashcard>,
    /// The current day.
    pub day: u64,
    /// True when every card has been retired.
    pub retired: bool,
}

/// A hosting-process session over one state file.
#[derive(Debug)]
pub struct Session {
    store: BucketStore,
    state: StateFile,
    source: StartupSource,
    shutdown_grace: Duration,
    shutting_down: AtomicBool,
}

impl Session {
    /// Opens a session, loading or seeding the state.
    ///
    /// When the state file is absent, the sample deck (or an empty deck if
    /// seeding is disabled) is placed in bucket 0 at day 0 and saved
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state file is corrupted or unreadable
    /// - The state document fails validation
    /// - The seeded state cannot be saved
    pub fn open(state: StateFile, config: &Config) -> Result<Self> {
        let (store, source) = match state.load()? {
            Some(document) => {
                let store = BucketStore::from_document(&document)?;
                tracing::info!(
                    path = %state.path().display(),
                    day = store.day(),
                    cards = store.buckets().len(),
                    "loaded state"
                );
                (store, StartupSource::Loaded)
            }
            None => {
                let (store, source) = if config.seed_default_deck {
                    (BucketStore::with_cards(default_deck())?, StartupSource::Seeded)
                } else {
                    (BucketStore::with_cards(Vec::<Flashcard>::new())?, StartupSource::Empty)
                };
                state.save(&store.to_document())?;
                match source {
                    StartupSource::Seeded => tracing::info!(
                        path = %state.path().display(),
                        cards = store.buckets().len(),
                        "seeded sample deck"
                    ),
                    _ => tracing::info!(
                        path = %state.path().display(),
                        "created empty deck"
                    ),
                }
                (store, source)
            }
        };

        Ok(Self {
            store,
            state,
            source,
            shutdown_grace: Duration::from_millis(config.shutdown_grace_ms),
            shutting_down: AtomicBool::new(false),
        })
    }

    /// Returns where the state came from.
    pub fn source(&self) -> StartupSource {
        self.source
    }

    /// Returns the live store.
    pub fn store(&self) -> &BucketStore {
        &self.store
    }

    /// Returns the state file.
    pub fn state_file(&self) -> &StateFile {
        &self.state
    }

    /// Lists the cards due today.
    pub fn due(&self) -> DueCards {
        DueCards {
            cards: self.store.due_cards().into_iter().collect(),
            day: self.store.day(),
            retired: self.store.is_exhausted(),
        }
    }

    /// Adds a card to bucket 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is invalid or already exists.
    pub fn add_card(&mut self, card: Flashcard) -> Result<()> {
        let front = card.front.clone();
        self.store.add_card(card)?;
        tracing::info!(front = %front, "added card to bucket 0");
        Ok(())
    }

    /// Records a review at the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the card does not exist or the clock is invalid.
    pub fn review(
        &mut self,
        front: &str,
        back: &str,
        difficulty: Difficulty,
    ) -> Result<PracticeRecord> {
        let timestamp = unix_millis()?;
        let record = self.store.review(front, back, difficulty, timestamp)?;
        tracing::info!(
            front = %record.card_front,
            difficulty = %difficulty,
            from = record.previous_bucket,
            to = record.new_bucket,
            "updated card"
        );
        Ok(record)
    }

    /// Returns a hint for a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the card does not exist.
    pub fn hint(&self, front: &str, back: &str) -> Result<String> {
        Ok(self.store.hint_for(front, back)?)
    }

    /// Advances to the next day.
    pub fn advance_day(&mut self) -> u64 {
        let day = self.store.advance_day();
        tracing::info!(day, "advanced to next day");
        day
    }

    /// Saves the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.state.save(&self.store.to_document())?;
        Ok(())
    }

    /// Returns true once `shutdown` has been called.
    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::SeqCst)
    }

    /// Saves the state once and waits for the grace period.
    ///
    /// # Returns
    ///
    /// `true` if this call performed the shutdown save, `false` if a
    /// shutdown had already started.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ShutdownFailed` if the save fails.
    pub fn shutdown(&self) -> Result<bool> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown already in progress, ignoring");
            return Ok(false);
        }

        tracing::info!(
            day = self.store.day(),
            buckets = self.store.buckets().bucket_count(),
            "saving state before shutdown"
        );
        self.state
            .save(&self.store.to_document())
            .map_err(AppError::ShutdownFailed)?;

        if !self.shutdown_grace.is_zero() {
            std::thread::sleep(self.shutdown_grace);
        }
        tracing::info!(path = %self.state.path().display(), "state saved");
        Ok(true)
    }
}
