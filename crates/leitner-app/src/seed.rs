// Rust guideline compliant 2026-10-19

//! Sample deck used when no state file exists yet.

use leitner_core::Flashcard;

/// Returns the sample deck.
pub fn default_deck() -> Vec<Flashcard> {
    vec![
        sample(
            "Who has scored the most goals in football history?",
            "Cristiano Ronaldo",
            "Messi is better, by the way",
            &["sport", "football"],
        ),
        sample(
            "Who holds the record for most 3-pointers in NBA history?",
            "Stephen Curry",
            "Golden Boy 👑",
            &["sport", "basketball"],
        ),
        sample(
            "Who won the historic sextuple in 2009?",
            "FC Barcelona",
            "Only club to win 6 trophies in a year 🏆🏆🏆🏆🏆🏆",
            &["sport", "football", "history"],
        ),
        sample(
            "Which footballer is known for the 'Siiuu' celebration?",
            "Cristiano Ronaldo",
            "You can hear it in your head",
            &["sport", "football"],
        ),
    ]
}

fn sample(front: &str, back: &str, hint: &str, tags: &[&str]) -> Flashcard {
    Flashcard {
        front: front.to_string(),
        back: back.to_string(),
        hint: hint.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
