// Rust guideline compliant 2026-10-19

//! Output formatting module for the Leitner CLI.
//!
//! This module provides functionality for formatting scheduler data
//! in various output formats (JSON, table, plain text).

use chrono::{DateTime, Utc};
use leitner_app::{AppError, DueCards, ErrorEnvelope, SuccessEnvelope};
use leitner_core::{is_retired, serialize, BucketMap, PracticeRecord, ProgressStats};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting command results in different
/// output formats.
pub trait OutputFormatter {
    /// Formats the cards due today.
    fn format_due(&self, due: &DueCards) -> String;

    /// Formats a single practice record.
    fn format_record(&self, record: &PracticeRecord) -> String;

    /// Formats a list of practice records.
    fn format_history(&self, records: &[PracticeRecord]) -> String;

    /// Formats a hint for a card.
    fn format_hint(&self, front: &str, hint: &str) -> String;

    /// Formats progress statistics.
    fn format_progress(&self, stats: &ProgressStats) -> String;

    /// Formats bucket contents.
    fn format_buckets(&self, buckets: &BucketMap, day: u64) -> String;

    /// Formats a short status message.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &AppError) -> String;
}

fn bucket_label(bucket: u32) -> String {
    if is_retired(bucket) {
        format!("{} (retired)", bucket)
    } else {
        bucket.to_string()
    }
}

fn recorded_bucket_label(bucket: i64) -> String {
    match u32::try_from(bucket) {
        Ok(bucket) => bucket_label(bucket),
        Err(_) => "unknown".to_string(),
    }
}

fn format_timestamp(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// JSON output formatter.
///
/// Wraps every result in a success envelope for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_due(&self, due: &DueCards) -> String {
        Self::envelope(due)
    }

    fn format_record(&self, record: &PracticeRecord) -> String {
        Self::envelope(record)
    }

    fn format_history(&self, records: &[PracticeRecord]) -> String {
        Self::envelope(json!({
            "history": records,
            "total": records.len(),
        }))
    }

    fn format_hint(&self, front: &str, hint: &str) -> String {
        Self::envelope(json!({ "front": front, "hint": hint }))
    }

    fn format_progress(&self, stats: &ProgressStats) -> String {
        Self::envelope(stats)
    }

    fn format_buckets(&self, buckets: &BucketMap, day: u64) -> String {
        let document = serialize(buckets, &[], day);
        Self::envelope(json!({
            "buckets": document.as_value()["buckets"],
            "day": day,
        }))
    }

    fn format_message(&self, message: &str) -> String {
        Self::envelope(json!({ "message": message }))
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string_pretty(&json!({
            "status": "error",
            "error": ErrorEnvelope::from_error(error),
        }))
        .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn history_table(records: &[PracticeRecord]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Time", "Front", "Difficulty", "From", "To"]);
        for record in records {
            builder.push_record(vec![
                format_timestamp(record.timestamp),
                record.card_front.clone(),
                record.difficulty.to_string(),
                recorded_bucket_label(record.previous_bucket),
                recorded_bucket_label(record.new_bucket),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_due(&self, due: &DueCards) -> String {
        if due.retired {
            return format!("Day {}: all cards are retired. Nothing left to practice.", due.day);
        }
        if due.cards.is_empty() {
            return format!("Day {}: no cards due.", due.day);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Front", "Tags"]);
        for card in &due.cards {
            builder.push_record(vec![card.front.clone(), card.tags.join(", ")]);
        }
        let mut table = builder.build();
        table.with(Style::modern());

        format!("Day {}: {} card(s) due\n{}", due.day, due.cards.len(), table)
    }

    fn format_record(&self, record: &PracticeRecord) -> String {
        format!(
            "✓ {} ({}): bucket {} → {}",
            record.card_front,
            record.difficulty,
            recorded_bucket_label(record.previous_bucket),
            recorded_bucket_label(record.new_bucket)
        )
    }

    fn format_history(&self, records: &[PracticeRecord]) -> String {
        if records.is_empty() {
            return "No practice history.".to_string();
        }
        Self::history_table(records)
    }

    fn format_hint(&self, front: &str, hint: &str) -> String {
        format!("Hint for \"{}\": {}", front, hint)
    }

    fn format_progress(&self, stats: &ProgressStats) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Bucket", "Cards"]);
        for (bucket, count) in &stats.buckets {
            builder.push_record(vec![bucket_label(*bucket), count.to_string()]);
        }
        let mut table = builder.build();
        table.with(Style::modern());

        let mut output = String::new();
        output.push_str(&format!("{}\n", table));
        output.push_str(&format!("Live cards:    {}\n", stats.total_cards));
        output.push_str(&format!("Retired cards: {}\n", stats.retired_cards));
        output.push_str(&format!(
            "Reviews:       {} (wrong {}, hard {}, easy {})\n",
            stats.total_reviews, stats.wrong_reviews, stats.hard_reviews, stats.easy_reviews
        ));
        output.push_str(&format!("Accuracy:      {:.1}%", stats.accuracy * 100.0));
        output
    }

    fn format_buckets(&self, buckets: &BucketMap, day: u64) -> String {
        if buckets.is_empty() {
            return format!("Day {}: no cards.", day);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Bucket", "Front", "Back", "Tags"]);
        for (bucket, card) in buckets.all_cards() {
            builder.push_record(vec![
                bucket_label(bucket),
                card.front.clone(),
                card.back.clone(),
                card.tags.join(", "),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());

        format!("Day {}\n{}", day, table)
    }

    fn format_message(&self, message: &str) -> String {
        format!("✓ {}", message)
    }

    fn format_error(&self, error: &AppError) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text output formatter.
///
/// Formats results as simple tab-separated text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_due(&self, due: &DueCards) -> String {
        let mut output = String::new();
        for card in &due.cards {
            output.push_str(&format!("{}\t{}\n", card.front, card.back));
        }
        output
    }

    fn format_record(&self, record: &PracticeRecord) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            record.card_front, record.difficulty, record.previous_bucket, record.new_bucket
        )
    }

    fn format_history(&self, records: &[PracticeRecord]) -> String {
        let mut output = String::new();
        for record in records {
            output.push_str(&format!(
                "{}\t{}\n",
                record.timestamp,
                self.format_record(record)
            ));
        }
        output
    }

    fn format_hint(&self, _front: &str, hint: &str) -> String {
        hint.to_string()
    }

    fn format_progress(&self, stats: &ProgressStats) -> String {
        let mut output = String::new();
        for (bucket, count) in &stats.buckets {
            output.push_str(&format!("bucket {}\t{}\n", bucket, count));
        }
        output.push_str(&format!("live\t{}\n", stats.total_cards));
        output.push_str(&format!("retired\t{}\n", stats.retired_cards));
        output.push_str(&format!("reviews\t{}\n", stats.total_reviews));
        output.push_str(&format!("accuracy\t{:.4}\n", stats.accuracy));
        output
    }

    fn format_buckets(&self, buckets: &BucketMap, _day: u64) -> String {
        let mut output = String::new();
        for (bucket, card) in buckets.all_cards() {
            output.push_str(&format!("{}\t{}\t{}\n", bucket, card.front, card.back));
        }
        output
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
