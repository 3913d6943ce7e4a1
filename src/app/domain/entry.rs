use serde::{Deserialize, Serialize};

use super::sentiment::SentimentLabel;

/// A journal entry as handed to the caller on save.
///
/// `sentiment` is whatever the editor showed at the time, so it is `None`
/// for short entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub text: String,
    pub sentiment: Option<SentimentLabel>,
    /// Unix seconds
    pub timestamp: i64,
}

/// A mood check-in as handed to the caller on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCheckIn {
    pub mood: String,
    pub intensity: u8,
    pub tags: Vec<String>,
    pub note: String,
    pub note_sentiment: Option<SentimentLabel>,
    pub timestamp: i64,
}
