use crate::app::domain::entry::SavedEntry;
use crate::app::domain::feedback::{Feedback, feedback_for};
use crate::app::domain::sentiment::SentimentLabel;
use crate::app::domain::toast::Toast;
use crate::app::services::classifier::Classifier;
use crate::app::services::text_ops::{is_blank, utf16_len};

/// Editor state for a new journal entry.
///
/// The text is replaced wholesale on every change and the sentiment is
/// re-derived from it; nothing else is kept between edits.
pub struct JournalController {
    text: String,
    sentiment: Option<SentimentLabel>,
    threshold: usize,
    classifier: Classifier,
    prompts: Vec<String>,
}

impl JournalController {
    pub fn new(classifier: Classifier, threshold: usize, prompts: Vec<String>) -> Self {
        Self {
            text: String::new(),
            sentiment: None,
            threshold,
            classifier,
            prompts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `None` until the text is longer than the threshold.
    pub fn sentiment(&self) -> Option<SentimentLabel> {
        self.sentiment
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn set_threshold(&mut self, threshold: usize) {
        self.threshold = threshold;
        self.sentiment = self.classifier.classify_above(&self.text, threshold);
    }

    pub fn set_classifier(&mut self, classifier: Classifier) {
        self.classifier = classifier;
        self.sentiment = self.classifier.classify_above(&self.text, self.threshold);
    }

    pub fn text_changed(&mut self, text: String) {
        self.sentiment = self.classifier.classify_above(&text, self.threshold);
        tracing::debug!(
            chars = utf16_len(&text),
            sentiment = ?self.sentiment,
            "journal text changed"
        );
        self.text = text;
    }

    /// Replace the text with a writing prompt followed by a space.
    ///
    /// The sentiment badge is left as it was; it catches up on the next edit.
    /// Returns false for an unknown prompt index.
    pub fn use_prompt(&mut self, index: usize) -> bool {
        match self.prompts.get(index) {
            Some(prompt) => {
                self.text = format!("{} ", prompt);
                true
            }
            None => false,
        }
    }

    pub fn can_save(&self) -> bool {
        !is_blank(&self.text)
    }

    /// Character counter as displayed under the editor
    pub fn char_count(&self) -> usize {
        utf16_len(&self.text)
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.sentiment.map(feedback_for)
    }

    /// Hand the entry to the caller and clear the editor.
    ///
    /// A blank entry is refused with a destructive toast and leaves the
    /// editor untouched.
    pub fn save(&mut self, timestamp: i64) -> Result<(SavedEntry, Toast), Toast> {
        if !self.can_save() {
            return Err(Toast::destructive(
                "Please write something",
                "Your journal entry cannot be empty.",
            ));
        }

        let entry = SavedEntry {
            text: std::mem::take(&mut self.text),
            sentiment: self.sentiment.take(),
            timestamp,
        };
        tracing::info!(sentiment = ?entry.sentiment, "journal entry saved");

        Ok((
            entry,
            Toast::success(
                "Journal entry saved! \u{1f4dd}",
                "Your thoughts have been recorded and analyzed.",
            ),
        ))
    }
}
