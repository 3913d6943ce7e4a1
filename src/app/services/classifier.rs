//! Keyword-counting sentiment classification.
//!
//! A text is scored by counting how many distinct marker words of each set
//! it contains; the larger count wins and a tie is neutral. Matching is done
//! on the lowercased text. In [`MatchMode::Substring`] a marker matches
//! anywhere, even inside a longer word ("sad" in "sadly"). In
//! [`MatchMode::WordBoundary`] it must stand as a whole word.

use std::sync::LazyLock;

use super::lexicon::Lexicon;
use super::text_ops::{contains_word, exceeds_threshold};
use crate::app::domain::sentiment::{SentimentLabel, SentimentScore};
use crate::app::domain::settings::MatchMode;

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Classify with the default lexicon in substring mode.
pub fn classify(text: &str) -> SentimentLabel {
    DEFAULT_CLASSIFIER.classify(text)
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    lexicon: Lexicon,
    mode: MatchMode,
}

impl Classifier {
    pub fn new(lexicon: Lexicon, mode: MatchMode) -> Self {
        Self { lexicon, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Count distinct positive and negative markers present in `text`.
    pub fn score(&self, text: &str) -> SentimentScore {
        let lowered = text.to_lowercase();
        let found = |marker: &str| match self.mode {
            MatchMode::Substring => lowered.contains(marker),
            MatchMode::WordBoundary => contains_word(&lowered, marker),
        };
        SentimentScore::new(
            self.lexicon.positive_markers().filter(|m| found(*m)).count(),
            self.lexicon.negative_markers().filter(|m| found(*m)).count(),
        )
    }

    pub fn classify(&self, text: &str) -> SentimentLabel {
        self.score(text).label()
    }

    /// Label for `text` once it is longer than `threshold`, `None` before.
    pub fn classify_above(&self, text: &str, threshold: usize) -> Option<SentimentLabel> {
        exceeds_threshold(text, threshold).then(|| self.classify(text))
    }
}
