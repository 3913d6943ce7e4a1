use std::collections::BTreeSet;

use crate::app::infrastructure::error::{AppError, Result};

pub const DEFAULT_POSITIVE_MARKERS: [&str; 9] = [
    "happy",
    "good",
    "great",
    "amazing",
    "wonderful",
    "excited",
    "love",
    "grateful",
    "blessed",
];

pub const DEFAULT_NEGATIVE_MARKERS: [&str; 9] = [
    "sad",
    "bad",
    "terrible",
    "awful",
    "hate",
    "angry",
    "stressed",
    "worried",
    "anxious",
];

/// Positive and negative marker words, stored lowercase.
///
/// The two sets are disjoint and never empty. Once built a lexicon is
/// read-only; the classifier only tests membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl Lexicon {
    /// Build a lexicon from caller-supplied word lists.
    ///
    /// Entries are trimmed and lowercased; duplicates within a set collapse.
    /// Fails if either set ends up empty, an entry is blank, or a word
    /// appears in both sets.
    pub fn from_words<P, N>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive = normalize_set(positive, "positive")?;
        let negative = normalize_set(negative, "negative")?;

        if let Some(word) = positive.intersection(&negative).next() {
            return Err(AppError::Lexicon(format!(
                "word '{}' is in both the positive and negative sets",
                word
            )));
        }

        Ok(Self { positive, negative })
    }

    /// Default lexicon extended with extra words, as configured in settings.
    pub fn with_extra_words(extra_positive: &[String], extra_negative: &[String]) -> Result<Self> {
        let positive = DEFAULT_POSITIVE_MARKERS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_positive.iter().cloned());
        let negative = DEFAULT_NEGATIVE_MARKERS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_negative.iter().cloned());
        Self::from_words(positive, negative)
    }

    pub fn positive_markers(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    pub fn negative_markers(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(&word.to_lowercase())
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE_MARKERS.iter().map(|w| w.to_string()).collect(),
            negative: DEFAULT_NEGATIVE_MARKERS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

fn normalize_set<I>(words: I, which: &str) -> Result<BTreeSet<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set = BTreeSet::new();
    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if word.is_empty() {
            return Err(AppError::Lexicon(format!("blank entry in the {} set", which)));
        }
        set.insert(word);
    }
    if set.is_empty() {
        return Err(AppError::Lexicon(format!("the {} set is empty", which)));
    }
    Ok(set)
}
