use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-valued outcome of classifying a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    pub fn from_str(s: &str) -> Option<SentimentLabel> {
        match s {
            "positive" => Some(SentimentLabel::Positive),
            "neutral" => Some(SentimentLabel::Neutral),
            "negative" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct marker hits found in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    pub fn new(positive: usize, negative: usize) -> Self {
        Self { positive, negative }
    }

    /// Strictly more positive hits wins, strictly more negative hits loses,
    /// anything else (0-0 included) is neutral.
    pub fn label(&self) -> SentimentLabel {
        if self.positive > self.negative {
            SentimentLabel::Positive
        } else if self.negative > self.positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_decision_rule() {
        assert_eq!(SentimentScore::new(2, 0).label(), SentimentLabel::Positive);
        assert_eq!(SentimentScore::new(1, 3).label(), SentimentLabel::Negative);
        assert_eq!(SentimentScore::new(1, 1).label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_score_is_neutral() {
        assert_eq!(SentimentScore::default().label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_str_roundtrip() {
        for label in SentimentLabel::ALL {
            assert_eq!(SentimentLabel::from_str(label.as_str()), Some(label));
        }
        assert_eq!(SentimentLabel::from_str("Positive"), None);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
        assert_eq!(SentimentLabel::Neutral.to_string(), "neutral");
    }
}
