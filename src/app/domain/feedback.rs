use super::sentiment::SentimentLabel;

/// Icon shown next to a sentiment badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconToken {
    Smile,
    Meh,
    Frown,
}

impl IconToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconToken::Smile => "smile",
            IconToken::Meh => "meh",
            IconToken::Frown => "frown",
        }
    }

    /// Glyph used by the terminal front-end.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconToken::Smile => "\u{1f642}",
            IconToken::Meh => "\u{1f610}",
            IconToken::Frown => "\u{1f641}",
        }
    }
}

/// Mood palette entry a label is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    MoodGood,
    MoodNeutral,
    MoodSad,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::MoodGood => "mood-good",
            ColorToken::MoodNeutral => "mood-neutral",
            ColorToken::MoodSad => "mood-sad",
        }
    }

    pub fn badge_classes(&self) -> String {
        let token = self.as_str();
        format!("bg-{token}/20 text-{token} border-{token}/30")
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            ColorToken::MoodGood => (60, 170, 80),
            ColorToken::MoodNeutral => (140, 140, 140),
            ColorToken::MoodSad => (60, 120, 220),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub icon: IconToken,
    pub color: ColorToken,
}

const POSITIVE_MESSAGE: &str =
    "Your writing reflects positive emotions! Keep nurturing these feelings.";
const NEGATIVE_MESSAGE: &str =
    "It sounds like you're going through a tough time. Consider talking to someone you trust.";
const NEUTRAL_MESSAGE: &str =
    "Your writing shows balanced emotions. This kind of reflection is valuable.";

/// Message and display affordance for a label.
pub fn feedback_for(label: SentimentLabel) -> Feedback {
    match label {
        SentimentLabel::Positive => Feedback {
            message: POSITIVE_MESSAGE,
            icon: IconToken::Smile,
            color: ColorToken::MoodGood,
        },
        SentimentLabel::Negative => Feedback {
            message: NEGATIVE_MESSAGE,
            icon: IconToken::Frown,
            color: ColorToken::MoodSad,
        },
        SentimentLabel::Neutral => Feedback {
            message: NEUTRAL_MESSAGE,
            icon: IconToken::Meh,
            color: ColorToken::MoodNeutral,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_is_deterministic() {
        for label in SentimentLabel::ALL {
            assert_eq!(feedback_for(label), feedback_for(label));
        }
    }

    #[test]
    fn test_feedback_tokens() {
        let positive = feedback_for(SentimentLabel::Positive);
        assert_eq!(positive.icon, IconToken::Smile);
        assert_eq!(positive.color, ColorToken::MoodGood);
        assert!(positive.message.starts_with("Your writing reflects positive emotions"));

        let negative = feedback_for(SentimentLabel::Negative);
        assert_eq!(negative.icon, IconToken::Frown);
        assert_eq!(negative.color, ColorToken::MoodSad);
        assert!(negative.message.contains("talking to someone you trust"));

        let neutral = feedback_for(SentimentLabel::Neutral);
        assert_eq!(neutral.icon, IconToken::Meh);
        assert_eq!(neutral.color, ColorToken::MoodNeutral);
    }

    #[test]
    fn test_messages_are_distinct() {
        let messages: Vec<_> = SentimentLabel::ALL
            .iter()
            .map(|l| feedback_for(*l).message)
            .collect();
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(
            ColorToken::MoodSad.badge_classes(),
            "bg-mood-sad/20 text-mood-sad border-mood-sad/30"
        );
    }
}
