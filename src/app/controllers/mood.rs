use crate::app::domain::entry::MoodCheckIn;
use crate::app::domain::fixtures::MoodOption;
use crate::app::domain::sentiment::SentimentLabel;
use crate::app::domain::toast::Toast;
use crate::app::services::classifier::Classifier;

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;
pub const DEFAULT_INTENSITY: u8 = 5;

/// Form state of the mood check-in screen.
pub struct MoodController {
    options: Vec<MoodOption>,
    tags: Vec<String>,
    selected_mood: Option<String>,
    intensity: u8,
    selected_tags: Vec<String>,
    note: String,
    classifier: Classifier,
    threshold: usize,
}

impl MoodController {
    pub fn new(
        options: Vec<MoodOption>,
        tags: Vec<String>,
        classifier: Classifier,
        threshold: usize,
    ) -> Self {
        Self {
            options,
            tags,
            selected_mood: None,
            intensity: DEFAULT_INTENSITY,
            selected_tags: Vec::new(),
            note: String::new(),
            classifier,
            threshold,
        }
    }

    pub fn options(&self) -> &[MoodOption] {
        &self.options
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn selected_mood(&self) -> Option<&str> {
        self.selected_mood.as_deref()
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: usize) {
        self.threshold = threshold;
    }

    pub fn set_classifier(&mut self, classifier: Classifier, threshold: usize) {
        self.classifier = classifier;
        self.threshold = threshold;
    }

    /// Select a mood by label. Labels not among the options are ignored.
    pub fn select_mood(&mut self, label: &str) -> bool {
        match self.options.iter().find(|o| o.label.eq_ignore_ascii_case(label)) {
            Some(option) => {
                self.selected_mood = Some(option.label.clone());
                true
            }
            None => false,
        }
    }

    pub fn set_intensity(&mut self, intensity: u8) {
        self.intensity = intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
    }

    /// Add the tag if absent, remove it if present. Tags not offered by the
    /// form are ignored.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let Some(tag) = self.tags.iter().find(|t| t.eq_ignore_ascii_case(tag)) else {
            return false;
        };
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.clone());
        }
        true
    }

    pub fn set_note(&mut self, note: String) {
        self.note = note;
    }

    /// The note goes through the same sentiment check as a journal entry.
    pub fn note_sentiment(&self) -> Option<SentimentLabel> {
        self.classifier.classify_above(&self.note, self.threshold)
    }

    pub fn reset(&mut self) {
        self.selected_mood = None;
        self.intensity = DEFAULT_INTENSITY;
        self.selected_tags.clear();
        self.note.clear();
    }

    pub fn save(&mut self, timestamp: i64) -> Result<(MoodCheckIn, Toast), Toast> {
        let Some(mood) = self.selected_mood.clone() else {
            return Err(Toast::destructive(
                "Please select a mood",
                "Choose how you're feeling before saving.",
            ));
        };

        let check_in = MoodCheckIn {
            mood,
            intensity: self.intensity,
            tags: self.selected_tags.clone(),
            note: self.note.clone(),
            note_sentiment: self.note_sentiment(),
            timestamp,
        };
        tracing::info!(mood = %check_in.mood, intensity = check_in.intensity, "mood logged");
        self.reset();

        Ok((
            check_in,
            Toast::success(
                "Mood logged successfully! \u{1f389}",
                "Your mood has been recorded and will help track your wellness journey.",
            ),
        ))
    }
}
