use crate::app::controllers::goals::GoalsController;
use crate::app::controllers::journal::JournalController;
use crate::app::controllers::mood::MoodController;
use crate::app::domain::entry::{MoodCheckIn, SavedEntry};
use crate::app::domain::fixtures::Fixtures;
use crate::app::domain::messages::Message;
use crate::app::domain::navigation::Tab;
use crate::app::domain::settings::AppSettings;
use crate::app::domain::toast::Toast;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform::current_timestamp;

/// Main application coordinator.
///
/// Owns the settings, the seed data and one controller per interactive
/// screen. Saved entries and check-ins only live as long as the state does.
pub struct AppState {
    pub settings: AppSettings,
    pub fixtures: Fixtures,
    pub active_tab: Tab,
    pub journal: JournalController,
    pub mood: MoodController,
    pub goals: GoalsController,
    pub saved_entries: Vec<SavedEntry>,
    pub check_ins: Vec<MoodCheckIn>,
}

impl AppState {
    pub fn new(settings: AppSettings, fixtures: Fixtures) -> Result<Self> {
        let classifier = settings.build_classifier()?;
        let threshold = settings.sentiment_threshold;

        let journal = JournalController::new(
            classifier.clone(),
            threshold,
            fixtures.writing_prompts.clone(),
        );
        let mood = MoodController::new(
            fixtures.mood_options.clone(),
            fixtures.mood_tags.clone(),
            classifier,
            threshold,
        );
        let goals = GoalsController::new(
            fixtures.weekly_goals.clone(),
            fixtures.daily_habits.clone(),
            fixtures.monthly_goals.clone(),
        );

        Ok(Self {
            active_tab: settings.start_tab,
            settings,
            fixtures,
            journal,
            mood,
            goals,
            saved_entries: Vec::new(),
            check_ins: Vec::new(),
        })
    }

    /// Apply one message. Returns the toast to show, if any.
    pub fn handle(&mut self, message: Message) -> Option<Toast> {
        match message {
            Message::SelectTab(tab) => {
                self.active_tab = tab;
                None
            }

            Message::JournalTextChanged(text) => {
                self.journal.text_changed(text);
                None
            }
            Message::JournalUsePrompt(index) => {
                if !self.journal.use_prompt(index) {
                    tracing::warn!("No writing prompt at index {}", index);
                }
                None
            }
            Message::JournalSave => Some(match self.journal.save(current_timestamp()) {
                Ok((entry, toast)) => {
                    self.saved_entries.push(entry);
                    toast
                }
                Err(toast) => toast,
            }),

            Message::MoodSelected(label) => {
                if !self.mood.select_mood(&label) {
                    tracing::warn!("Unknown mood '{}'", label);
                }
                None
            }
            Message::MoodIntensityChanged(intensity) => {
                self.mood.set_intensity(intensity);
                None
            }
            Message::MoodTagToggled(tag) => {
                if !self.mood.toggle_tag(&tag) {
                    tracing::warn!("Unknown mood tag '{}'", tag);
                }
                None
            }
            Message::MoodNoteChanged(note) => {
                self.mood.set_note(note);
                None
            }
            Message::MoodSave => Some(match self.mood.save(current_timestamp()) {
                Ok((check_in, toast)) => {
                    self.check_ins.push(check_in);
                    toast
                }
                Err(toast) => toast,
            }),

            Message::GoalShowAddForm => {
                self.goals.show_add_form();
                None
            }
            Message::GoalCancelAdd => {
                self.goals.cancel_add();
                None
            }
            Message::GoalDraftChanged(title) => {
                self.goals.set_draft(title);
                None
            }
            Message::GoalAdd => Some(self.goals.add_goal().unwrap_or_else(|toast| toast)),
            Message::HabitToggled(id) => {
                if !self.goals.toggle_habit(id) {
                    tracing::warn!("Unknown habit id {}", id);
                }
                None
            }

            Message::SetSentimentThreshold(threshold) => {
                self.settings.sentiment_threshold = threshold;
                self.journal.set_threshold(threshold);
                self.mood.set_threshold(threshold);
                None
            }
        }
    }

    /// Swap in new settings, rebuilding the classifier they describe.
    ///
    /// On error the current settings stay in place.
    pub fn apply_settings(&mut self, new_settings: AppSettings) -> Result<()> {
        let classifier = new_settings.build_classifier()?;
        let threshold = new_settings.sentiment_threshold;

        self.journal.set_classifier(classifier.clone());
        self.journal.set_threshold(threshold);
        self.mood.set_classifier(classifier, threshold);
        self.settings = new_settings;
        Ok(())
    }
}
