use super::navigation::Tab;

/// Everything the front-end can ask of the app.
/// Each input event becomes one of these; `AppState::handle` dispatches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    SelectTab(Tab),

    // Journal
    JournalTextChanged(String),
    JournalUsePrompt(usize),
    JournalSave,

    // Mood
    MoodSelected(String),
    MoodIntensityChanged(u8),
    MoodTagToggled(String),
    MoodNoteChanged(String),
    MoodSave,

    // Goals
    GoalShowAddForm,
    GoalCancelAdd,
    GoalDraftChanged(String),
    GoalAdd,
    HabitToggled(u32),

    // Settings
    SetSentimentThreshold(usize),
}
