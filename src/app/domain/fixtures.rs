//! Seed data for the presentation layer.
//!
//! Nothing here is computed: every number is demo data. The built-in set is
//! [`Fixtures::default`]; a TOML file can replace any section of it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::sentiment::SentimentLabel;
use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodOption {
    pub emoji: String,
    pub label: String,
    pub color: String,
}

/// Dashboard quick mood check entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub emoji: String,
    pub label: String,
    pub count: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMood {
    pub day: String,
    /// 1 (poor) to 10 (great)
    pub mood: u8,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub progress: u8,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub trend: SentimentLabel,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub earned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub title: String,
    pub progress: u8,
    #[serde(default)]
    pub completed: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    pub category: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayGoal {
    pub id: u32,
    pub title: String,
    pub progress: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPreview {
    pub date: String,
    pub preview: String,
    pub sentiment: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub mood_options: Vec<MoodOption>,
    pub mood_tags: Vec<String>,
    pub mood_summary: Vec<MoodSummary>,
    pub wellness_stats: Vec<Stat>,
    pub todays_goals: Vec<TodayGoal>,
    pub weekly_highlights: Vec<String>,
    pub weekly_mood: Vec<DailyMood>,
    pub insights: Vec<Insight>,
    pub weekly_stats: Vec<Stat>,
    pub achievements: Vec<Achievement>,
    pub recommendations: Vec<Tip>,
    pub journal_insights: Vec<Tip>,
    pub recent_entries: Vec<EntryPreview>,
    pub writing_prompts: Vec<String>,
    pub weekly_goals: Vec<Goal>,
    pub daily_habits: Vec<Habit>,
    pub monthly_goals: Vec<Goal>,
}

impl Fixtures {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let fixtures: Fixtures = toml::from_str(contents)?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if given, falling back to the built-in data when the
    /// file cannot be used.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(fixtures) => fixtures,
            Err(e) => {
                tracing::warn!(
                    "Failed to load fixtures from {}: {}. Using built-in data.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Check ranges and id uniqueness.
    pub fn validate(&self) -> Result<()> {
        for day in &self.weekly_mood {
            if !(1..=10).contains(&day.mood) {
                return Err(AppError::Fixtures(format!(
                    "mood for {} is {}, expected 1 to 10",
                    day.day, day.mood
                )));
            }
        }

        let progress_values = self
            .weekly_goals
            .iter()
            .chain(&self.monthly_goals)
            .map(|g| (g.title.as_str(), g.progress))
            .chain(self.todays_goals.iter().map(|g| (g.title.as_str(), g.progress)))
            .chain(self.wellness_stats.iter().map(|s| (s.label.as_str(), s.progress)))
            .chain(self.weekly_stats.iter().map(|s| (s.label.as_str(), s.progress)));
        for (title, progress) in progress_values {
            if progress > 100 {
                return Err(AppError::Fixtures(format!(
                    "progress for '{}' is {}%, expected at most 100%",
                    title, progress
                )));
            }
        }

        for goal in self.weekly_goals.iter().chain(&self.monthly_goals) {
            if let (Some(done), Some(total)) = (goal.completed, goal.total) {
                if done > total {
                    return Err(AppError::Fixtures(format!(
                        "goal '{}' has {} of {} completed",
                        goal.title, done, total
                    )));
                }
            }
        }

        check_unique_ids("weekly goal", self.weekly_goals.iter().map(|g| g.id))?;
        check_unique_ids("monthly goal", self.monthly_goals.iter().map(|g| g.id))?;
        check_unique_ids("habit", self.daily_habits.iter().map(|h| h.id))?;
        check_unique_ids("today's goal", self.todays_goals.iter().map(|g| g.id))?;
        Ok(())
    }
}

fn check_unique_ids(kind: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Fixtures(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}

fn mood_option(emoji: &str, label: &str, color: &str) -> MoodOption {
    MoodOption {
        emoji: emoji.to_string(),
        label: label.to_string(),
        color: color.to_string(),
    }
}

fn mood_summary(emoji: &str, label: &str, count: u32, color: &str) -> MoodSummary {
    MoodSummary {
        emoji: emoji.to_string(),
        label: label.to_string(),
        count,
        color: color.to_string(),
    }
}

fn daily_mood(day: &str, mood: u8, color: &str) -> DailyMood {
    DailyMood {
        day: day.to_string(),
        mood,
        color: color.to_string(),
    }
}

fn stat(label: &str, value: &str, progress: u8, caption: Option<&str>) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
        progress,
        caption: caption.map(str::to_string),
    }
}

fn tip(title: &str, description: &str) -> Tip {
    Tip {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn today_goal(id: u32, title: &str, progress: u8, completed: bool) -> TodayGoal {
    TodayGoal {
        id,
        title: title.to_string(),
        progress,
        completed,
    }
}

fn achievement(title: &str, description: &str, earned: bool) -> Achievement {
    Achievement {
        title: title.to_string(),
        description: description.to_string(),
        earned,
    }
}

fn habit(id: u32, title: &str, completed: bool, streak: u32) -> Habit {
    Habit {
        id,
        title: title.to_string(),
        completed,
        streak,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            mood_options: vec![
                mood_option("\u{1f604}", "Excited", "mood-happy"),
                mood_option("\u{1f60a}", "Happy", "mood-happy"),
                mood_option("\u{1f60c}", "Content", "mood-good"),
                mood_option("\u{1f610}", "Neutral", "mood-neutral"),
                mood_option("\u{1f61f}", "Worried", "mood-anxious"),
                mood_option("\u{1f614}", "Sad", "mood-sad"),
                mood_option("\u{1f630}", "Anxious", "mood-anxious"),
                mood_option("\u{1f624}", "Frustrated", "mood-anxious"),
                mood_option("\u{1f634}", "Tired", "mood-neutral"),
            ],
            mood_tags: strings(&[
                "School", "Friends", "Family", "Health", "Sleep", "Exercise", "Work", "Stress",
                "Relaxed", "Motivated", "Overwhelmed", "Grateful",
            ]),
            mood_summary: vec![
                mood_summary("\u{1f604}", "Great", 5, "mood-happy"),
                mood_summary("\u{1f60a}", "Good", 8, "mood-good"),
                mood_summary("\u{1f610}", "Neutral", 3, "mood-neutral"),
                mood_summary("\u{1f614}", "Low", 2, "mood-sad"),
            ],
            wellness_stats: vec![
                stat("Sleep", "7.5h", 85, Some("85% of goal")),
                stat("Activity", "6,420", 64, Some("64% of 10k steps")),
            ],
            todays_goals: vec![
                today_goal(1, "Drink 8 glasses of water", 75, false),
                today_goal(2, "Get 8 hours of sleep", 100, true),
                today_goal(3, "Exercise for 30 minutes", 60, false),
                today_goal(4, "Meditate for 10 minutes", 100, true),
            ],
            weekly_highlights: strings(&[
                "Your mood has been trending upward this week! \u{1f4c8}",
                "You're averaging 7.2 hours of sleep - great job! \u{1f634}",
                "Try to increase your daily activity by 500 steps \u{1f6b6}",
            ]),
            weekly_mood: vec![
                daily_mood("Mon", 7, "bg-mood-good"),
                daily_mood("Tue", 8, "bg-mood-happy"),
                daily_mood("Wed", 6, "bg-mood-neutral"),
                daily_mood("Thu", 9, "bg-mood-happy"),
                daily_mood("Fri", 5, "bg-mood-neutral"),
                daily_mood("Sat", 8, "bg-mood-good"),
                daily_mood("Sun", 7, "bg-mood-good"),
            ],
            insights: vec![
                Insight {
                    title: "Mood Trends".to_string(),
                    description: "Your mood has improved by 15% this week compared to last week"
                        .to_string(),
                    trend: SentimentLabel::Positive,
                    color: "text-mood-good".to_string(),
                },
                Insight {
                    title: "Sleep Impact".to_string(),
                    description: "Better sleep correlates with 23% higher mood ratings".to_string(),
                    trend: SentimentLabel::Positive,
                    color: "text-secondary".to_string(),
                },
                Insight {
                    title: "Activity Boost".to_string(),
                    description: "Exercise days show 18% better overall wellness scores"
                        .to_string(),
                    trend: SentimentLabel::Positive,
                    color: "text-accent".to_string(),
                },
            ],
            weekly_stats: vec![
                stat("Average Mood", "7.2/10", 72, None),
                stat("Sleep Quality", "8.1/10", 81, None),
                stat("Goal Completion", "85%", 85, None),
            ],
            achievements: vec![
                achievement("7-Day Streak", "Logged mood daily", true),
                achievement("Early Bird", "Consistently good sleep", true),
                achievement("Mindful Week", "Regular meditation", false),
                achievement("Social Butterfly", "Active social connections", true),
            ],
            recommendations: vec![
                tip(
                    "Try morning meditation",
                    "Your mood tends to be higher on days you start with mindfulness",
                ),
                tip(
                    "Maintain your sleep schedule",
                    "You're doing great! Keep up the consistent 7-8 hours",
                ),
                tip("Plan social activity", "Your mood peaks when you connect with friends"),
            ],
            journal_insights: vec![
                tip(
                    "Pattern Recognition",
                    "Your mood tends to improve when you write about accomplishments",
                ),
                tip(
                    "Emotional Growth",
                    "You're becoming better at expressing complex emotions in writing",
                ),
                tip(
                    "Reflection Habit",
                    "You've been consistently journaling for 12 days - great habit!",
                ),
            ],
            recent_entries: vec![
                EntryPreview {
                    date: "Today, 2:30 PM".to_string(),
                    preview: "Had a great study session today. Feeling productive and motivated..."
                        .to_string(),
                    sentiment: SentimentLabel::Positive,
                },
                EntryPreview {
                    date: "Yesterday, 8:15 PM".to_string(),
                    preview: "Exam stress is getting to me, but I'm trying to stay positive..."
                        .to_string(),
                    sentiment: SentimentLabel::Neutral,
                },
                EntryPreview {
                    date: "2 days ago, 10:45 AM".to_string(),
                    preview: "Really enjoyed spending time with friends. We laughed so much..."
                        .to_string(),
                    sentiment: SentimentLabel::Positive,
                },
            ],
            writing_prompts: strings(&[
                "What am I most grateful for today?",
                "What challenge did I overcome recently?",
                "How do I want to feel tomorrow?",
                "What made me smile this week?",
                "What would I tell my younger self?",
            ]),
            weekly_goals: vec![
                Goal {
                    id: 1,
                    title: "Exercise 4 times this week".to_string(),
                    progress: 75,
                    completed: Some(3),
                    total: Some(4),
                    category: "Health".to_string(),
                    due_date: Some("End of week".to_string()),
                },
                Goal {
                    id: 2,
                    title: "Read for 30 minutes daily".to_string(),
                    progress: 86,
                    completed: Some(6),
                    total: Some(7),
                    category: "Learning".to_string(),
                    due_date: Some("Daily".to_string()),
                },
                Goal {
                    id: 3,
                    title: "Drink 8 glasses of water daily".to_string(),
                    progress: 57,
                    completed: Some(4),
                    total: Some(7),
                    category: "Health".to_string(),
                    due_date: Some("Daily".to_string()),
                },
            ],
            daily_habits: vec![
                habit(1, "Morning meditation (10 min)", true, 12),
                habit(2, "Gratitude journaling", true, 8),
                habit(3, "Take vitamins", false, 5),
                habit(4, "No social media before 10 AM", true, 3),
                habit(5, "Walk 10,000 steps", false, 15),
            ],
            monthly_goals: vec![
                Goal {
                    id: 1,
                    title: "Complete online course".to_string(),
                    progress: 45,
                    completed: None,
                    total: None,
                    category: "Learning".to_string(),
                    due_date: Some("March 31".to_string()),
                },
                Goal {
                    id: 2,
                    title: "Save $200".to_string(),
                    progress: 70,
                    completed: None,
                    total: None,
                    category: "Finance".to_string(),
                    due_date: Some("March 31".to_string()),
                },
                Goal {
                    id: 3,
                    title: "Make 3 new friends".to_string(),
                    progress: 33,
                    completed: None,
                    total: None,
                    category: "Social".to_string(),
                    due_date: Some("March 31".to_string()),
                },
            ],
        }
    }
}
