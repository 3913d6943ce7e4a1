//! Plain-text renderings of each screen.
//!
//! Every function returns the finished text; printing is left to the caller.

use std::fmt::Write;

use super::theme::Theme;
use crate::app::controllers::goals::GoalsController;
use crate::app::controllers::journal::JournalController;
use crate::app::controllers::mood::MoodController;
use crate::app::domain::feedback::feedback_for;
use crate::app::domain::fixtures::{Fixtures, Goal, Stat};
use crate::app::domain::navigation::Tab;
use crate::app::domain::sentiment::SentimentLabel;
use crate::app::domain::toast::Toast;
use crate::app::services::text_ops::{preview, word_count};

const BAR_WIDTH: usize = 20;
const PREVIEW_CHARS: usize = 60;

/// `[#######-------------]` style bar for a 0-100 value
pub fn progress_bar(progress: u8, width: usize) -> String {
    let filled = (progress.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn sentiment_badge(label: SentimentLabel, theme: &Theme) -> String {
    let feedback = feedback_for(label);
    theme.token(&format!("{} {}", feedback.icon.glyph(), label), feedback.color)
}

pub fn render_toast(toast: &Toast, theme: &Theme) -> String {
    format!(
        "{}\n  {}",
        theme.toast(&theme.bold(&toast.title), toast.variant),
        toast.description
    )
}

pub fn render_navigation(active: Tab, theme: &Theme) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                theme.bold(&format!("[{}]", tab.label()))
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_stat(out: &mut String, stat: &Stat) {
    let bar = progress_bar(stat.progress, BAR_WIDTH);
    let _ = write!(out, "  {:<16} {:>8} {}", stat.label, stat.value, bar);
    if let Some(caption) = &stat.caption {
        let _ = write!(out, " {}", caption);
    }
    out.push('\n');
}

fn render_goal(out: &mut String, goal: &Goal, theme: &Theme) {
    let _ = writeln!(out, "  {} [{}]", goal.title, goal.category);
    let counts = match (goal.completed, goal.total) {
        (Some(done), Some(total)) => format!(" {}/{}", done, total),
        _ => String::new(),
    };
    let due = goal
        .due_date
        .as_deref()
        .map(|d| theme.dim(&format!(" due {}", d)))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "    {} {:>3}%{}{}",
        progress_bar(goal.progress, BAR_WIDTH),
        goal.progress,
        counts,
        due
    );
}

pub fn render_journal(journal: &JournalController, show_feedback: bool, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", theme.bold("New Entry"));
    if let Some(label) = journal.sentiment() {
        let _ = write!(out, "  {}", sentiment_badge(label, theme));
    }
    out.push('\n');

    if journal.text().is_empty() {
        let _ = writeln!(out, "{}", theme.dim("How was your day? What's on your mind?"));
    } else {
        let _ = writeln!(out, "{}", journal.text());
    }

    if show_feedback {
        if let Some(feedback) = journal.feedback() {
            let _ = writeln!(out, "\nSentiment Analysis\n  {}", feedback.message);
        }
    }

    let counts = format!(
        "{} words, {} characters",
        word_count(journal.text()),
        journal.char_count()
    );
    let _ = writeln!(out, "\n{}", theme.dim(&counts));
    out
}

pub fn render_prompts(prompts: &[String]) -> String {
    let mut out = String::from("Writing Prompts\n");
    for (i, prompt) in prompts.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, prompt);
    }
    out
}

pub fn render_recent_entries(fixtures: &Fixtures, theme: &Theme) -> String {
    let mut out = String::from("Recent Entries\n");
    for entry in &fixtures.recent_entries {
        let _ = writeln!(
            out,
            "  {}  {}\n    {}",
            theme.dim(&entry.date),
            sentiment_badge(entry.sentiment, theme),
            preview(&entry.preview, PREVIEW_CHARS)
        );
    }
    out
}

pub fn render_mood(mood: &MoodController, theme: &Theme) -> String {
    let mut out = String::from("Select Your Mood\n");
    for option in mood.options() {
        let marker = if mood.selected_mood() == Some(option.label.as_str()) { '>' } else { ' ' };
        let _ = writeln!(out, " {} {} {}", marker, option.emoji, option.label);
    }
    if mood.selected_mood().is_some() {
        let _ = writeln!(out, "\nIntensity {}/10", mood.intensity());
    }
    let tags = mood
        .tags()
        .iter()
        .map(|tag| {
            if mood.selected_tags().contains(tag) {
                theme.bold(&format!("[{}]", tag))
            } else {
                tag.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "\nWhat's Affecting You?\n  {}", tags);
    out
}

pub fn render_dashboard(fixtures: &Fixtures, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", theme.bold("Quick Mood Check"));
    let moods = fixtures
        .mood_summary
        .iter()
        .map(|m| format!("{} {} ({})", m.emoji, m.label, m.count))
        .collect::<Vec<_>>()
        .join("   ");
    let _ = writeln!(out, "  {}\n", moods);

    let _ = writeln!(out, "{}", theme.bold("Wellness Overview"));
    for stat in &fixtures.wellness_stats {
        render_stat(&mut out, stat);
    }

    let _ = writeln!(out, "\n{}", theme.bold("Today's Goals"));
    for goal in &fixtures.todays_goals {
        let title = if goal.completed {
            theme.dim(&format!("{} (done)", goal.title))
        } else {
            goal.title.clone()
        };
        let bar = progress_bar(goal.progress, BAR_WIDTH);
        let _ = writeln!(out, "  {:<40} {} {:>3}%", title, bar, goal.progress);
    }

    let _ = writeln!(out, "\n{}", theme.bold("Weekly Insights"));
    for line in &fixtures.weekly_highlights {
        let _ = writeln!(out, "  - {}", line);
    }
    out
}

pub fn render_insights(fixtures: &Fixtures, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", theme.bold("Weekly Mood"));
    for day in &fixtures.weekly_mood {
        let bar = "#".repeat(day.mood as usize);
        let _ = writeln!(out, "  {:<4} {:<10} {}", day.day, bar, day.mood);
    }

    let _ = writeln!(out, "\n{}", theme.bold("Key Insights"));
    for insight in &fixtures.insights {
        let _ = writeln!(
            out,
            "  {} {}\n    {}",
            sentiment_badge(insight.trend, theme),
            insight.title,
            insight.description
        );
    }

    let _ = writeln!(out, "\n{}", theme.bold("This Week's Stats"));
    for stat in &fixtures.weekly_stats {
        render_stat(&mut out, stat);
    }

    let _ = writeln!(out, "\n{}", theme.bold("Recent Achievements"));
    for achievement in &fixtures.achievements {
        let mark = if achievement.earned { "*" } else { " " };
        let line = format!("  [{}] {} - {}", mark, achievement.title, achievement.description);
        let _ = writeln!(out, "{}", if achievement.earned { line } else { theme.dim(&line) });
    }

    let _ = writeln!(out, "\n{}", theme.bold("Personalized Recommendations"));
    for tip in &fixtures.recommendations {
        let _ = writeln!(out, "  {}\n    {}", tip.title, theme.dim(&tip.description));
    }
    out
}

pub fn render_goals(goals: &GoalsController, theme: &Theme) -> String {
    let mut out = String::new();
    let (done, total) = goals.habits_done();
    let _ = writeln!(out, "{} ({}/{})", theme.bold("Daily Habits"), done, total);
    for habit in goals.daily_habits() {
        let mark = if habit.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{}] {:<32} {} day streak", mark, habit.title, habit.streak);
    }

    let _ = writeln!(out, "\n{}", theme.bold("Weekly Goals"));
    for goal in goals.weekly_goals() {
        render_goal(&mut out, goal, theme);
    }

    let _ = writeln!(out, "\n{}", theme.bold("Monthly Goals"));
    for goal in goals.monthly_goals() {
        render_goal(&mut out, goal, theme);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::classifier::Classifier;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(75, 4), "[###-]");
        assert_eq!(progress_bar(250, 4), "[####]");
    }

    #[test]
    fn test_sentiment_badge_plain() {
        let badge = sentiment_badge(SentimentLabel::Negative, &Theme::plain());
        assert!(badge.ends_with(" negative"));
    }

    #[test]
    fn test_render_journal_without_sentiment() {
        let journal = JournalController::new(Classifier::default(), 20, Vec::new());
        let out = render_journal(&journal, true, &Theme::plain());
        assert!(out.contains("What's on your mind?"));
        assert!(!out.contains("Sentiment Analysis"));
        assert!(out.contains("0 words, 0 characters"));
    }

    #[test]
    fn test_render_journal_with_feedback() {
        let mut journal = JournalController::new(Classifier::default(), 20, Vec::new());
        journal.text_changed("Today was amazing and wonderful".to_string());
        let out = render_journal(&journal, true, &Theme::plain());
        assert!(out.contains("positive"));
        assert!(out.contains("Sentiment Analysis"));
        assert!(out.contains("Keep nurturing these feelings."));
        assert!(out.contains("5 words, 31 characters"));

        let quiet = render_journal(&journal, false, &Theme::plain());
        assert!(quiet.contains("positive"));
        assert!(!quiet.contains("Sentiment Analysis"));
    }

    #[test]
    fn test_render_toast() {
        let toast = Toast::destructive("Please enter a goal", "Goal title cannot be empty.");
        assert_eq!(
            render_toast(&toast, &Theme::plain()),
            "Please enter a goal\n  Goal title cannot be empty."
        );
    }

    #[test]
    fn test_render_navigation_marks_active() {
        let out = render_navigation(Tab::Analytics, &Theme::plain());
        assert!(out.contains("[Insights]"));
        assert!(out.starts_with("Home"));
    }

    #[test]
    fn test_render_prompts_numbered() {
        let out = render_prompts(&Fixtures::default().writing_prompts);
        assert!(out.contains("  1. What am I most grateful for today?"));
        assert!(out.contains("  5. What would I tell my younger self?"));
    }

    #[test]
    fn test_render_screens_include_fixture_data() {
        let fixtures = Fixtures::default();
        let theme = Theme::plain();
        assert!(render_dashboard(&fixtures, &theme).contains("Get 8 hours of sleep (done)"));
        assert!(render_insights(&fixtures, &theme).contains("Social Butterfly"));
        assert!(render_recent_entries(&fixtures, &theme).contains("Yesterday, 8:15 PM"));

        let goals = GoalsController::new(
            fixtures.weekly_goals.clone(),
            fixtures.daily_habits.clone(),
            fixtures.monthly_goals.clone(),
        );
        let out = render_goals(&goals, &theme);
        assert!(out.contains("Daily Habits (3/5)"));
        assert!(out.contains("3/4"));
        assert!(out.contains("due March 31"));
    }

    #[test]
    fn test_render_mood_marks_selection() {
        let fixtures = Fixtures::default();
        let mut mood = MoodController::new(
            fixtures.mood_options,
            fixtures.mood_tags,
            Classifier::default(),
            20,
        );
        mood.select_mood("Tired");
        mood.toggle_tag("Sleep");
        let out = render_mood(&mood, &Theme::plain());
        assert!(out.contains("> \u{1f634} Tired"));
        assert!(out.contains("Intensity 5/10"));
        assert!(out.contains("[Sleep]"));
    }
}
