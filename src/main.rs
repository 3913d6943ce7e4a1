use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mood_pad::app::infrastructure::logging::init_logging;
use mood_pad::app::infrastructure::platform::detect_color_support;
use mood_pad::app::{
    AppSettings, AppState, Fixtures, MatchMode, Message, Result, Tab, Toast, feedback_for,
};
use mood_pad::ui::theme::Theme;
use mood_pad::ui::views;

#[derive(Parser)]
#[command(name = "MoodPad")]
#[command(version, about = "A minimalist wellness journal with sentiment feedback")]
struct Cli {
    /// Load seed data from a TOML file instead of the built-in demo data
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Only count marker words that stand as whole words
    #[arg(long, global = true)]
    word_boundary: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify text and print the feedback for it
    Analyze {
        /// Text to classify; read from stdin when omitted
        text: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a journal entry: live sentiment, then save
    Journal {
        /// Entry text; read from stdin when omitted
        text: Option<String>,
        /// Start from writing prompt N (1-based)
        #[arg(long)]
        prompt: Option<usize>,
        /// Print the saved entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log a mood check-in
    Mood {
        /// One of the mood labels, e.g. Happy or Anxious
        mood: Option<String>,
        /// 1 (mild) to 10 (intense)
        #[arg(long, default_value_t = 5)]
        intensity: u8,
        /// Factor tag; repeat for several
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },

    /// Add a weekly goal
    AddGoal {
        title: String,
    },

    /// List writing prompts
    Prompts,

    /// Render a screen: dashboard, mood, analytics, journal, goals, settings
    Show {
        tab: Option<String>,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the settings file path and current values
    Show,
    /// Set one value and save, e.g. `set sentiment_threshold 30`
    Set { key: String, value: String },
    /// Restore defaults and save
    Reset,
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
        }
    }
}

fn build_state(cli: &Cli, mut settings: AppSettings) -> Result<AppState> {
    if cli.word_boundary {
        settings.match_mode = MatchMode::WordBoundary;
    }
    let fixtures = match &cli.fixtures {
        // An explicit --fixtures must load
        Some(path) => Fixtures::load(path)?,
        None => Fixtures::load_or_default(settings.fixtures_path.as_deref().map(Path::new)),
    };
    AppState::new(settings, fixtures)
}

fn print_toast(toast: Option<Toast>, theme: &Theme) -> bool {
    match toast {
        Some(toast) => {
            println!("{}", views::render_toast(&toast, theme));
            !toast.is_destructive()
        }
        None => true,
    }
}

fn run_settings(action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {
            println!("{}", AppSettings::get_config_path().display());
            println!("{}", serde_json::to_string_pretty(&AppSettings::load())?);
        }
        SettingsAction::Set { key, value } => {
            let mut settings = AppSettings::load();
            settings.set_value(&key, &value)?;
            // Reject settings the app could not start with
            settings.build_classifier()?;
            settings.save()?;
            println!("{} = {}", key, value);
        }
        SettingsAction::Reset => {
            AppSettings::default().save()?;
            println!("Settings reset to defaults");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<bool> {
    let theme = Theme::new(!cli.no_color && detect_color_support());
    if let Command::Settings { action } = cli.command {
        run_settings(action.unwrap_or(SettingsAction::Show))?;
        return Ok(true);
    }

    let settings = AppSettings::load();
    let mut state = build_state(&cli, settings)?;

    match cli.command {
        Command::Analyze { text, json } => {
            let text = read_input(text)?;
            let classifier = state.settings.build_classifier()?;
            let score = classifier.score(&text);
            let label = score.label();
            let feedback = feedback_for(label);
            if json {
                let value = serde_json::json!({
                    "label": label,
                    "positive": score.positive,
                    "negative": score.negative,
                    "message": feedback.message,
                    "icon": feedback.icon.as_str(),
                    "color": feedback.color.as_str(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", views::sentiment_badge(label, &theme));
                println!("  {}", feedback.message);
                let counts = format!(
                    "  {} positive, {} negative ({} match)",
                    score.positive,
                    score.negative,
                    classifier.mode().as_str()
                );
                println!("{}", theme.dim(&counts));
            }
            Ok(true)
        }

        Command::Journal { text, prompt, json } => {
            state.handle(Message::SelectTab(Tab::Journal));
            let mut body = String::new();
            if let Some(n) = prompt {
                let index = n.checked_sub(1).unwrap_or(usize::MAX);
                state.handle(Message::JournalUsePrompt(index));
                body.push_str(state.journal.text());
            }
            body.push_str(&read_input(text)?);
            state.handle(Message::JournalTextChanged(body));

            let show_feedback = state.settings.show_feedback;
            println!("{}", views::render_journal(&state.journal, show_feedback, &theme));
            let toast = state.handle(Message::JournalSave);
            if json {
                if let Some(entry) = state.saved_entries.last() {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                }
            }
            Ok(print_toast(toast, &theme))
        }

        Command::Mood { mood, intensity, tags, note } => {
            if let Some(mood) = mood {
                state.handle(Message::MoodSelected(mood));
            }
            state.handle(Message::MoodIntensityChanged(intensity));
            for tag in tags {
                state.handle(Message::MoodTagToggled(tag));
            }
            if let Some(note) = note {
                state.handle(Message::MoodNoteChanged(note));
            }
            println!("{}", views::render_mood(&state.mood, &theme));
            let toast = state.handle(Message::MoodSave);
            Ok(print_toast(toast, &theme))
        }

        Command::AddGoal { title } => {
            state.handle(Message::GoalShowAddForm);
            state.handle(Message::GoalDraftChanged(title));
            let toast = state.handle(Message::GoalAdd);
            let ok = print_toast(toast, &theme);
            if ok {
                println!("\n{}", views::render_goals(&state.goals, &theme));
            }
            Ok(ok)
        }

        Command::Prompts => {
            print!("{}", views::render_prompts(state.journal.prompts()));
            Ok(true)
        }

        Command::Show { tab } => {
            let tab = tab
                .as_deref()
                .map(Tab::from_id_or_default)
                .unwrap_or(state.settings.start_tab);
            state.handle(Message::SelectTab(tab));
            println!("{}\n", views::render_navigation(state.active_tab, &theme));
            let screen = match state.active_tab {
                Tab::Dashboard => views::render_dashboard(&state.fixtures, &theme),
                Tab::Mood => views::render_mood(&state.mood, &theme),
                Tab::Analytics => views::render_insights(&state.fixtures, &theme),
                Tab::Journal => format!(
                    "{}\n{}\n{}",
                    views::render_journal(&state.journal, state.settings.show_feedback, &theme),
                    views::render_recent_entries(&state.fixtures, &theme),
                    views::render_prompts(state.journal.prompts())
                ),
                Tab::Goals => views::render_goals(&state.goals, &theme),
                Tab::Settings => serde_json::to_string_pretty(&state.settings)?,
            };
            println!("{}", screen);
            Ok(true)
        }

        // Handled before the state is built
        Command::Settings { .. } => Ok(true),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
