use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::navigation::Tab;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::classifier::Classifier;
use crate::app::services::lexicon::Lexicon;

/// How marker words are found in journal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchMode {
    /// Marker may occur anywhere, including inside a longer word
    #[default]
    Substring,
    /// Marker must be a whole word
    WordBoundary,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::WordBoundary => "word_boundary",
        }
    }

    pub fn from_str(s: &str) -> Option<MatchMode> {
        match s {
            "substring" => Some(Self::Substring),
            "word_boundary" | "word-boundary" => Some(Self::WordBoundary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Journal text must be longer than this (in UTF-16 units) before
    /// sentiment is shown
    #[serde(default = "default_sentiment_threshold")]
    pub sentiment_threshold: usize,

    #[serde(default)]
    pub match_mode: MatchMode,

    #[serde(default)]
    pub extra_positive_words: Vec<String>,

    #[serde(default)]
    pub extra_negative_words: Vec<String>,

    #[serde(default = "default_show_feedback")]
    pub show_feedback: bool,

    #[serde(default)]
    pub start_tab: Tab,

    /// TOML file with seed data; built-in demo data when unset
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

fn default_sentiment_threshold() -> usize {
    20
}

fn default_show_feedback() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sentiment_threshold: default_sentiment_threshold(),
            match_mode: MatchMode::Substring,
            extra_positive_words: Vec::new(),
            extra_negative_words: Vec::new(),
            show_feedback: default_show_feedback(),
            start_tab: Tab::Dashboard,
            fixtures_path: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        match Self::load_from(&config_path) {
            Some(settings) => settings,
            None => {
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save() {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Read settings from `path`. Returns `None` if the file does not exist.
    /// A file that fails to parse, or whose word lists cannot form a
    /// lexicon, yields defaults.
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        let settings: Self = match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                return Some(Self::default());
            }
        };
        match settings.build_classifier() {
            Ok(_) => Some(settings),
            Err(e) => {
                tracing::warn!("Invalid settings in {}: {}. Using defaults.", path.display(), e);
                Some(Self::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("moodpad");
        path.push("settings.json");
        path
    }

    /// Update one setting from its textual form, as typed on the command line.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sentiment_threshold" => {
                self.sentiment_threshold = value.parse().map_err(|_| {
                    AppError::Settings(format!("'{}' is not a valid threshold", value))
                })?;
            }
            "match_mode" => {
                self.match_mode = MatchMode::from_str(value).ok_or_else(|| {
                    AppError::Settings(format!(
                        "unknown match mode '{}' (expected substring or word_boundary)",
                        value
                    ))
                })?;
            }
            "show_feedback" => {
                self.show_feedback = value.parse().map_err(|_| {
                    AppError::Settings(format!("'{}' is not true or false", value))
                })?;
            }
            "start_tab" => {
                self.start_tab = Tab::from_id(value)
                    .ok_or_else(|| AppError::Settings(format!("unknown tab '{}'", value)))?;
            }
            "fixtures_path" => {
                self.fixtures_path = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "extra_positive_words" => self.extra_positive_words = split_words(value),
            "extra_negative_words" => self.extra_negative_words = split_words(value),
            _ => return Err(AppError::Settings(format!("unknown setting '{}'", key))),
        }
        Ok(())
    }

    /// Classifier for the configured lexicon and match mode.
    pub fn build_classifier(&self) -> Result<Classifier> {
        let lexicon = if self.extra_positive_words.is_empty()
            && self.extra_negative_words.is_empty()
        {
            Lexicon::default()
        } else {
            Lexicon::with_extra_words(&self.extra_positive_words, &self.extra_negative_words)?
        };
        Ok(Classifier::new(lexicon, self.match_mode))
    }
}

fn split_words(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::sentiment::SentimentLabel;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.sentiment_threshold, 20);
        assert_eq!(settings.match_mode, MatchMode::Substring);
        assert!(settings.extra_positive_words.is_empty());
        assert!(settings.extra_negative_words.is_empty());
        assert!(settings.show_feedback);
        assert_eq!(settings.start_tab, Tab::Dashboard);
        assert!(settings.fixtures_path.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"sentiment_threshold": 40}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.sentiment_threshold, 40);
        assert!(settings.show_feedback);
        assert_eq!(settings.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_match_mode_serialization() {
        let settings = AppSettings {
            match_mode: MatchMode::WordBoundary,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"WordBoundary\""));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            sentiment_threshold: 5,
            extra_positive_words: vec!["proud".to_string()],
            start_tab: Tab::Journal,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppSettings::load_from(&dir.path().join("absent.json")).is_none());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), Some(AppSettings::default()));
    }

    #[test]
    fn test_load_conflicting_words_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"extra_positive_words": ["sad"], "sentiment_threshold": 3}"#).unwrap();
        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, AppSettings::default());
        assert!(loaded.build_classifier().is_ok());
    }

    #[test]
    fn test_match_mode_names() {
        for mode in [MatchMode::Substring, MatchMode::WordBoundary] {
            assert_eq!(MatchMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(MatchMode::from_str("word-boundary"), Some(MatchMode::WordBoundary));
        assert_eq!(MatchMode::from_str("fuzzy"), None);
    }

    #[test]
    fn test_set_value() {
        let mut settings = AppSettings::default();
        settings.set_value("sentiment_threshold", "12").unwrap();
        settings.set_value("match_mode", "word_boundary").unwrap();
        settings.set_value("show_feedback", "false").unwrap();
        settings.set_value("start_tab", "goals").unwrap();
        settings.set_value("extra_negative_words", "lonely, tired,,").unwrap();
        assert_eq!(settings.sentiment_threshold, 12);
        assert_eq!(settings.match_mode, MatchMode::WordBoundary);
        assert!(!settings.show_feedback);
        assert_eq!(settings.start_tab, Tab::Goals);
        assert_eq!(settings.extra_negative_words, vec!["lonely", "tired"]);

        settings.set_value("fixtures_path", "").unwrap();
        assert!(settings.fixtures_path.is_none());
    }

    #[test]
    fn test_set_value_errors() {
        let mut settings = AppSettings::default();
        let err = settings.set_value("sentiment_threshold", "-1").unwrap_err();
        assert!(matches!(err, AppError::Settings(_)));
        assert!(settings.set_value("match_mode", "fuzzy").is_err());
        assert!(settings.set_value("font_size", "12").is_err());
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_build_classifier_with_extra_words() {
        let settings = AppSettings {
            extra_negative_words: vec!["lonely".to_string()],
            ..Default::default()
        };
        let classifier = settings.build_classifier().unwrap();
        assert_eq!(classifier.classify("a bit lonely"), SentimentLabel::Negative);
    }

    #[test]
    fn test_build_classifier_rejects_conflicting_words() {
        let settings = AppSettings {
            extra_positive_words: vec!["worried".to_string()],
            ..Default::default()
        };
        assert!(matches!(settings.build_classifier(), Err(AppError::Lexicon(_))));
    }
}
