//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Sentiment labels and scores
//! - Feedback mapping for display
//! - Application settings and seed fixtures
//! - Message types for the event system

pub mod entry;
pub mod feedback;
pub mod fixtures;
pub mod messages;
pub mod navigation;
pub mod sentiment;
pub mod settings;
pub mod toast;

pub use entry::{MoodCheckIn, SavedEntry};
pub use feedback::{ColorToken, Feedback, IconToken, feedback_for};
pub use fixtures::Fixtures;
pub use messages::Message;
pub use navigation::Tab;
pub use sentiment::{SentimentLabel, SentimentScore};
pub use settings::{AppSettings, MatchMode};
pub use toast::{Toast, ToastVariant};
