//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (labels, feedback, settings, fixtures, messages)
//! - `controllers/` - Per-screen view state (journal, mood, goals)
//! - `services/` - Business operations (lexicon, classifier, text_ops)
//! - `infrastructure/` - Error type, logging setup, platform helpers
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{
    AppSettings, Feedback, Fixtures, MatchMode, Message, SentimentLabel, Tab, Toast, feedback_for,
};
pub use infrastructure::error::{AppError, Result};
pub use services::classifier::{Classifier, classify};
pub use services::lexicon::Lexicon;
pub use state::AppState;
