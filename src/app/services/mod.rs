//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Marker-word lexicon
//! - Sentiment classification
//! - Text operations

pub mod classifier;
pub mod lexicon;
pub mod text_ops;
