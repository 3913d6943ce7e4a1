//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Log subscriber setup
//! - Platform helpers (clock, terminal detection)

pub mod error;
pub mod logging;
pub mod platform;
