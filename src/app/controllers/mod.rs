//! Controllers layer - per-screen view state.
//!
//! Each controller owns the local state of one interactive screen and
//! exposes the transitions the UI can trigger:
//! - Journal editor with live sentiment
//! - Mood check-in form
//! - Goals and habits

pub mod goals;
pub mod journal;
pub mod mood;
