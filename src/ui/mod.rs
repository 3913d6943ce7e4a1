//! Terminal front-end: styling and per-screen text views.

pub mod theme;
pub mod views;
