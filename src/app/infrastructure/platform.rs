use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

/// Get current Unix timestamp
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Whether terminal output should carry ANSI colors.
///
/// Honors `NO_COLOR` (any non-empty value disables color) and falls back to
/// plain text when stdout is not a terminal.
pub fn detect_color_support() -> bool {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}
