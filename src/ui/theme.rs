use crate::app::domain::feedback::ColorToken;
use crate::app::domain::toast::ToastVariant;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Terminal styling. With `enabled` false every helper returns its input
/// unchanged, so output stays plain when piped or when `NO_COLOR` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn rgb(&self, text: &str, (r, g, b): (u8, u8, u8)) -> String {
        if self.enabled {
            format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn token(&self, text: &str, color: ColorToken) -> String {
        self.rgb(text, color.to_rgb())
    }

    pub fn bold(&self, text: &str) -> String {
        self.wrap(BOLD, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.wrap(DIM, text)
    }

    pub fn toast(&self, text: &str, variant: ToastVariant) -> String {
        match variant {
            ToastVariant::Default => self.rgb(text, (60, 170, 80)),
            ToastVariant::Destructive => self.rgb(text, (220, 60, 60)),
        }
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}
