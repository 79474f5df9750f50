//! Theme styling module for the TUI UI layer.
//!
//! Defines the Dracula palette (plus a high-contrast variant), an ANSI
//! 256-color fallback, semantic theme roles, and helper builders for Ratatui
//! widgets and styles. Prefer these helpers over hard-coding colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use roles::{Theme, ThemeRoles};

const THEME_ENV: &str = "TABVIEW_THEME";
const COLOR_MODE_ENV: &str = "TUI_COLOR_MODE";

/// Palettes that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThemeKind {
    Dracula,
    DraculaHighContrast,
    Ansi256,
}

impl ThemeKind {
    /// Resolves a user-supplied theme name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dracula" => Some(Self::Dracula),
            "dracula-hc" | "dracula-high-contrast" | "high-contrast" => Some(Self::DraculaHighContrast),
            "ansi" | "ansi256" => Some(Self::Ansi256),
            _ => None,
        }
    }

    pub fn build(self) -> Box<dyn Theme> {
        match self {
            Self::Dracula => Box::new(DraculaTheme::new()),
            Self::DraculaHighContrast => Box::new(DraculaThemeHighContrast::new()),
            Self::Ansi256 => Box::new(Ansi256Theme::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the environment and terminal capabilities.
pub(crate) fn load() -> Box<dyn Theme> {
    let kind = select_theme(
        env::var(THEME_ENV).ok().as_deref(),
        env::var(COLOR_MODE_ENV).ok().as_deref(),
        &env::var("COLORTERM").unwrap_or_default(),
        &env::var("TERM").unwrap_or_default(),
    );
    debug!(?kind, "Theme selected");
    kind.build()
}

/// ANSI-only terminals always get the indexed palette; otherwise a named
/// theme wins over the default Dracula palette.
fn select_theme(theme_name: Option<&str>, color_mode: Option<&str>, color_term: &str, term: &str) -> ThemeKind {
    if detect_color_capability(color_mode, color_term, term) == ColorCapability::Ansi256 {
        return ThemeKind::Ansi256;
    }
    theme_name.and_then(ThemeKind::from_name).unwrap_or(ThemeKind::Dracula)
}

fn detect_color_capability(color_mode: Option<&str>, color_term: &str, term: &str) -> ColorCapability {
    if let Some(mode) = color_mode.and_then(parse_color_mode) {
        return mode;
    }

    let color_term = color_term.to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    if term.to_ascii_lowercase().contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
