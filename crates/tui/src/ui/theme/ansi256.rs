//! Indexed-color palette for terminals without truecolor support.
//!
//! Approximates the Dracula colors with the nearest xterm-256 entries.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        let gray = Color::Indexed(239);
        let sky = Color::Indexed(117);
        Self {
            roles: ThemeRoles {
                surface: Color::Indexed(236),
                header_bg: gray,
                border: gray,
                focus: sky,
                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(247),
                accent: Color::Indexed(212),
                control: sky,
                status: Color::Indexed(84),
                selection_bg: gray,
                selection_fg: Color::Indexed(255),
                row_even: Color::Indexed(235),
                row_odd: Color::Indexed(237),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
