use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4

pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const GREEN: Color = Color::Rgb(0x50, 0xFA, 0x7B); // #50fa7b
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #bd93f9

// Darkened background tones for zebra rows.
const ROW_EVEN: Color = Color::Rgb(0x21, 0x22, 0x2C);
const ROW_ODD: Color = Color::Rgb(0x2E, 0x30, 0x3E);

/// Default Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                surface: BG,
                header_bg: CURRENT_LINE,
                border: CURRENT_LINE,
                focus: CYAN,
                text: FOREGROUND,
                text_secondary: COMMENT,
                text_muted: COMMENT,
                accent: PINK,
                control: CYAN,
                status: GREEN,
                selection_bg: CURRENT_LINE,
                selection_fg: FOREGROUND,
                row_even: ROW_EVEN,
                row_odd: ROW_ODD,
            },
        }
    }
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Dracula: stronger borders and secondary text.
#[derive(Debug, Clone)]
pub struct DraculaThemeHighContrast {
    roles: ThemeRoles,
}

impl DraculaThemeHighContrast {
    pub fn new() -> Self {
        let mut roles = DraculaTheme::new().roles;
        roles.border = PURPLE;
        roles.text_secondary = FOREGROUND;
        roles.selection_bg = COMMENT;
        Self { roles }
    }
}

impl Theme for DraculaThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
