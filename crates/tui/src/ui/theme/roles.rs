use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Colors the viewer paints with, named by where they appear.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Panel and table background.
    pub surface: Color,
    /// Header row background.
    pub header_bg: Color,
    pub border: Color,
    /// Border of the focused panel.
    pub focus: Color,

    pub text: Color,
    pub text_secondary: Color,
    /// Hints, placeholders and disabled controls.
    pub text_muted: Color,

    /// Key hints and the header cursor.
    pub accent: Color,
    /// Enabled pagination controls.
    pub control: Color,
    /// Status line after a row action.
    pub status: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,

    pub row_even: Color,
    pub row_odd: Color,
}

/// A palette plus the styles derived from it.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if focused { roles.focus } else { roles.border })
    }

    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    fn status_line_style(&self) -> Style {
        Style::default().fg(self.roles().status)
    }

    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent).add_modifier(Modifier::BOLD)
    }
}
