//! Search input panel.
//!
//! Every edit is pushed into the view immediately, so the table below
//! narrows as the user types and the page returns to 1.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ViewEffect};
use crate::ui::{components::component::Component, theme::theme_helpers as th};

#[derive(Debug, Default)]
pub struct SearchComponent;

impl Component for SearchComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<ViewEffect> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.search.focused = false,
            KeyCode::Char(character)
                if (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) && !character.is_control() =>
            {
                app.search.input.insert_char(character);
                app.apply_search();
            }
            KeyCode::Backspace => {
                app.search.input.backspace();
                app.apply_search();
            }
            KeyCode::Delete => {
                app.search.input.delete();
                app.apply_search();
            }
            KeyCode::Left => app.search.input.move_left(),
            KeyCode::Right => app.search.input.move_right(),
            KeyCode::Home => app.search.input.move_home(),
            KeyCode::End => app.search.input.move_end(),
            _ => {}
        }
        Vec::new()
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("Enter/Esc", " done  "), ("Ctrl-C", " quit")])
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.search.focused;
        let block = th::block(theme, None, focused).title(Span::styled(
            "Search",
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(rect);
        let query = app.search.input.input();
        let line = if query.is_empty() && !focused {
            Line::from(Span::styled("Press / to search", theme.text_muted_style()))
        } else {
            Line::from(Span::styled(query.to_string(), theme.text_primary_style()))
        };
        frame.render_widget(Paragraph::new(line).block(block), rect);

        if focused {
            let cursor_x = inner.x.saturating_add(app.search.input.cursor_columns() as u16);
            frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}
