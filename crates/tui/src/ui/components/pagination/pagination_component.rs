use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};
use tabview_engine::PageWindow;

use crate::app::{App, ViewEffect};
use crate::ui::{components::component::Component, theme::theme_helpers as th};

/// Page navigation controls.
///
/// Renders First/Prev/Next/Last buttons around the range label
/// ("Showing 11–20 of 23") and the page counter. Buttons that cannot move
/// the page are drawn disabled: Prev and First on page 1, Next and Last on
/// the last page.
#[derive(Debug, Default)]
pub struct PaginationComponent;

impl PaginationComponent {
    fn render_page_info(&self, frame: &mut Frame, area: Rect, app: &App, window: &PageWindow) {
        let theme = &*app.ctx.theme;
        let line = Line::from(vec![
            Span::styled(window.range_label().to_string(), theme.text_primary_style()),
            Span::styled(format!("  ·  {}", page_info(window)), theme.text_muted_style()),
        ]);
        let info = Paragraph::new(line).alignment(Alignment::Center);
        // Vertically center within the button row.
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1.min(area.height),
            ..area
        };
        frame.render_widget(info, middle);
    }
}

impl Component for PaginationComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<ViewEffect> {
        let before = app.view.state().current_page();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => app.view.prev_page(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => app.view.next_page(),
            KeyCode::Home => app.view.first_page(),
            KeyCode::End => app.view.last_page(),
            _ => {}
        }
        if app.view.state().current_page() != before {
            app.cursor.row = 0;
        }
        Vec::new()
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("←/→", " page  "), ("Home/End", " first/last  ")])
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let window = app.view.window();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9), // First
                Constraint::Length(8), // Prev
                Constraint::Min(0),    // Range label + page info
                Constraint::Length(8), // Next
                Constraint::Length(8), // Last
            ])
            .split(area);

        let theme = &*app.ctx.theme;
        th::render_button(frame, chunks[0], "First", window.has_prev(), false, theme);
        th::render_button(frame, chunks[1], "Prev", window.has_prev(), false, theme);
        self.render_page_info(frame, chunks[2], app, &window);
        th::render_button(frame, chunks[3], "Next", window.has_next(), false, theme);
        th::render_button(frame, chunks[4], "Last", window.has_next(), false, theme);
    }
}

fn page_info(window: &PageWindow) -> String {
    format!("Page {} of {}", window.page, window.max_page)
}
