//! Root view: lays out the search panel, the table, the pagination row, the
//! status line and the hint bar, and routes keys to whichever child owns
//! them.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ViewEffect};
use crate::ui::components::{PaginationComponent, SearchComponent, TableComponent, component::Component};
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct MainView {
    search: SearchComponent,
    table: TableComponent,
    pagination: PaginationComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let line = match app.status.as_deref() {
            Some(status) => Line::from(Span::styled(status.to_string(), theme.status_line_style())),
            None => Line::default(),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, app: &App) {
        let spans = self.get_hint_spans(app);
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<ViewEffect> {
        if app.search.focused {
            return self.search.handle_key_events(app, key);
        }
        match key.code {
            KeyCode::Char('/') => {
                app.search.focused = true;
                Vec::new()
            }
            KeyCode::Char('q') | KeyCode::Esc => vec![ViewEffect::Quit],
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => self.pagination.handle_key_events(app, key),
            _ => self.table.handle_key_events(app, key),
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        if app.search.focused {
            return self.search.get_hint_spans(app);
        }
        let theme = &*app.ctx.theme;
        let mut spans = th::build_hint_spans(theme, &[("/", " search  ")]);
        spans.extend(self.table.get_hint_spans(app));
        spans.extend(self.pagination.get_hint_spans(app));
        spans.extend(th::build_hint_spans(theme, &[("q", " quit")]));
        spans
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let title = app.view.config().title.clone();
        let outer = th::block(&*app.ctx.theme, (!title.is_empty()).then_some(title.as_str()), false);
        let inner = outer.inner(rect);
        frame.render_widget(outer, rect);

        let [search_area, table_area, pagination_area, status_area, hints_area] = Layout::vertical([
            Constraint::Length(3), // Search
            Constraint::Min(3),    // Table
            Constraint::Length(3), // Pagination
            Constraint::Length(1), // Status
            Constraint::Length(1), // Hints
        ])
        .areas(inner);

        self.search.render(frame, search_area, app);
        self.table.render(frame, table_area, app);
        self.pagination.render(frame, pagination_area, app);
        self.render_status(frame, status_area, app);
        self.render_hints(frame, hints_area, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{DraculaTheme, dracula};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;
    use tabview_engine::TabularView;
    use tabview_types::{ViewConfig, records_from_json};

    fn ledger_app(count: usize) -> App {
        let rows: Vec<_> = (1..=count).map(|n| json!({"id": n, "name": format!("payee {n}")})).collect();
        let records = records_from_json(json!(rows)).unwrap();
        let view = TabularView::with_inferred_columns(records, ViewConfig::default().with_title("Ledger"));
        App::new(view, Box::new(DraculaTheme::new()))
    }

    fn draw(app: &mut App, main_view: &mut MainView) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| main_view.render(frame, frame.area(), app)).unwrap();
        terminal
    }

    fn lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        lines(terminal).join("\n")
    }

    /// Cell coordinates of the first occurrence of `needle`.
    fn find(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
        lines(terminal).iter().enumerate().find_map(|(y, line)| {
            line.find(needle)
                .map(|byte| (line[..byte].chars().count() as u16, y as u16))
        })
    }

    fn press(app: &mut App, main_view: &mut MainView, code: KeyCode) -> Vec<ViewEffect> {
        main_view.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn renders_title_headers_rows_and_range() {
        let mut app = ledger_app(23);
        let mut main_view = MainView::new();
        let terminal = draw(&mut app, &mut main_view);
        let text = screen(&terminal);
        assert!(text.contains("Ledger"));
        assert!(text.contains("ID ↕"));
        assert!(text.contains("Name ↕"));
        assert!(text.contains("payee 10"));
        assert!(!text.contains("payee 11"));
        assert!(text.contains("Showing 1–10 of 23"));
        assert!(text.contains("Page 1 of 3"));
    }

    #[test]
    fn previous_is_disabled_on_the_first_page_and_next_on_the_last() {
        let mut app = ledger_app(23);
        let mut main_view = MainView::new();

        let terminal = draw(&mut app, &mut main_view);
        let (x, y) = find(&terminal, "Prev").unwrap();
        assert_eq!(terminal.backend().buffer()[(x, y)].fg, dracula::COMMENT);
        let (x, y) = find(&terminal, "Next").unwrap();
        assert_eq!(terminal.backend().buffer()[(x, y)].fg, dracula::CYAN);

        press(&mut app, &mut main_view, KeyCode::End);
        let terminal = draw(&mut app, &mut main_view);
        assert!(screen(&terminal).contains("Showing 21–23 of 23"));
        let (x, y) = find(&terminal, "Next").unwrap();
        assert_eq!(terminal.backend().buffer()[(x, y)].fg, dracula::COMMENT);
        let (x, y) = find(&terminal, "Prev").unwrap();
        assert_eq!(terminal.backend().buffer()[(x, y)].fg, dracula::CYAN);
    }

    #[test]
    fn sort_key_flips_the_header_indicator() {
        let mut app = ledger_app(3);
        let mut main_view = MainView::new();
        press(&mut app, &mut main_view, KeyCode::Char('s'));
        assert!(screen(&draw(&mut app, &mut main_view)).contains("ID ▲"));
        press(&mut app, &mut main_view, KeyCode::Char('s'));
        let text = screen(&draw(&mut app, &mut main_view));
        assert!(text.contains("ID ▼"));
        assert!(text.contains("Name ↕"));
    }

    #[test]
    fn empty_search_shows_placeholder() {
        let mut app = ledger_app(5);
        let mut main_view = MainView::new();
        press(&mut app, &mut main_view, KeyCode::Char('/'));
        for c in "zzz".chars() {
            press(&mut app, &mut main_view, KeyCode::Char(c));
        }
        assert_eq!(app.view.state().search_term(), "zzz");
        let text = screen(&draw(&mut app, &mut main_view));
        assert!(text.contains(tabview_types::DEFAULT_EMPTY_MESSAGE));
        assert!(text.contains("Showing 0 of 0"));
        assert!(text.contains("Page 1 of 1"));
    }

    #[test]
    fn typing_in_search_resets_to_the_first_page() {
        let mut app = ledger_app(23);
        let mut main_view = MainView::new();
        press(&mut app, &mut main_view, KeyCode::Right);
        press(&mut app, &mut main_view, KeyCode::Char('l'));
        assert_eq!(app.view.state().current_page(), 3);

        press(&mut app, &mut main_view, KeyCode::Char('/'));
        press(&mut app, &mut main_view, KeyCode::Char('1'));
        assert_eq!(app.view.state().current_page(), 1);
        assert!(press(&mut app, &mut main_view, KeyCode::Char('q')).is_empty());
        press(&mut app, &mut main_view, KeyCode::Esc);
        assert!(!app.search.focused);
        assert_eq!(press(&mut app, &mut main_view, KeyCode::Char('q')), vec![ViewEffect::Quit]);
    }
}
