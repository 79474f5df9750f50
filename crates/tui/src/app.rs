//! Application state for the terminal surface.
//!
//! `App` owns the [`TabularView`] plus the purely presentational state the
//! engine does not care about: the search buffer, the header cursor, the row
//! selection within the current page, and the status line. Components read
//! and mutate it; the runtime owns it.

use tabview_engine::TabularView;
use tabview_types::{Record, RowAction};
use tabview_util::cell_text;
use tracing::info;

use crate::ui::components::common::TextInputState;
use crate::ui::theme::Theme;

/// Side effects reported by components to the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEffect {
    /// A row action was invoked on the selected record of the current page.
    RowAction { action: RowAction, record: Record },
    Quit,
}

/// Shared, read-mostly context handed to every component.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
}

/// The search box and whether it has focus.
#[derive(Debug, Default)]
pub struct SearchState {
    pub input: TextInputState,
    pub focused: bool,
}

/// Cursor positions inside the table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableCursor {
    /// Column index the header cursor sits on.
    pub header: usize,
    /// Row index within the current page.
    pub row: usize,
}

#[derive(Debug)]
pub struct App {
    pub view: TabularView,
    pub ctx: SharedCtx,
    pub search: SearchState,
    pub cursor: TableCursor,
    /// Last row action, shown under the table.
    pub status: Option<String>,
}

impl App {
    pub fn new(view: TabularView, theme: Box<dyn Theme>) -> Self {
        let mut search = SearchState::default();
        search.input.set_input(view.state().search_term());
        Self {
            view,
            ctx: SharedCtx { theme },
            search,
            cursor: TableCursor::default(),
            status: None,
        }
    }

    /// Pushes the search buffer into the view.
    pub fn apply_search(&mut self) {
        if self.view.set_search(self.search.input.input()) {
            self.cursor.row = 0;
        }
    }

    /// Keeps the row selection inside the current page.
    pub fn clamp_selection(&mut self) {
        let rows = self.view.window().len();
        self.cursor.row = self.cursor.row.min(rows.saturating_sub(1));
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.view.page_records().get(self.cursor.row).copied()
    }

    pub fn move_selection(&mut self, down: bool) {
        let rows = self.view.window().len();
        if rows == 0 {
            self.cursor.row = 0;
            return;
        }
        self.cursor.row = if down {
            (self.cursor.row + 1).min(rows - 1)
        } else {
            self.cursor.row.saturating_sub(1)
        };
    }

    /// Cycles the header cursor over the columns.
    pub fn move_header_cursor(&mut self, forward: bool) {
        let count = self.view.columns().len();
        if count == 0 {
            return;
        }
        self.cursor.header = if forward {
            (self.cursor.header + 1) % count
        } else {
            (self.cursor.header + count - 1) % count
        };
    }

    /// Looks up the configured row action bound to `hotkey`.
    pub fn row_action_for(&self, hotkey: char) -> Option<&RowAction> {
        self.view.config().row_actions.iter().find(|action| action.hotkey == hotkey)
    }

    /// Records an invoked row action in the status line.
    pub fn record_row_action(&mut self, action: &RowAction, record: &Record) {
        let summary = self
            .view
            .columns()
            .first()
            .map(|column| cell_text(column, record))
            .unwrap_or_default();
        info!(action = %action.label, row = %summary, "Row action invoked");
        self.status = Some(format!("{} → {}", action.label, summary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;
    use serde_json::json;
    use tabview_types::{ViewConfig, records_from_json};

    fn app_with(count: usize) -> App {
        let rows: Vec<_> = (1..=count).map(|n| json!({"id": n})).collect();
        let records = records_from_json(json!(rows)).unwrap();
        let view = TabularView::with_inferred_columns(records, ViewConfig::default().with_page_size(3));
        App::new(view, Box::new(DraculaTheme::new()))
    }

    #[test]
    fn selection_stays_within_the_page() {
        let mut app = app_with(4);
        for _ in 0..5 {
            app.move_selection(true);
        }
        assert_eq!(app.cursor.row, 2);
        app.view.next_page();
        app.clamp_selection();
        assert_eq!(app.cursor.row, 0);
        assert_eq!(app.selected_record().and_then(|r| r.get("id")), Some(&json!(4)));
    }

    #[test]
    fn header_cursor_wraps() {
        let mut app = app_with(1);
        app.move_header_cursor(false);
        assert_eq!(app.cursor.header, 0);
    }

    #[test]
    fn row_action_updates_status() {
        let mut app = app_with(2);
        let record = app.selected_record().cloned().unwrap();
        app.record_row_action(&RowAction::new("Open", '1'), &record);
        assert_eq!(app.status.as_deref(), Some("Open → 1"));
    }
}
