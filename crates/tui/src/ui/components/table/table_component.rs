//! Table body: sortable headers, the current page of rows, and the
//! empty-state placeholder.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Modifier,
    text::Span,
    widgets::{Cell, Paragraph, Row, Table},
};
use tabview_engine::{HeaderView, ViewSnapshot};
use tabview_types::RowAction;
use tabview_util::cell_text;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ViewEffect};
use crate::ui::{
    components::component::Component,
    theme::{roles::Theme as UiTheme, theme_helpers as th},
};

/// Widest a data column may grow before its text is cut off.
const MAX_COLUMN_WIDTH: usize = 40;

#[derive(Debug, Default)]
pub struct TableComponent;

impl TableComponent {
    fn render_table(&self, frame: &mut Frame, area: Rect, app: &App, snapshot: &ViewSnapshot<'_>) {
        let theme = &*app.ctx.theme;
        let header_cells: Vec<String> = snapshot.headers.iter().map(header_text).collect();
        let body: Vec<Vec<String>> = snapshot
            .rows
            .iter()
            .map(|record| {
                let mut cells: Vec<String> = snapshot.headers.iter().map(|header| cell_text(header.column, record)).collect();
                if !snapshot.row_actions.is_empty() {
                    cells.push(actions_text(snapshot.row_actions));
                }
                cells
            })
            .collect();

        let mut headers: Vec<Cell> = header_cells
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mut style = th::table_header_style(theme);
                if index == app.cursor.header {
                    style = theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED);
                }
                Cell::from(text.clone()).style(style)
            })
            .collect();
        let mut header_widths: Vec<usize> = header_cells.iter().map(|text| text.width()).collect();
        if !snapshot.row_actions.is_empty() {
            headers.push(Cell::from("Actions").style(th::table_header_style(theme)));
            header_widths.push("Actions".width());
        }

        let rows: Vec<Row> = body
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                let style = if index == app.cursor.row {
                    th::table_selected_style(theme)
                } else {
                    th::table_row_style(theme, index)
                };
                Row::new(cells.iter().map(|text| Cell::from(text.clone()))).style(style)
            })
            .collect();

        let table = Table::new(rows, column_widths(&header_widths, &body))
            .header(Row::new(headers).style(th::table_header_row_style(theme)))
            .column_spacing(1)
            .style(th::panel_style(theme));
        frame.render_widget(table, area);

        if snapshot.is_empty {
            render_empty_placeholder(frame, area, snapshot.empty_message, theme);
        }
    }
}

impl Component for TableComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<ViewEffect> {
        match key.code {
            KeyCode::Tab => app.move_header_cursor(true),
            KeyCode::BackTab => app.move_header_cursor(false),
            KeyCode::Char('s') | KeyCode::Enter => {
                if app.view.select_header(app.cursor.header) {
                    app.clamp_selection();
                }
            }
            KeyCode::Up => app.move_selection(false),
            KeyCode::Down => app.move_selection(true),
            KeyCode::Char(hotkey) => {
                let action = app.row_action_for(hotkey).cloned();
                if let (Some(action), Some(record)) = (action, app.selected_record().cloned()) {
                    return vec![ViewEffect::RowAction { action, record }];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hints = vec![("Tab", " column  "), ("s", " sort  "), ("↑/↓", " row  ")];
        if !app.view.config().row_actions.is_empty() {
            hints.push(("1-9", " action  "));
        }
        th::build_hint_spans(&*app.ctx.theme, &hints)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let snapshot = app.view.snapshot();
        self.render_table(frame, rect, app, &snapshot);
    }
}

/// Header label with its sort affordance (`↕`, `▲` or `▼`).
fn header_text(header: &HeaderView<'_>) -> String {
    let indicator = header.sort.indicator();
    if indicator.is_empty() {
        header.column.label.clone()
    } else {
        format!("{} {}", header.column.label, indicator)
    }
}

fn actions_text(actions: &[RowAction]) -> String {
    actions
        .iter()
        .map(|action| format!("[{}] {}", action.hotkey, action.label))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sizes every column to its widest header or cell, capped at
/// [`MAX_COLUMN_WIDTH`].
fn column_widths(header_widths: &[usize], body: &[Vec<String>]) -> Vec<Constraint> {
    header_widths
        .iter()
        .enumerate()
        .map(|(index, header_width)| {
            let widest = body
                .iter()
                .filter_map(|cells| cells.get(index))
                .map(|text| text.width())
                .fold(*header_width, usize::max);
            Constraint::Length(widest.clamp(1, MAX_COLUMN_WIDTH) as u16)
        })
        .collect()
}

fn render_empty_placeholder(frame: &mut Frame, area: Rect, message: &str, theme: &dyn UiTheme) {
    // Leave the header row visible.
    let body = Rect {
        y: area.y.saturating_add(2).min(area.bottom()),
        height: area.height.saturating_sub(2),
        ..area
    };
    let placeholder = Paragraph::new(message.to_string()).centered().style(theme.text_muted_style());
    frame.render_widget(placeholder, body);
}
