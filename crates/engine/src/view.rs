//! The tabular view: records + columns + state, and the derived page.
//!
//! Every mutation re-runs the derived pipeline (filter → sort → paginate)
//! before returning, so readers always observe a consistent view. The
//! filtered and sorted order is cached and only recomputed when the records,
//! the search term or the sort changes; page moves reuse it.

use tabview_types::{ColumnDescriptor, Record, RowAction, SortDirection, ViewConfig};
use tabview_util::infer_columns;
use tracing::debug;

use crate::filter::filter_indices;
use crate::paginate::{PageWindow, RangeLabel, max_page};
use crate::sort::sort_indices;
use crate::state::{ViewPhase, ViewState};

/// Sort affordance shown on a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSort {
    NotSortable,
    Unsorted,
    Ascending,
    Descending,
}

impl HeaderSort {
    /// Glyph appended to a header label.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::NotSortable => "",
            Self::Unsorted => "↕",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Render-ready header for one column.
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    pub column: &'a ColumnDescriptor,
    pub sort: HeaderSort,
}

/// Everything the control/render surface needs for one frame.
#[derive(Debug, Clone)]
pub struct ViewSnapshot<'a> {
    pub title: &'a str,
    pub search_term: &'a str,
    pub headers: Vec<HeaderView<'a>>,
    /// Rows of the current page, in display order.
    pub rows: Vec<&'a Record>,
    pub window: PageWindow,
    pub range_label: RangeLabel,
    pub can_prev: bool,
    pub can_next: bool,
    /// True when the filtered collection has no rows.
    pub is_empty: bool,
    pub empty_message: &'a str,
    pub row_actions: &'a [RowAction],
    pub phase: ViewPhase,
}

/// Inputs the cached order depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PipelineKey {
    generation: u64,
    search_term: String,
    sort_key: Option<String>,
    sort_direction: SortDirection,
}

/// A filtered, sorted, paginated view over an in-memory record collection.
#[derive(Debug, Clone)]
pub struct TabularView {
    records: Vec<Record>,
    /// Bumped whenever `records` is replaced.
    generation: u64,
    columns: Vec<ColumnDescriptor>,
    config: ViewConfig,
    state: ViewState,
    /// Indices into `records` after filtering and sorting.
    order: Vec<usize>,
    order_key: Option<PipelineKey>,
}

impl TabularView {
    /// Creates a view with default state (page 1, no sort, empty search).
    pub fn new(records: Vec<Record>, columns: Vec<ColumnDescriptor>, config: ViewConfig) -> Self {
        let config = ViewConfig {
            page_size: config.page_size.max(1),
            ..config
        };
        let mut view = Self {
            records,
            generation: 0,
            columns,
            config,
            state: ViewState::new(),
            order: Vec::new(),
            order_key: None,
        };
        view.refresh();
        view
    }

    /// Creates a view whose columns are inferred from the records.
    pub fn with_inferred_columns(records: Vec<Record>, config: ViewConfig) -> Self {
        let columns = infer_columns(&records);
        Self::new(records, columns, config)
    }

    // Selectors
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Number of records after filtering.
    pub fn filtered_len(&self) -> usize {
        self.order.len()
    }

    pub fn max_page(&self) -> usize {
        max_page(self.order.len(), self.config.page_size)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.state.current_page(), self.config.page_size, self.order.len())
    }

    /// All filtered records in sorted order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().map(|&idx| &self.records[idx])
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Vec<&Record> {
        self.window()
            .slice(&self.order)
            .iter()
            .map(|&idx| &self.records[idx])
            .collect()
    }

    pub fn header_sort(&self, column: &ColumnDescriptor) -> HeaderSort {
        if !column.sortable {
            return HeaderSort::NotSortable;
        }
        match self.state.sort_key() {
            Some(key) if key == column.key => match self.state.sort_direction() {
                SortDirection::Asc => HeaderSort::Ascending,
                SortDirection::Desc => HeaderSort::Descending,
            },
            _ => HeaderSort::Unsorted,
        }
    }

    /// Derives the render-ready snapshot for the current state.
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        let window = self.window();
        ViewSnapshot {
            title: &self.config.title,
            search_term: self.state.search_term(),
            headers: self
                .columns
                .iter()
                .map(|column| HeaderView {
                    column,
                    sort: self.header_sort(column),
                })
                .collect(),
            rows: self.page_records(),
            window,
            range_label: window.range_label(),
            can_prev: window.has_prev(),
            can_next: window.has_next(),
            is_empty: self.order.is_empty(),
            empty_message: &self.config.empty_message,
            row_actions: &self.config.row_actions,
            phase: self.state.phase(),
        }
    }

    // Transitions

    /// Replaces the source collection, keeping search and sort.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.generation = self.generation.wrapping_add(1);
        debug!(count = self.records.len(), generation = self.generation, "Records replaced");
        self.refresh();
    }

    /// Sets the search term; the page returns to 1 when it changes.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let changed = self.state.set_search(term);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Header selection by column index; see [`ViewState::toggle_sort`].
    pub fn select_header(&mut self, index: usize) -> bool {
        let Some(column) = self.columns.get(index) else {
            return false;
        };
        let changed = self.state.toggle_sort(column);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Header selection by column key. Unknown keys are ignored.
    pub fn select_header_by_key(&mut self, key: &str) -> bool {
        match self.column_index(key) {
            Some(index) => self.select_header(index),
            None => false,
        }
    }

    /// Sorts by `key` in an explicit direction. Unknown or non-sortable
    /// columns are ignored.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) -> bool {
        let Some(column) = self.columns.iter().find(|column| column.key == key) else {
            return false;
        };
        let changed = self.state.set_sort(column, direction);
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn clear_sort(&mut self) -> bool {
        let changed = self.state.clear_sort();
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.state.go_to_page(page, self.max_page());
    }

    pub fn next_page(&mut self) {
        self.state.next_page(self.max_page());
    }

    pub fn prev_page(&mut self) {
        self.state.prev_page(self.max_page());
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.max_page());
    }

    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.key == key)
    }

    /// Re-runs filter and sort if their inputs changed, then re-clamps the page.
    fn refresh(&mut self) {
        let key = PipelineKey {
            generation: self.generation,
            search_term: self.state.search_term().to_string(),
            sort_key: self.state.sort_key().map(str::to_string),
            sort_direction: self.state.sort_direction(),
        };
        if self.order_key.as_ref() != Some(&key) {
            let filtered = filter_indices(&self.records, &key.search_term);
            self.order = match key.sort_key.as_deref() {
                Some(sort_key) => sort_indices(&self.records, &filtered, sort_key, key.sort_direction),
                None => filtered,
            };
            debug!(
                total = self.records.len(),
                filtered = self.order.len(),
                sort_key = ?key.sort_key,
                "Derived pipeline recomputed"
            );
            self.order_key = Some(key);
        }
        self.state.clamp_page(self.max_page());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabview_types::records_from_json;

    fn ledger(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|n| Record::try_from(json!({"id": n, "memo": format!("txn {n}")})).unwrap())
            .collect()
    }

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "ID"),
            ColumnDescriptor::new("memo", "Memo").unsortable(),
        ]
    }

    #[test]
    fn snapshot_reports_controls_and_range() {
        let mut view = TabularView::new(ledger(23), columns(), ViewConfig::default().with_title("Ledger"));
        let first = view.snapshot();
        assert_eq!(first.title, "Ledger");
        assert_eq!(first.rows.len(), 10);
        assert!(!first.can_prev);
        assert!(first.can_next);
        assert_eq!(first.range_label.to_string(), "Showing 1–10 of 23");
        assert_eq!(first.headers[0].sort, HeaderSort::Unsorted);
        assert_eq!(first.headers[1].sort, HeaderSort::NotSortable);

        view.last_page();
        let last = view.snapshot();
        assert_eq!(last.rows.len(), 3);
        assert!(last.can_prev);
        assert!(!last.can_next);
    }

    #[test]
    fn search_resets_page_and_shrinks_page_count() {
        let mut view = TabularView::new(ledger(23), columns(), ViewConfig::default());
        view.go_to_page(3);
        assert!(view.set_search("txn 2"));
        assert_eq!(view.state().current_page(), 1);
        // "txn 2", "txn 20".."txn 23"
        assert_eq!(view.filtered_len(), 5);
        assert_eq!(view.max_page(), 1);
    }

    #[test]
    fn replacing_records_keeps_sort_and_search_and_clamps_page() {
        let mut view = TabularView::new(ledger(23), columns(), ViewConfig::default());
        assert!(view.select_header(0));
        assert!(view.select_header(0));
        view.set_search("txn");
        view.go_to_page(3);

        view.set_records(ledger(12));
        assert_eq!(view.state().sort_key(), Some("id"));
        assert_eq!(view.state().sort_direction(), SortDirection::Desc);
        assert_eq!(view.state().search_term(), "txn");
        assert_eq!(view.state().current_page(), 2);
        assert_eq!(view.page_records()[0].get("id"), Some(&json!(2)));
    }

    #[test]
    fn empty_filter_result_shows_placeholder_state() {
        let mut view = TabularView::new(ledger(5), columns(), ViewConfig::default());
        view.set_search("no such thing");
        let snapshot = view.snapshot();
        assert!(snapshot.is_empty);
        assert!(snapshot.rows.is_empty());
        assert!(!snapshot.can_prev && !snapshot.can_next);
        assert_eq!(snapshot.range_label.to_string(), "Showing 0 of 0");
        assert_eq!(snapshot.empty_message, tabview_types::DEFAULT_EMPTY_MESSAGE);
    }

    #[test]
    fn non_sortable_and_unknown_headers_are_no_ops() {
        let mut view = TabularView::new(ledger(3), columns(), ViewConfig::default());
        assert!(!view.select_header(1));
        assert!(!view.select_header(7));
        assert!(!view.select_header_by_key("missing"));
        assert!(!view.set_sort("memo", SortDirection::Desc));
        assert_eq!(view.state().phase(), ViewPhase::Idle);
    }

    #[test]
    fn inferred_columns_cover_every_key() {
        let records = records_from_json(json!([{"name": "a"}, {"amount": 1}])).unwrap();
        let view = TabularView::with_inferred_columns(records, ViewConfig::default());
        let keys: Vec<&str> = view.columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "amount"]);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let config = ViewConfig {
            page_size: 0,
            ..ViewConfig::default()
        };
        let view = TabularView::new(ledger(3), columns(), config);
        assert_eq!(view.max_page(), 3);
        assert_eq!(view.page_records().len(), 1);
    }
}
