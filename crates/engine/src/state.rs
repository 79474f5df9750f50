//! View state and its transitions.
//!
//! `ViewState` holds what the user controls: the current page, the sort
//! column and direction, and the search term. Transitions that depend on the
//! data (page clamping) take the current page count as an argument so the
//! state itself never needs to see the records.

use tabview_types::{ColumnDescriptor, SortDirection};
use tracing::debug;

/// Coarse phase of the view, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// No search and no sort.
    Idle,
    /// A search term narrows the rows.
    Filtered,
    /// A sort column is active (with or without a search).
    Sorted,
}

/// Component-local state governing page, sort and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    current_page: usize,
    sort_key: Option<String>,
    sort_direction: SortDirection,
    search_term: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            sort_key: None,
            sort_direction: SortDirection::Asc,
            search_term: String::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // Selectors
    pub fn current_page(&self) -> usize {
        self.current_page
    }
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn phase(&self) -> ViewPhase {
        if self.sort_key.is_some() {
            ViewPhase::Sorted
        } else if !self.search_term.is_empty() {
            ViewPhase::Filtered
        } else {
            ViewPhase::Idle
        }
    }

    // Reducers

    /// Replaces the search term and returns to page 1.
    ///
    /// Returns `true` when the term changed.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        debug!(term = %term, "Search term changed");
        self.search_term = term;
        self.current_page = 1;
        true
    }

    /// Header selection: same column flips direction, a new column starts
    /// ascending, a non-sortable column is ignored.
    ///
    /// Returns `true` when the sort changed.
    pub fn toggle_sort(&mut self, column: &ColumnDescriptor) -> bool {
        if !column.sortable {
            return false;
        }
        if self.sort_key.as_deref() == Some(column.key.as_str()) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = Some(column.key.clone());
            self.sort_direction = SortDirection::Asc;
        }
        debug!(key = %column.key, direction = %self.sort_direction, "Sort changed");
        true
    }

    /// Sets an explicit sort on a sortable column.
    pub fn set_sort(&mut self, column: &ColumnDescriptor, direction: SortDirection) -> bool {
        if !column.sortable {
            return false;
        }
        let changed = self.sort_key.as_deref() != Some(column.key.as_str()) || self.sort_direction != direction;
        self.sort_key = Some(column.key.clone());
        self.sort_direction = direction;
        changed
    }

    pub fn clear_sort(&mut self) -> bool {
        self.sort_direction = SortDirection::Asc;
        self.sort_key.take().is_some()
    }

    /// Moves to `page`, clamped into `[1, max_page]`.
    pub fn go_to_page(&mut self, page: usize, max_page: usize) {
        self.current_page = page.clamp(1, max_page.max(1));
    }

    pub fn next_page(&mut self, max_page: usize) {
        self.go_to_page(self.current_page.saturating_add(1), max_page);
    }

    pub fn prev_page(&mut self, max_page: usize) {
        self.go_to_page(self.current_page.saturating_sub(1), max_page);
    }

    /// Re-applies the page invariant after the row count changed.
    pub fn clamp_page(&mut self, max_page: usize) {
        self.go_to_page(self.current_page, max_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_view() {
        let state = ViewState::new();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort_key(), None);
        assert_eq!(state.sort_direction(), SortDirection::Asc);
        assert_eq!(state.search_term(), "");
        assert_eq!(state.phase(), ViewPhase::Idle);
    }

    #[test]
    fn search_resets_page() {
        let mut state = ViewState::new();
        state.go_to_page(3, 5);
        assert!(state.set_search("ali"));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.phase(), ViewPhase::Filtered);

        state.go_to_page(2, 5);
        assert!(!state.set_search("ali"));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn header_toggle_rules() {
        let amount = ColumnDescriptor::new("amount", "Amount");
        let date = ColumnDescriptor::new("date", "Date");
        let memo = ColumnDescriptor::new("memo", "Memo").unsortable();
        let mut state = ViewState::new();

        assert!(state.toggle_sort(&amount));
        assert_eq!((state.sort_key(), state.sort_direction()), (Some("amount"), SortDirection::Asc));
        assert!(state.toggle_sort(&amount));
        assert_eq!(state.sort_direction(), SortDirection::Desc);

        assert!(state.toggle_sort(&date));
        assert_eq!((state.sort_key(), state.sort_direction()), (Some("date"), SortDirection::Asc));

        assert!(!state.toggle_sort(&memo));
        assert_eq!(state.sort_key(), Some("date"));
        assert_eq!(state.phase(), ViewPhase::Sorted);
    }

    #[test]
    fn paging_clamps_at_both_ends() {
        let mut state = ViewState::new();
        state.prev_page(3);
        assert_eq!(state.current_page(), 1);
        state.go_to_page(99, 3);
        assert_eq!(state.current_page(), 3);
        state.next_page(3);
        assert_eq!(state.current_page(), 3);
        state.clamp_page(2);
        assert_eq!(state.current_page(), 2);
        state.go_to_page(0, 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn explicit_sort_ignores_unsortable_columns() {
        let mut state = ViewState::new();
        let memo = ColumnDescriptor::new("memo", "Memo").unsortable();
        assert!(!state.set_sort(&memo, SortDirection::Desc));
        let amount = ColumnDescriptor::new("amount", "Amount");
        assert!(state.set_sort(&amount, SortDirection::Desc));
        assert!(!state.set_sort(&amount, SortDirection::Desc));
        assert!(state.clear_sort());
        assert_eq!(state.phase(), ViewPhase::Idle);
    }
}
