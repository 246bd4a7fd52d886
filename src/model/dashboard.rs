//! Dashboard view state
//!
//! Plain in-memory state for the dashboard screen. Every mutation goes through
//! one of the handlers below; none of them touch the underlying data.

use super::page::Page;
use super::sample::OrderRow;
use std::collections::BTreeSet;

/// Rows whose display text contains `query`, ignoring case
///
/// An empty query matches every row.
pub fn filter_orders<'a>(query: &str, rows: &'a [OrderRow]) -> Vec<&'a OrderRow> {
    let query = query.to_lowercase();
    rows.iter()
        .filter(|row| {
            row.display_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

/// Transient state of the dashboard screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Visible content panel
    pub page: Page,
    /// Sidebar shows glyphs only
    pub sidebar_collapsed: bool,
    /// Checked order ids
    pub selected: BTreeSet<String>,
    /// Orders table filter
    pub search_query: String,
    /// Whether keystrokes edit the search query
    pub search_mode: bool,
    /// Focused row within the filtered orders
    pub cursor: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.search_mode = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip membership of `order_id`; ids outside `rows` are ignored
    pub fn toggle_row(&mut self, order_id: &str, rows: &[OrderRow]) {
        if !rows.iter().any(|r| r.order_id == order_id) {
            return;
        }
        if !self.selected.remove(order_id) {
            self.selected.insert(order_id.to_string());
        }
    }

    /// Select every row in the full dataset, or clear if all are selected
    ///
    /// Works on `rows` as given, independent of the active search filter.
    pub fn toggle_all(&mut self, rows: &[OrderRow]) {
        if self.is_all_selected(rows) {
            self.selected.clear();
        } else {
            self.selected = rows.iter().map(|r| r.order_id.clone()).collect();
        }
    }

    pub fn is_all_selected(&self, rows: &[OrderRow]) -> bool {
        self.selected.len() == rows.len() && rows.iter().all(|r| self.selected.contains(&r.order_id))
    }

    pub fn is_selected(&self, order_id: &str) -> bool {
        self.selected.contains(order_id)
    }

    /// Toggle the row under the cursor in the filtered view
    pub fn toggle_focused_row(&mut self, rows: &[OrderRow]) {
        let focused = filter_orders(&self.search_query, rows)
            .get(self.cursor)
            .map(|r| r.order_id.clone());
        if let Some(order_id) = focused {
            self.toggle_row(&order_id, rows);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────────────────────

    pub fn cursor_down(&mut self, rows: &[OrderRow]) {
        let visible = filter_orders(&self.search_query, rows).len();
        if visible == 0 {
            self.cursor = 0;
        } else {
            self.cursor = (self.cursor + 1) % visible;
        }
    }

    pub fn cursor_up(&mut self, rows: &[OrderRow]) {
        let visible = filter_orders(&self.search_query, rows).len();
        if visible == 0 {
            self.cursor = 0;
        } else if self.cursor == 0 {
            self.cursor = visible - 1;
        } else {
            self.cursor -= 1;
        }
    }

    fn clamp_cursor(&mut self, rows: &[OrderRow]) {
        let visible = filter_orders(&self.search_query, rows).len();
        if self.cursor >= visible {
            self.cursor = visible.saturating_sub(1);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char, rows: &[OrderRow]) {
        self.search_query.push(c);
        self.clamp_cursor(rows);
    }

    pub fn search_backspace(&mut self, rows: &[OrderRow]) {
        self.search_query.pop();
        self.clamp_cursor(rows);
    }

    pub fn set_search(&mut self, query: &str, rows: &[OrderRow]) {
        self.search_query = query.to_string();
        self.clamp_cursor(rows);
    }

    /// Orders visible under the current query
    pub fn visible_orders<'a>(&self, rows: &'a [OrderRow]) -> Vec<&'a OrderRow> {
        filter_orders(&self.search_query, rows)
    }
}
