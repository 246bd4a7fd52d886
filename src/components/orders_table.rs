//! Orders table for the "Order & Payment Received" page
//!
//! Renders the filtered orders with a checkbox column, aligned columns and a
//! header checkbox reflecting select-all over the full dataset.

use crate::components::charts::fit_width;
use crate::model::dashboard::DashboardState;
use crate::model::sample::OrderRow;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const HEADERS: [&str; 5] = [
    "Order ID",
    "Net Amount",
    "Invoice Amount",
    "Order Date",
    "P_Description",
];

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Column widths fitted to headers and cells, capped at 30 columns
pub fn column_widths(rows: &[&OrderRow]) -> [usize; 5] {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        for (i, cell) in row.display_fields().iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths.map(|w| w.min(30))
}

/// Build table lines: header, separator, one line per visible row
pub fn build_table_lines(state: &DashboardState, all_rows: &[OrderRow]) -> Vec<Line<'static>> {
    let visible = state.visible_orders(all_rows);
    let widths = column_widths(&visible);
    let mut lines = Vec::new();

    // Header
    let header_check = if state.is_all_selected(all_rows) {
        CHECKED
    } else {
        UNCHECKED
    };
    let mut header_spans = vec![Span::styled(
        format!("{} ", header_check),
        Style::default().fg(Color::Magenta),
    )];
    for (i, h) in HEADERS.iter().enumerate() {
        header_spans.push(Span::styled(
            fit_width(h, widths[i]),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        header_spans.push(Span::raw(" │ "));
    }
    lines.push(Line::from(header_spans));

    // Separator
    let separator: String = std::iter::once("────".to_string())
        .chain(widths.iter().map(|w| "─".repeat(*w)))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    // Rows
    for (idx, row) in visible.iter().enumerate() {
        let selected = state.is_selected(&row.order_id);
        let focused = idx == state.cursor;

        let base = if focused {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![Span::styled(
            format!("{} ", if selected { CHECKED } else { UNCHECKED }),
            base,
        )];
        for (i, cell) in row.display_fields().iter().enumerate() {
            spans.push(Span::styled(fit_width(cell, widths[i]), base));
            spans.push(Span::styled(" │ ", base));
        }
        lines.push(Line::from(spans));
    }

    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No results.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Counts
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{} of {} row(s) shown, {} selected",
            visible.len(),
            all_rows.len(),
            state.selected.len()
        ),
        Style::default().fg(Color::Yellow),
    )));

    lines
}

/// Draw the orders table, keeping the focused row in view
pub fn draw_orders_table(frame: &mut Frame, area: Rect, state: &DashboardState, all_rows: &[OrderRow]) {
    let content = build_table_lines(state, all_rows);
    let visible_height = area.height.saturating_sub(2) as usize;

    // Header and separator take two lines ahead of the first row
    let focused_line = state.cursor + 2;
    let scroll = focused_line.saturating_sub(visible_height.saturating_sub(1));

    let paragraph = Paragraph::new(content.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Order & Payment Received ")
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((scroll as u16, 0));

    frame.render_widget(paragraph, area);

    // Render scrollbar if content exceeds visible area
    let total = content.len();
    if total > visible_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_height)).position(scroll);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::data_source::{DataSource, SampleData};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_column_widths_fit_cells() {
        let data = SampleData::new();
        let rows: Vec<&OrderRow> = data.orders().iter().collect();
        let widths = column_widths(&rows);
        assert_eq!(widths[0], "171-0359154-XXXXXX".len());
        assert_eq!(widths[1], "Net Amount".len());
        assert_eq!(widths[3], "July 18, 2024".len());
    }

    #[test]
    fn test_header_checkbox_tracks_select_all() {
        let data = SampleData::new();
        let mut state = DashboardState::new();

        let lines = build_table_lines(&state, data.orders());
        assert!(line_text(&lines[0]).starts_with(UNCHECKED));

        state.toggle_all(data.orders());
        let lines = build_table_lines(&state, data.orders());
        assert!(line_text(&lines[0]).starts_with(CHECKED));
    }

    #[test]
    fn test_rows_follow_filter() {
        let data = SampleData::new();
        let mut state = DashboardState::new();
        state.set_search("171-1021405", data.orders());

        let lines = build_table_lines(&state, data.orders());
        // header, separator, one row, blank, counts
        assert_eq!(lines.len(), 5);
        assert!(line_text(&lines[2]).contains("171-1021405-XXXXXX"));
        assert!(line_text(&lines[4]).contains("1 of 5 row(s) shown"));
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let data = SampleData::new();
        let mut state = DashboardState::new();
        state.set_search("zzz", data.orders());

        let lines = build_table_lines(&state, data.orders());
        assert_eq!(line_text(&lines[2]), "No results.");
    }

    #[test]
    fn test_selected_row_is_checked() {
        let data = SampleData::new();
        let mut state = DashboardState::new();
        state.toggle_row("171-0828577-XXXXXX", data.orders());

        let lines = build_table_lines(&state, data.orders());
        assert!(line_text(&lines[3]).starts_with(CHECKED));
        assert!(line_text(&lines[2]).starts_with(UNCHECKED));
    }
}
