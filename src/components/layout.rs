//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width when expanded
pub const SIDEBAR_WIDTH: u16 = 22;
/// Sidebar width when collapsed to glyphs
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

/// Dashboard screen layout areas
pub struct DashboardLayout {
    pub sidebar: Rect,
    pub header: Rect,
    pub breadcrumb: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate dashboard screen layout
pub fn calculate_dashboard_layout(area: Rect, sidebar_collapsed: bool) -> DashboardLayout {
    // Main vertical layout: body + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let sidebar_width = if sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    // Horizontal split: sidebar and main column
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(main_chunks[0]);

    // Main column: header + breadcrumb + content
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(horizontal_chunks[1]);

    DashboardLayout {
        sidebar: horizontal_chunks[0],
        header: right_chunks[0],
        breadcrumb: right_chunks[1],
        content: right_chunks[2],
        help: main_chunks[1],
    }
}

/// Split the overview content into metric cards and the chart row
///
/// Returns the six card areas (three per row) and the two chart areas.
pub fn calculate_overview_layout(area: Rect) -> (Vec<Rect>, [Rect; 2]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(8),
        ])
        .split(area);

    let mut cards = Vec::with_capacity(6);
    for row in rows.iter().take(2) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row);
        cards.extend(cols.iter().copied());
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    (cards, [charts[0], charts[1]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_sidebar_width_follows_collapse() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(calculate_dashboard_layout(area, false).sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(
            calculate_dashboard_layout(area, true).sidebar.width,
            SIDEBAR_COLLAPSED_WIDTH
        );
    }

    #[test]
    fn test_overview_has_six_cards() {
        let (cards, charts) = calculate_overview_layout(Rect::new(0, 0, 90, 30));
        assert_eq!(cards.len(), 6);
        assert!(charts[0].height >= 8);
    }
}
