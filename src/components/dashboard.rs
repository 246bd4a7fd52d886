//! Dashboard component - Main screen after analysis
//!
//! Sidebar navigation, a search header, a breadcrumb and the active page.
//! View state lives in [`DashboardState`]; the App applies actions to it with
//! access to the data source.

use crate::action::Action;
use crate::component::Component;
use crate::components::charts::{draw_bar_chart, draw_share_breakdown};
use crate::components::layout::{calculate_dashboard_layout, calculate_overview_layout};
use crate::components::orders_table::draw_orders_table;
use crate::model::dashboard::DashboardState;
use crate::model::page::{sidebar_items, Page, SidebarSection};
use crate::services::DataSource;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BAR_CHART_TITLE: &str = "Reimbursements by Dispute Type - last 30 days";
const SHARE_CHART_TITLE: &str = "% Reimbursements by Dispute Type - this year";

// ═══════════════════════════════════════════════════════════════════════════════
// Dashboard Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Dashboard component for the main application view
#[derive(Debug, Default)]
pub struct DashboardComponent {
    pub state: DashboardState,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the header shows the search box on the current page
    pub fn shows_search(&self) -> bool {
        matches!(self.state.page, Page::Dashboard | Page::Orders)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for DashboardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let on_orders = self.state.page == Page::Orders;

        let action = match key.code {
            // Pages
            KeyCode::Tab => Some(Action::NextPage),
            KeyCode::BackTab => Some(Action::PrevPage),
            KeyCode::Char('[') => Some(Action::ToggleSidebar),
            KeyCode::Char(c @ '1'..='6') => {
                Some(Action::OpenMetric(c as usize - '1' as usize))
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')
                if self.state.page != Page::Dashboard =>
            {
                Some(Action::Navigate(Page::Dashboard))
            }

            // Orders table
            KeyCode::Char('j') | KeyCode::Down if on_orders => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up if on_orders => Some(Action::PrevItem),
            KeyCode::Char(' ') if on_orders => Some(Action::ToggleRowSelection),
            KeyCode::Char('a') if on_orders => Some(Action::ToggleSelectAll),

            // Search
            KeyCode::Char('/') if self.shows_search() => Some(Action::EnterSearchMode),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_dashboard_screen which takes the data source
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the dashboard screen
pub fn draw_dashboard_screen(
    frame: &mut Frame,
    area: Rect,
    dashboard: &DashboardComponent,
    data: &dyn DataSource,
) {
    let state = &dashboard.state;
    let layout = calculate_dashboard_layout(area, state.sidebar_collapsed);

    render_sidebar(frame, layout.sidebar, state);
    render_header(frame, layout.header, dashboard);
    render_breadcrumb(frame, layout.breadcrumb, state.page);

    match state.page {
        Page::Dashboard => render_overview(frame, layout.content, data),
        Page::Orders => draw_orders_table(frame, layout.content, state, data.orders()),
        page => render_placeholder(frame, layout.content, page),
    }

    render_help_bar(frame, layout.help, state);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let item_line = |label: &str, glyph: &str, active: bool| {
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let text = if state.sidebar_collapsed {
            format!(" {} ", glyph)
        } else {
            format!(" {} {} ", glyph, label)
        };
        Line::from(Span::styled(text, style))
    };

    let mut lines = vec![Line::from(Span::styled(
        if state.sidebar_collapsed { " ▲" } else { " ▲ Payouts" },
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));

    let main = sidebar_items()
        .iter()
        .filter(|i| i.section == SidebarSection::Main);
    for entry in main {
        lines.push(item_line(entry.label, entry.glyph, entry.page == state.page));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(area.width.saturating_sub(2) as usize),
        Style::default().fg(Color::DarkGray),
    )));

    let footer = sidebar_items()
        .iter()
        .filter(|i| i.section == SidebarSection::Footer);
    for entry in footer {
        lines.push(item_line(entry.label, entry.glyph, entry.page == state.page));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_header(frame: &mut Frame, area: Rect, dashboard: &DashboardComponent) {
    let state = &dashboard.state;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    if !dashboard.shows_search() {
        frame.render_widget(block, area);
        return;
    }

    let (query, query_style) = if state.search_query.is_empty() && !state.search_mode {
        ("Search...".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (state.search_query.clone(), Style::default().fg(Color::White))
    };

    let mut spans = vec![
        Span::styled(
            " / ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(query, query_style),
    ];
    if state.search_mode {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_breadcrumb(frame: &mut Frame, area: Rect, page: Page) {
    let mut spans = vec![Span::styled(
        " Dashboard",
        Style::default().fg(Color::DarkGray),
    )];
    if page != Page::Dashboard {
        spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            page.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_overview(frame: &mut Frame, area: Rect, data: &dyn DataSource) {
    let (cards, charts) = calculate_overview_layout(area);

    for (idx, (card_area, metric)) in cards.iter().zip(data.metrics()).enumerate() {
        let lines = vec![
            Line::from(Span::styled(
                metric.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "View details ›",
                Style::default().fg(Color::Magenta),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} {} ", idx + 1, metric.title))
            .title_style(Style::default().fg(Color::Cyan))
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(lines).block(block), *card_area);
    }

    draw_bar_chart(frame, charts[0], BAR_CHART_TITLE, data.bar_series());
    draw_share_breakdown(frame, charts[1], SHARE_CHART_TITLE, data.pie_series());
}

fn render_placeholder(frame: &mut Frame, area: Rect, page: Page) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        page.title(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let key = |k: &str, color: Color| {
        Span::styled(
            format!(" {} ", k),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let help_spans = if state.search_mode {
        vec![
            key("Esc/Enter", Color::Yellow),
            Span::raw("Done  "),
            Span::styled(
                format!("Search: {}", state.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else if state.page == Page::Orders {
        vec![
            key("q", Color::Yellow),
            Span::raw("Quit "),
            key("j/k", Color::Cyan),
            Span::raw("Move "),
            key("Space", Color::Green),
            Span::raw("Toggle "),
            key("a", Color::Green),
            Span::raw("All "),
            key("/", Color::Cyan),
            Span::raw("Search "),
            key("b", Color::Magenta),
            Span::raw("Back "),
            Span::styled(
                format!("{} selected", state.selected.len()),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            key("q", Color::Yellow),
            Span::raw("Quit "),
            key("Tab", Color::Cyan),
            Span::raw("Pages "),
            key("1-6", Color::Green),
            Span::raw("Metrics "),
            key("[", Color::Cyan),
            Span::raw("Sidebar "),
            key("?", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}
