//! Chart panels for the dashboard overview
//!
//! A bar chart for the 30-day reimbursement series and a share breakdown
//! (legend with proportional bars) standing in for the yearly pie chart.

use crate::model::sample::{format_amount, format_thousands, ChartPoint};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Slice colors, in series order
pub const PALETTE: [Color; 5] = [
    Color::Rgb(51, 51, 51),
    Color::Rgb(139, 92, 246),
    Color::Rgb(167, 139, 250),
    Color::Rgb(196, 181, 253),
    Color::Rgb(221, 214, 254),
];

const BAR_COLOR: Color = Color::Rgb(139, 92, 246);

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Share of each point in the series total, as a percentage
pub fn shares(points: &[ChartPoint]) -> Vec<f64> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        return vec![0.0; points.len()];
    }
    points.iter().map(|p| p.value / total * 100.0).collect()
}

/// Pad or truncate `text` to exactly `width` display columns
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Draw the reimbursement bar chart
pub fn draw_bar_chart(frame: &mut Frame, area: Rect, title: &str, points: &[ChartPoint]) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.value.max(0.0).round() as u64)
                .label(Line::from(p.name.clone()))
                .text_value(format_thousands(p.value))
                .style(Style::default().fg(BAR_COLOR))
                .value_style(Style::default().fg(Color::White).bg(BAR_COLOR))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let count = points.len().max(1) as u16;
    let gap = 2;
    let bar_width = (inner_width.saturating_sub(gap * count) / count).clamp(3, 20);

    let chart = BarChart::default()
        .block(panel(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap);

    frame.render_widget(chart, area);
}

/// Draw the share breakdown with colored markers and proportional bars
pub fn draw_share_breakdown(frame: &mut Frame, area: Rect, title: &str, points: &[ChartPoint]) {
    let percentages = shares(points);
    let name_width = points.iter().map(|p| p.name.width()).max().unwrap_or(0).min(24);
    let bar_room = (area.width as usize).saturating_sub(name_width + 30).max(4);

    let mut lines = Vec::new();
    for (idx, (point, share)) in points.iter().zip(&percentages).enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let filled = ((share / 100.0) * bar_room as f64).round() as usize;

        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::raw(fit_width(&point.name, name_width)),
            Span::raw(" "),
            Span::styled(
                format!("{:>10}", format_amount(point.value)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(" {:>5.1}% ", share),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::data_source::{DataSource, SampleData};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_shares_sum_to_hundred() {
        let data = SampleData::new();
        let total: f64 = shares(data.pie_series()).iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_of_empty_total() {
        let points = vec![ChartPoint::new("a", 0.0), ChartPoint::new("b", 0.0)];
        assert_eq!(shares(&points), vec![0.0, 0.0]);
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 4), "abc…");
        assert_eq!(fit_width("abc", 3), "abc");
    }

    #[test]
    fn test_draw_charts() {
        let data = SampleData::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 16)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let left = Rect::new(0, 0, area.width / 2, area.height);
                let right = Rect::new(area.width / 2, 0, area.width / 2, area.height);
                draw_bar_chart(f, left, "Bars", data.bar_series());
                draw_share_breakdown(f, right, "Shares", data.pie_series());
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("$3.5K"));
        assert!(content.contains("23,188.40"));
    }
}
