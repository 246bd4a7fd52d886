//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
                Some(Action::CloseModal)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Clear the area
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    // Upload screen
    add_section(&mut lines, "Upload");
    add_shortcut(&mut lines, "type", "Edit the report file path");
    add_shortcut(&mut lines, "Enter", "Choose file (analyze once chosen)");
    add_shortcut(&mut lines, "Tab / ← →", "Switch report type");
    add_shortcut(&mut lines, "Ctrl+a / F5", "Analyze file");
    add_shortcut(&mut lines, "F1", "Show this help");
    add_shortcut(&mut lines, "Esc", "Quit");

    // Dashboard navigation
    add_section(&mut lines, "Dashboard");
    add_shortcut(&mut lines, "Tab", "Next sidebar page");
    add_shortcut(&mut lines, "Shift+Tab", "Previous sidebar page");
    add_shortcut(&mut lines, "1-6", "Open metric card page");
    add_shortcut(&mut lines, "Esc / b", "Back to Dashboard");
    add_shortcut(&mut lines, "[", "Collapse / expand sidebar");

    // Orders table
    add_section(&mut lines, "Orders");
    add_shortcut(&mut lines, "j / ↓", "Move to next row");
    add_shortcut(&mut lines, "k / ↑", "Move to previous row");
    add_shortcut(&mut lines, "Space", "Toggle row selection");
    add_shortcut(&mut lines, "a", "Select all / clear selection");

    // Search
    add_section(&mut lines, "Search");
    add_shortcut(&mut lines, "/", "Enter search mode");
    add_shortcut(&mut lines, "Esc / Enter", "Leave search mode");

    // Dialogs
    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, ? or F1 to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_help_lists_both_screens() {
        let text: Vec<String> = build_help_content().iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("Upload")));
        assert!(text.iter().any(|l| l.contains("Select all / clear selection")));
    }

    #[test]
    fn test_scroll_and_close() {
        let mut dialog = HelpDialog::default();
        dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 1);

        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }
}
