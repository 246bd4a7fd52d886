//! Blocking alert dialog
//!
//! Shows a single message until dismissed. Every other key is swallowed, so
//! nothing underneath receives input while the alert is up.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default)]
pub struct AlertDialog {
    title: String,
    message: String,
}

impl AlertDialog {
    /// Set the alert shown by the next draw
    pub fn set_alert(&mut self, title: &str, message: &str) {
        self.title = title.to_string();
        self.message = message.to_string();
    }
}

impl Component for AlertDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = (self.message.width() as u16 + 6).clamp(36, 64);
        let popup_area = centered_popup(area, width, 7);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("OK"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(format!(" {} ", self.title))
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_only_dismiss_keys_close() {
        let mut dialog = AlertDialog::default();
        let press = |d: &mut AlertDialog, code| {
            d.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap()
        };
        assert_eq!(press(&mut dialog, KeyCode::Enter), Some(Action::CloseModal));
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(&mut dialog, KeyCode::Char('q')), None);
        assert_eq!(press(&mut dialog, KeyCode::Tab), None);
    }

    #[test]
    fn test_draw_shows_message() {
        let mut dialog = AlertDialog::default();
        dialog.set_alert("Unsupported file", "Please upload a PDF or XLSX file.");

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| dialog.draw(f, f.area()).unwrap()).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Please upload a PDF or XLSX file."));
        assert!(content.contains("Unsupported file"));
    }
}
