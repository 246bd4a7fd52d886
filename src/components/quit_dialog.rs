//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
///
/// Quitting during analysis drops the upload screen, which cancels its timers.
#[derive(Debug, Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, 7);
        frame.render_widget(Clear, popup_area);

        let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Leave the payout dashboard?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y/Enter ", key_style(Color::Green)),
                Span::raw("Quit  "),
                Span::styled(" n/Esc ", key_style(Color::Red)),
                Span::raw("Stay"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit ")
                    .title_style(key_style(Color::Yellow)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_confirm_and_cancel_keys() {
        let mut dialog = QuitDialog;
        let press = |d: &mut QuitDialog, code| {
            d.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap()
        };
        assert_eq!(press(&mut dialog, KeyCode::Char('y')), Some(Action::ForceQuit));
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(&mut dialog, KeyCode::Char('x')), None);
    }
}
