//! Upload screen component
//!
//! Takes a report file path and a report type, then runs a timed placeholder
//! analysis. Once analysis completes and a short pause elapses, the component
//! emits `Action::AnalysisComplete` exactly once.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::error::UploadError;
use crate::model::upload::{ChosenFile, ReportType, UploadPhase};
use crate::services::Scheduler;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Time spent in the analyzing phase
pub const ANALYSIS_DURATION: Duration = Duration::from_millis(3000);

/// Pause between analysis completion and the completion notification
pub const COMPLETION_DELAY: Duration = Duration::from_millis(1500);

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Timed steps of the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEvent {
    AnalysisFinished,
    NotifyComplete,
}

/// Upload screen component
pub struct UploadComponent {
    /// File path being typed
    pub input: String,
    /// Validated report file
    pub file: Option<ChosenFile>,
    /// Selected report type
    pub report_type: ReportType,
    /// Current phase
    pub phase: UploadPhase,
    /// Pending timed steps
    scheduler: Scheduler<UploadEvent>,
    /// Whether the completion notification was already emitted
    notified: bool,
    /// Spinner animation frame
    spinner_frame: usize,
}

impl Default for UploadComponent {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl UploadComponent {
    pub fn new(initial_input: String) -> Self {
        Self {
            input: initial_input,
            file: None,
            report_type: ReportType::default(),
            phase: UploadPhase::Idle,
            scheduler: Scheduler::new(),
            notified: false,
            spinner_frame: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // File Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate and select the path currently typed in the input
    pub fn choose_file(&mut self) -> Result<(), UploadError> {
        let input = self.input.trim().to_string();
        self.choose_path(Path::new(&input))
    }

    /// Validate and select `path`
    ///
    /// On rejection the previously chosen file (if any) and the phase stay as
    /// they were. Once analysis has started the selection is locked and this
    /// is a no-op.
    pub fn choose_path(&mut self, path: &Path) -> Result<(), UploadError> {
        if self.phase.is_locked() {
            debug!(phase = self.phase.name(), "file selection ignored while locked");
            return Ok(());
        }

        match ChosenFile::validate(path) {
            Ok(file) => {
                info!(path = %file.path.display(), kind = file.kind.label(), "report file chosen");
                self.file = Some(file);
                self.phase = UploadPhase::FileChosen;
                Ok(())
            }
            Err(err) => {
                match &err {
                    UploadError::UnsupportedFileType { mime } => warn!(
                        path = %path.display(),
                        mime = mime.as_deref().unwrap_or("unknown"),
                        "report file rejected: unsupported type"
                    ),
                    UploadError::NotAFile { .. } => {
                        warn!(path = %path.display(), "report file rejected: not a file")
                    }
                }
                Err(err)
            }
        }
    }

    pub fn set_report_type(&mut self, report_type: ReportType) {
        if self.phase.is_locked() {
            return;
        }
        self.report_type = report_type;
    }

    pub fn toggle_report_type(&mut self) {
        self.set_report_type(self.report_type.toggled());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the Analyze button is enabled
    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && !self.phase.is_locked()
    }

    /// Start the analysis; returns false when analyze is disabled
    pub fn analyze(&mut self, now: Instant) -> bool {
        if !self.can_analyze() {
            return false;
        }

        self.phase = UploadPhase::Analyzing;
        self.scheduler
            .schedule(now, ANALYSIS_DURATION, UploadEvent::AnalysisFinished);
        info!(report_type = self.report_type.label(), "analysis started");
        true
    }

    /// Advance timers to `now`, returning the completion action when it fires
    pub fn poll(&mut self, now: Instant) -> Option<Action> {
        if self.scheduler.is_idle() {
            return None;
        }

        let mut action = None;

        for event in self.scheduler.poll(now) {
            match event {
                UploadEvent::AnalysisFinished => {
                    self.phase = UploadPhase::Complete;
                    self.scheduler
                        .schedule(now, COMPLETION_DELAY, UploadEvent::NotifyComplete);
                    info!("analysis complete");
                }
                UploadEvent::NotifyComplete => {
                    if !self.notified {
                        self.notified = true;
                        action = Some(Action::AnalysisComplete);
                    }
                }
            }
        }

        action
    }

    /// Advance the spinner and the timers to `now`
    pub fn tick(&mut self, now: Instant) -> Option<Action> {
        if self.phase == UploadPhase::Analyzing {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
        self.poll(now)
    }

    /// Cancel every pending timer so nothing fires after the screen is gone
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_all();
        if cancelled > 0 {
            info!(cancelled, phase = self.phase.name(), "upload screen torn down with pending timers");
        }
        cancelled
    }

    /// Whether the input line matches the already chosen file
    fn input_matches_chosen(&self) -> bool {
        self.file
            .as_ref()
            .is_some_and(|f| Path::new(self.input.trim()) == f.path)
    }
}

impl Drop for UploadComponent {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for UploadComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.phase.is_locked() {
            let action = match key.code {
                KeyCode::Esc => Some(Action::OpenQuitDialog),
                KeyCode::F(1) => Some(Action::OpenHelp),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Analyze)
            }
            KeyCode::F(5) => Some(Action::Analyze),
            KeyCode::Enter if self.can_analyze() && self.input_matches_chosen() => {
                Some(Action::Analyze)
            }
            KeyCode::Enter => Some(Action::ChooseFile),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                Some(Action::ToggleReportType)
            }
            KeyCode::Backspace => Some(Action::UploadBackspace),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::F(1) => Some(Action::OpenHelp),
            KeyCode::Char(c)
                if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                Some(Action::UploadInput(c))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => return Ok(self.tick(Instant::now())),
            Action::UploadInput(c) if !self.phase.is_locked() => self.input.push(c),
            Action::UploadBackspace if !self.phase.is_locked() => {
                self.input.pop();
            }
            Action::ChooseFile => {
                if let Err(err) = self.choose_file() {
                    return Ok(Some(Action::ShowAlert {
                        title: err.title().to_string(),
                        message: err.to_string(),
                    }));
                }
            }
            Action::ToggleReportType => self.toggle_report_type(),
            Action::Analyze => {
                self.analyze(Instant::now());
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let card_area = centered_popup(area, 72, 20);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(9),    // Form
                Constraint::Length(3), // Analyze button
                Constraint::Length(1), // Help
            ])
            .split(card_area);

        self.draw_header(frame, chunks[0]);
        self.draw_form(frame, chunks[1]);
        self.draw_button(frame, chunks[2]);
        self.draw_help(frame, chunks[3]);

        if self.phase == UploadPhase::Analyzing {
            self.draw_analyzing_overlay(frame, area);
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

impl UploadComponent {
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Upload Report",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Upload your payment report or merchant tax report (MTR)",
                Style::default().fg(Color::Rgb(221, 214, 254)),
            )),
        ];

        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .style(Style::default().bg(Color::Rgb(124, 58, 237))),
        );
        frame.render_widget(header, area);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let locked = self.phase.is_locked();
        let input_style = if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let cursor = if locked { "" } else { "_" };

        let mut lines = vec![
            Line::from(Span::styled("File", Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Magenta)),
                Span::styled(format!("{}{}", self.input, cursor), input_style),
            ]),
        ];

        match &self.file {
            Some(file) => lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::styled(file.file_name(), Style::default().fg(Color::Green)),
                Span::styled(
                    format!("  ({})", file.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])),
            None => lines.push(Line::from(Span::styled(
                "Choose file: type a .pdf or .xlsx path and press Enter",
                Style::default().fg(Color::DarkGray),
            ))),
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Report type",
            Style::default().fg(Color::Gray),
        )));

        let mut radio = Vec::new();
        for report_type in ReportType::all() {
            let selected = report_type == self.report_type;
            let marker = if selected { "(•) " } else { "( ) " };
            let style = if selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            radio.push(Span::styled(marker, style));
            radio.push(Span::styled(report_type.label(), style));
            radio.push(Span::raw("   "));
        }
        lines.push(Line::from(radio));

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(form, area);
    }

    fn draw_button(&self, frame: &mut Frame, area: Rect) {
        let (label, style) = match self.phase {
            UploadPhase::Analyzing => (
                format!("{} Analyzing...", SPINNER[self.spinner_frame]),
                Style::default().fg(Color::White).bg(Color::Magenta),
            ),
            UploadPhase::Complete => (
                "✓ Analysis Complete".to_string(),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            _ if self.can_analyze() => (
                "⇪ Analyze".to_string(),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => (
                "⇪ Analyze".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(button, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| {
            Span::styled(
                k,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let spans = if self.phase.is_locked() {
            vec![key(" Esc "), Span::raw("Quit  "), key(" F1 "), Span::raw("Help")]
        } else {
            vec![
                key(" Enter "),
                Span::raw("Choose/Analyze  "),
                key(" Tab "),
                Span::raw("Report type  "),
                key(" Ctrl+a "),
                Span::raw("Analyze  "),
                key(" Esc "),
                Span::raw("Quit  "),
                key(" F1 "),
                Span::raw("Help"),
            ]
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_analyzing_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_popup(area, 44, 8);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                SPINNER[self.spinner_frame],
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Analyzing your report...",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "This may take a few moments",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            );
        frame.render_widget(paragraph, popup_area);
    }
}
