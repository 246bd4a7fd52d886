//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_dashboard_screen, AlertDialog, DashboardComponent, HelpDialog, QuitDialog,
    UploadComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::page::{next_sidebar_page, previous_sidebar_page, Page};
use crate::model::ui::AppMode;
use crate::services::{DataSource, SampleData};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App State
// ═══════════════════════════════════════════════════════════════════════════════

/// Root application state
pub struct App {
    /// Current screen
    pub mode: AppMode,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Report figures shown by the dashboard
    pub data: Box<dyn DataSource>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    /// Upload screen; dropped once analysis completes
    pub upload: Option<UploadComponent>,
    pub dashboard: DashboardComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub alert_dialog: AlertDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App on the upload screen, backed by the sample figures
    pub fn new(config: &Config) -> App {
        Self::with_data(config, Box::new(SampleData::new()))
    }

    /// Create a new App reading dashboard figures from `data`
    pub fn with_data(config: &Config, data: Box<dyn DataSource>) -> App {
        App {
            mode: AppMode::Upload,
            modals: ModalStack::new(),
            data,
            should_quit: false,
            upload: Some(UploadComponent::new(config.initial_upload_input())),
            dashboard: DashboardComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            alert_dialog: AlertDialog::default(),
        }
    }

    /// Advance time-based state to `now`
    ///
    /// Returns the upload screen's completion action once its timers run out.
    pub fn tick(&mut self, now: Instant) -> Option<Action> {
        self.upload.as_mut().and_then(|upload| upload.tick(now))
    }

    /// Switch to the dashboard and tear down the upload screen
    fn finish_upload(&mut self) {
        if self.mode != AppMode::Upload {
            return;
        }
        info!("File analysis completed!");

        if let Some(mut upload) = self.upload.take() {
            upload.teardown();
        }
        self.mode = AppMode::Dashboard;
        info!(mode = self.mode.name(), "switched screen");
    }

    fn navigate(&mut self, page: Page) {
        if self.dashboard.state.page != page {
            debug!(from = self.dashboard.state.page.slug(), to = page.slug(), "navigate");
        }
        self.dashboard.state.navigate(page);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Raw mode swallows the interrupt signal
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        match self.mode {
            AppMode::Upload => match self.upload.as_mut() {
                Some(upload) => upload.handle_key_event(key),
                None => Ok(None),
            },
            AppMode::Dashboard => {
                if self.dashboard.state.search_mode {
                    self.handle_search_key_event(key)
                } else {
                    self.dashboard.handle_key_event(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => return Ok(self.tick(Instant::now())),
            Action::ForceQuit => {
                if let Some(mut upload) = self.upload.take() {
                    upload.teardown();
                }
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Upload (delegate to UploadComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::UploadInput(_)
            | Action::UploadBackspace
            | Action::ChooseFile
            | Action::ToggleReportType
            | Action::Analyze => {
                if let Some(upload) = self.upload.as_mut() {
                    return upload.update(action);
                }
            }
            Action::AnalysisComplete => self.finish_upload(),

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(page) => self.navigate(page),
            Action::NextPage => self.navigate(next_sidebar_page(self.dashboard.state.page)),
            Action::PrevPage => self.navigate(previous_sidebar_page(self.dashboard.state.page)),
            Action::OpenMetric(index) => {
                if let Some(page) = self.data.metrics().get(index).map(|m| m.page) {
                    self.navigate(page);
                }
            }
            Action::ToggleSidebar => self.dashboard.state.toggle_sidebar(),

            // ─────────────────────────────────────────────────────────────────
            // Orders Table (delegate to DashboardState)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.dashboard.state.cursor_down(self.data.orders()),
            Action::PrevItem => self.dashboard.state.cursor_up(self.data.orders()),
            Action::ToggleRowSelection => {
                self.dashboard.state.toggle_focused_row(self.data.orders())
            }
            Action::ToggleSelectAll => {
                self.dashboard.state.toggle_all(self.data.orders());
                debug!(selected = self.dashboard.state.selected.len(), "toggled all rows");
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.dashboard.state.enter_search_mode(),
            Action::ExitSearchMode => self.dashboard.state.exit_search_mode(),
            Action::SearchInput(c) => self.dashboard.state.search_input(c, self.data.orders()),
            Action::SearchBackspace => self.dashboard.state.search_backspace(self.data.orders()),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if self.modals.top() != Some(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                if self.modals.top() == Some(&Modal::Help) {
                    self.modals.pop();
                } else {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help);
                }
            }
            Action::ShowAlert { title, message } => {
                self.modals.push(Modal::Alert { title, message });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Upload => {
                if let Some(upload) = self.upload.as_mut() {
                    upload.draw(frame, area)?;
                }
            }
            AppMode::Dashboard => {
                draw_dashboard_screen(frame, area, &self.dashboard, self.data.as_ref());
            }
        }

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Alert { .. } => self.alert_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Alert { title, message } => {
                self.alert_dialog.set_alert(title, message);
                self.alert_dialog.draw(frame, area)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::upload::{ANALYSIS_DURATION, COMPLETION_DELAY};
    use crate::model::upload::UploadPhase;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the app, following up chained actions
    fn press(app: &mut App, code: KeyCode) {
        let mut next = app.handle_key_event(key(code)).unwrap();
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn temp_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("payout-tui-app-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, b"report").unwrap();
        path
    }

    fn dashboard_app() -> App {
        let mut app = App::default();
        app.update(Action::AnalysisComplete).unwrap();
        app
    }

    #[test]
    fn test_starts_on_upload_screen() {
        let app = App::default();
        assert_eq!(app.mode, AppMode::Upload);
        assert!(app.upload.is_some());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_initial_input_from_config() {
        let config = Config {
            upload_dir: "reports".to_string(),
            ..Config::default()
        };
        let app = App::new(&config);
        let input = &app.upload.as_ref().unwrap().input;
        assert!(input.starts_with("reports"));
    }

    #[test]
    fn test_unsupported_file_blocks_input_until_dismissed() {
        let mut app = App::default();
        let path = temp_file("notes.txt");
        type_text(&mut app, &path.to_string_lossy());
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.modals.top(), Some(Modal::Alert { .. })));
        assert!(app.upload.as_ref().unwrap().file.is_none());

        // Typing is swallowed by the alert
        let before = app.upload.as_ref().unwrap().input.clone();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.upload.as_ref().unwrap().input, before);

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_upload_flow_reaches_dashboard_once() {
        let mut app = App::default();
        let path = temp_file("payments.pdf");
        type_text(&mut app, &path.to_string_lossy());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.upload.as_ref().unwrap().phase, UploadPhase::FileChosen);

        let t0 = Instant::now();
        let upload = app.upload.as_mut().unwrap();
        assert!(upload.analyze(t0));
        assert_eq!(upload.poll(t0 + ANALYSIS_DURATION), None);
        let done = upload.poll(t0 + ANALYSIS_DURATION + COMPLETION_DELAY);
        assert_eq!(done, Some(Action::AnalysisComplete));

        app.update(Action::AnalysisComplete).unwrap();
        assert_eq!(app.mode, AppMode::Dashboard);
        assert!(app.upload.is_none());

        // A stray second completion changes nothing
        app.update(Action::Navigate(Page::Orders)).unwrap();
        app.update(Action::AnalysisComplete).unwrap();
        assert_eq!(app.mode, AppMode::Dashboard);
        assert_eq!(app.dashboard.state.page, Page::Orders);
    }

    /// Apply `action` and every follow-up it produces
    fn dispatch(app: &mut App, action: Option<Action>) -> usize {
        let mut applied = 0;
        let mut next = action;
        while let Some(action) = next {
            next = app.update(action).unwrap();
            applied += 1;
        }
        applied
    }

    #[test]
    fn test_ticks_deliver_completion_and_switch_screen() {
        let mut app = App::default();
        let path = temp_file("ticked.xlsx");
        type_text(&mut app, &path.to_string_lossy());
        press(&mut app, KeyCode::Enter);

        let t0 = Instant::now();
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.upload.as_ref().unwrap().phase, UploadPhase::Analyzing);

        // Analyze stamped its deadline at or after t0
        let slack = Duration::from_millis(500);
        let early = app.tick(t0 + Duration::from_secs(1));
        assert_eq!(dispatch(&mut app, early), 0);
        assert_eq!(app.mode, AppMode::Upload);

        let completed_at = t0 + ANALYSIS_DURATION + slack;
        let finished = app.tick(completed_at);
        assert_eq!(dispatch(&mut app, finished), 0);
        assert_eq!(app.upload.as_ref().unwrap().phase, UploadPhase::Complete);
        assert_eq!(app.mode, AppMode::Upload);

        let completion = app.tick(completed_at + COMPLETION_DELAY);
        assert_eq!(completion, Some(Action::AnalysisComplete));
        assert_eq!(dispatch(&mut app, completion), 1);
        assert_eq!(app.mode, AppMode::Dashboard);
        assert!(app.upload.is_none());

        // Later ticks have nothing left to deliver
        assert_eq!(app.tick(completed_at + Duration::from_secs(60)), None);
        assert_eq!(app.mode, AppMode::Dashboard);
    }

    #[test]
    fn test_force_quit_tears_down_upload() {
        let mut app = App::default();
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
        assert!(app.upload.is_none());
    }

    #[test]
    fn test_metric_keys_open_linked_pages() {
        let mut app = dashboard_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.dashboard.state.page, Page::Orders);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.dashboard.state.page, Page::Dashboard);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.dashboard.state.page, Page::Tolerance);
    }

    #[test]
    fn test_open_metric_out_of_range_is_ignored() {
        let mut app = dashboard_app();
        app.update(Action::OpenMetric(42)).unwrap();
        assert_eq!(app.dashboard.state.page, Page::Dashboard);
    }

    #[test]
    fn test_tab_walks_sidebar() {
        let mut app = dashboard_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.dashboard.state.page, Page::Analytics);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.dashboard.state.page, Page::Logout);
    }

    #[test]
    fn test_search_mode_routes_keys_to_query() {
        let mut app = dashboard_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        assert!(app.dashboard.state.search_mode);

        // 'q' and 'a' are query text here, not shortcuts
        type_text(&mut app, "1021405");
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Backspace);
        assert!(app.modals.is_empty());
        assert_eq!(app.dashboard.state.search_query, "1021405");
        assert_eq!(app.dashboard.state.visible_orders(app.data.orders()).len(), 1);

        press(&mut app, KeyCode::Enter);
        assert!(!app.dashboard.state.search_mode);
        assert_eq!(app.dashboard.state.search_query, "1021405");
    }

    #[test]
    fn test_select_all_ignores_filter() {
        let mut app = dashboard_app();
        press(&mut app, KeyCode::Char('2'));
        app.dashboard.state.set_search("1021405", app.data.orders());

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.dashboard.state.selected.len(), app.data.orders().len());

        press(&mut app, KeyCode::Char('a'));
        assert!(app.dashboard.state.selected.is_empty());
    }

    #[test]
    fn test_space_toggles_focused_row() {
        let mut app = dashboard_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));

        let second = app.data.orders()[1].order_id.clone();
        assert!(app.dashboard.state.is_selected(&second));
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = dashboard_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggles() {
        let mut app = dashboard_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modals.top(), Some(&Modal::Help));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_draw_both_screens_with_modal() {
        let mut app = App::default();
        app.update(Action::ShowAlert {
            title: "Unsupported file".to_string(),
            message: "Please upload a PDF or XLSX file.".to_string(),
        })
        .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();

        app.update(Action::CloseModal).unwrap();
        app.update(Action::AnalysisComplete).unwrap();
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Negative Payout"));
    }
}
