//! Terminal User Interface management
//!
//! Handles terminal setup, teardown, and event polling.
//! Wraps ratatui's Terminal for a cleaner interface.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Terminal wrapper for managing the TUI lifecycle
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Polling timeout for events, and the tick period when idle
    pub tick_rate: Duration,
    /// Whether raw mode and the alternate screen are active
    active: bool,
}

impl Tui {
    /// Create a new Tui instance
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
            active: false,
        })
    }

    /// Set the tick rate for event polling
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Enter the alternate screen and enable raw mode
    ///
    /// This should be called before the main loop starts.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.active = true;
        self.terminal.clear()?;
        Ok(())
    }

    /// Exit the alternate screen and disable raw mode
    ///
    /// Also called automatically on Drop; a second call is a no-op.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    /// Poll for the next event
    ///
    /// Returns `Some(Event)` if an event is available within `timeout`,
    /// or `None` if no event is available.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            let event = event::read()?;

            // Filter out key release events (Windows compatibility)
            if let Event::Key(key) = &event {
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }
            }

            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Draw to the terminal using the provided closure
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

/// Fixed-rate tick schedule
///
/// Ticks come due on elapsed time alone, so a stream of input events can
/// delay a tick by at most one event's handling.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    rate: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(rate: Duration, now: Instant) -> Self {
        Self { rate, last: now }
    }

    /// Time left until the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.rate
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Whether a tick is due at `now`; a due tick is consumed
    pub fn take(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.rate {
            self.last = now;
            true
        } else {
            false
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Best effort cleanup on drop
        let _ = self.exit();
    }
}
