//! payout-tui - A terminal dashboard for marketplace payout reports
//!
//! This is the main entry point for the payout-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::{Ticker, Tui};
use anyhow::Result;
use crossterm::event::Event;
use std::time::Instant;
use tracing::{debug, error, info, warn};

fn main() -> Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (Config::default(), None),
        Err(err) => (Config::default(), Some(err)),
    };

    let log_path = logging::initialize(&config)?;
    info!(log = %log_path.display(), "payout-tui starting");

    match config_error {
        Some(err) => warn!(error = %err, "config unreadable, using defaults"),
        None => {
            if let Err(err) = ensure_config_file(&config) {
                warn!(error = %err, "could not write default config");
            }
        }
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = %err, "payout-tui exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("payout-tui stopped");
    Ok(())
}

/// Write the defaults on first start so the settings are discoverable
fn ensure_config_file(config: &Config) -> Result<()> {
    if Config::load()?.is_none() {
        config.save()?;
    }
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    let mut ticker = Ticker::new(tui.tick_rate, Instant::now());

    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw error");
            }
        })?;

        // Poll for events until the next tick is due
        let action = match tui.next_event(ticker.timeout(Instant::now()))? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            _ => None,
        };
        dispatch(app, action)?;

        // Ticks run on elapsed time, whether or not input arrived
        if ticker.take(Instant::now()) {
            dispatch(app, Some(Action::Tick))?;
        }
    }

    Ok(())
}

/// Apply an action and every follow-up action it produces
fn dispatch(app: &mut App, action: Option<Action>) -> Result<()> {
    let mut current_action = action;
    while let Some(a) = current_action {
        if a != Action::Tick {
            debug!(action = %a, "dispatch");
        }
        current_action = app.update(a)?;
    }
    Ok(())
}
