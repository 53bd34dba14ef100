//! folio-tui - A terminal portfolio viewer
//!
//! This is the main entry point for the folio-tui application.
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
use crate::config::{config_dir, resolve_portfolio_path, Preferences};
use crate::services::{load_portfolio, open_link, EmailJsRelay, MailRelay, Portfolio, UnconfiguredRelay};
use crate::tui::{Input, Tui};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = config_dir().and_then(|dir| logging::init(&dir));
    info!(version = env!("CARGO_PKG_VERSION"), "starting folio-tui");

    // Load portfolio, falling back to the built-in one
    let mut load_error = None;
    let portfolio = match resolve_portfolio_path(std::env::args().nth(1)) {
        Some(path) => match load_portfolio(&path) {
            Ok(portfolio) => {
                info!(path = %path.display(), "portfolio loaded");
                portfolio
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using built-in portfolio");
                load_error = Some(format!("{}: {}", path.display(), e));
                Portfolio::builtin()
            }
        },
        None => Portfolio::builtin(),
    };

    let preferences_path = Preferences::default_path();
    let preferences = preferences_path
        .as_deref()
        .map(Preferences::load_from)
        .unwrap_or_default();

    let relay = build_relay(&portfolio);

    // Setup terminal
    let mut tui = Tui::new()?;
    tui.enter()?;

    // Create app state
    let mut app = App::new(portfolio, preferences, relay, preferences_path);
    app.error = load_error;
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = ?err, "application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exiting");
    Ok(())
}

/// Pick the mail relay for the contact form
fn build_relay(portfolio: &Portfolio) -> Arc<dyn MailRelay> {
    match &portfolio.relay {
        Some(config) if config.is_configured() => match EmailJsRelay::new(config.clone()) {
            Ok(relay) => Arc::new(relay),
            Err(e) => {
                warn!(error = %e, "could not build mail relay");
                Arc::new(UnconfiguredRelay)
            }
        },
        _ => Arc::new(UnconfiguredRelay),
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw error");
            }
        })?;

        // Poll for input
        if let Some(input) = tui.next_input()? {
            // Convert input to action
            let action = match input {
                Input::Key(key) => app.handle_key_event(key)?,
                Input::Click(at) => app.handle_click(at)?,
                Input::ScrollUp => Some(Action::ScrollUp),
                Input::ScrollDown => Some(Action::ScrollDown),
                Input::Resize(w, h) => Some(Action::Resize(w, h)),
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No input - send a tick for time-based updates
            let mut current_action = Some(Action::Tick);
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        }

        // Open a requested link in the system browser
        app.open_pending_link(open_link);
    }

    Ok(())
}
