// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Kurash Scoreboard TUI.
//!
//! A terminal scoreboard for a two-competitor Kurash bout.
//!
//! This application wraps the `kurash_board` adjudication core with a
//! `ratatui` frontend. The core owns every rule; this binary only turns
//! keys and typed commands into intents, feeds elapsed time into the core,
//! and draws what comes back.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, applies intents to
//!   the [`MatchController`] and renders the UI.
//! * An **Input Thread** forwards keyboard events.
//! * A **Tick Thread** sends a periodic tick, which advances the match's
//!   virtual time by the real time that passed.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the threads is handled via `std::sync::mpsc` channels. Logging
//! goes to a file, since the terminal belongs to the scoreboard.

mod commander;
mod events;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::File,
    io::{self},
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::{Duration, Instant},
};
use tracing_subscriber::EnvFilter;

use kurash_board::{
    MatchController,
    config::{self, AppConfig, MatchConfig},
};

use crate::{
    commander::Commander,
    events::{AppEvent, process_events},
    theme::Theme,
};

const LOG_FILE: &str = "kurash-board.log";

const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: MatchController,

    pub commander: Commander,

    /// When time was last fed into the controller.
    pub last_tick: Instant,

    /// Last command error, shown until the next intent.
    pub message: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, match_config: MatchConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller: MatchController::new(match_config),
            commander: Commander::new(),
            last_tick: Instant::now(),
            message: None,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging, loads the configuration, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    init_logging().context("Failed to initialise logging")?;

    let config = config::load_config();
    let match_config = config
        .match_config()
        .context("Invalid bout duration in configuration")?;

    tracing::info!(
        division = ?config.division,
        total_secs = match_config.total_secs(),
        "Starting scoreboard"
    );

    let mut app = App::new(config, match_config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Routes `tracing` output to [`LOG_FILE`], filtered by `RUST_LOG` and
/// defaulting to `info`.
fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE).context("Failed to create log file")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour)).ok();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads, then enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read()
                && key.kind == KeyEventKind::Press
                && tx_keys.send(AppEvent::Key(key)).is_err()
            {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event. Each tick
    // feeds the real elapsed time into the match, and is also the minimum
    // "frame rate" for the decision countdown.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
            thread::sleep(TICK_RATE);
        }
    });

    app.last_tick = Instant::now();

    process_events(terminal, app)
}
