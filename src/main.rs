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

//! # QR Player TUI.
//!
//! A terminal slideshow that turns a pasted list of shipment tracking numbers
//! into QR codes shown one at a time, for scanning packages in sequence.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! small set of background threads.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, applies every state
//!   change and renders the UI.
//! * An **Input Thread** forwards keyboard, paste and resize events.
//! * A **Timer Thread** (at most one at a time) delivers the ticks that
//!   advance playback.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a failure. All threads
//! talk to the main thread through a single `std::sync::mpsc` channel, so
//! events are processed strictly one at a time.

mod cli;
mod commander;
mod components;
mod config;
mod controller;
mod events;
mod host;
mod logging;
mod model;
mod render;
mod theme;
mod timer;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::info;

use crate::{
    cli::Args,
    commander::Commander,
    components::TrackingInput,
    config::AppConfig,
    controller::Focus,
    events::{AppEvent, process_events},
    host::{HostEnvironment, TerminalHost},
    logging::LogConfig,
    model::{
        playback::Playback,
        sizing::{PresentationSize, compute_size},
    },
    render::qr::ErrorLevel,
    theme::Theme,
    timer::TimerDriver,
};

/// Application state.
struct App {
    pub(crate) theme: Theme,
    pub(crate) focus: Focus,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) host: Box<dyn HostEnvironment>,

    pub(crate) playback: Playback,
    pub(crate) timer: TimerDriver<Sender<AppEvent>>,

    pub(crate) editor: TrackingInput,
    pub(crate) commander: Commander,

    pub(crate) presentation_size: PresentationSize,
    pub(crate) error_level: ErrorLevel,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// `text` pre-fills the tracking list editor, which starts with focus.
    pub(crate) fn new(config: AppConfig, host: Box<dyn HostEnvironment>, text: String) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let timer = TimerDriver::new(event_tx.clone());

        let mut editor = TrackingInput::new(text);
        editor.is_active = true;

        let presentation_size = compute_size(host.viewport());

        Self {
            theme: Theme::default(),
            focus: Focus::Editor,
            event_tx,
            event_rx,
            host,
            playback: config.playback(),
            timer,
            editor,
            commander: Commander::new(),
            presentation_size,
            error_level: config.error_level,
        }
    }
}

/// The entry point of the application.
///
/// Parses arguments, loads configuration, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(&LogConfig::from_verbosity(args.verbose, args.log_file.clone()))?;

    let mut config = config::load_config();
    args.apply(&mut config);

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read tracking list {}", path.display()))?,
        None => String::new(),
    };

    let mut app = App::new(config, Box::new(TerminalHost::new()), text);
    info!(
        interval_ms = app.playback.interval_ms(),
        looping = app.playback.looping(),
        "Starting"
    );

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables bracketed paste so a pasted column arrives as one event.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        TerminalHost::paint_background(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its previous state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is best-effort and does not return a result, as it is called
/// during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen).ok();
    TerminalHost::reset_background();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Paste(text)) => AppEvent::Paste(text),
                Ok(Event::Resize(columns, rows)) => AppEvent::Resize(columns, rows),
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
