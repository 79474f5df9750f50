//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop over terminal input and Ctrl-C.
//! - Route keys to the root view and execute the returned `ViewEffect`s.
//! - Redraw only after an event that can change what is on screen.
//!
//! A dedicated blocking task reads `crossterm` events and forwards them over
//! a channel, so the async loop never blocks on terminal input.

use std::io::Stdout;
use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{info, warn};

use crate::app::{App, ViewEffect};
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

/// How long the input task waits for an event before checking whether the
/// receiver is gone.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spawn a blocking task that polls terminal input and forwards `crossterm`
/// events over a Tokio channel. The task ends when the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || {
        loop {
            if sender.is_closed() {
                break;
            }
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("Failed to read event: {}", error);
                        break;
                    }
                },
                Err(error) => {
                    warn!("Failed to poll events: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Applies one raw input event. Returns `Break` when the app should exit.
pub(crate) fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> ControlFlow<()> {
    let Event::Key(key_event) = input_event else {
        // Resize and focus changes only need a redraw.
        return ControlFlow::Continue(());
    };
    if key_event.kind != KeyEventKind::Press {
        return ControlFlow::Continue(());
    }
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return ControlFlow::Break(());
    }
    let effects = main_view.handle_key_events(app, key_event);
    process_effects(app, effects)
}

fn process_effects(app: &mut App, effects: Vec<ViewEffect>) -> ControlFlow<()> {
    for effect in effects {
        match effect {
            ViewEffect::Quit => return ControlFlow::Break(()),
            ViewEffect::RowAction { action, record } => app.record_row_action(&action, &record),
        }
    }
    ControlFlow::Continue(())
}

async fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    render(terminal, app, main_view)?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if handle_input_event(app, main_view, event).is_break() {
                    break;
                }
                render(terminal, app, main_view)?;
            }
            _ = signal::ctrl_c() => break,
        }
    }
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal even when the loop fails.
pub async fn run_app(mut app: App) -> Result<App> {
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;
    info!(records = app.view.records().len(), "TUI started");

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal).context("restore terminal")?;
    info!("TUI stopped");
    outcome.map(|()| app)
}
