//! Runtime: event loop and input routing for the navigation bar.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Drive a single event loop that routes input to the bar component and
//!   executes the returned `Effect`s.
//! - Render via `ui::main::draw` only when `App` marks itself dirty.
//!
//! Input comes from a dedicated thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel. Keeping the
//! blocking read on its own OS thread ensures reliable resize delivery across
//! terminals. The resize subscription lives and dies with this loop; teardown
//! restores the terminal on every exit path.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::mpsc};

use pillnav_types::Effect;

use crate::app::{App, NavOptions};
use crate::ui::components::{Component, NavBarComponent};
use crate::ui::main;

/// Spawns a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    receiver
}

/// Puts the terminal into raw mode inside the alternate screen with mouse
/// capture enabled.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restores terminal settings and leaves the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame, rebuilding the focus ring just before drawing so
/// structural changes are reflected.
fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    nav: &mut NavBarComponent,
) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(&app.nav, Some(old_focus));
    if app.focus.focused().is_none()
        && let Some(flag) = app.nav.active_focus_flag()
    {
        // Roving Tab stop: the active item is the bar's entry point.
        app.focus.by_widget_id(flag.widget_id());
    }
    terminal.draw(|frame| main::draw(frame, app, nav))?;
    Ok(())
}

fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Handles a raw crossterm input event, returning effects to process.
fn handle_input_event(app: &mut App, nav: &mut NavBarComponent, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => {
            if is_quit_key(&key_event) {
                return vec![Effect::Quit];
            }
            nav.handle_key_events(app, key_event)
        }
        Event::Mouse(mouse_event) => nav.handle_mouse_events(app, mouse_event),
        Event::Resize(_, _) => {
            // The bar re-anchors and the indicator re-measures next draw.
            app.nav.mark_geometry_stale();
            app.dirty = true;
            Vec::new()
        }
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the runtime: sets up the terminal, spawns the event
/// producer, runs the event loop, and performs cleanup on exit.
pub async fn run_app(options: NavOptions) -> Result<Option<String>> {
    let mut input_receiver = spawn_input_thread();
    let mut app = App::new(options);
    let mut nav = NavBarComponent::new();
    let mut terminal = setup_terminal()?;

    let result = run_loop(&mut terminal, &mut app, &mut nav, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result?;
    Ok(app.nav.active.clone())
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    nav: &mut NavBarComponent,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    render(terminal, app, nav)?;
    app.dirty = false;

    while !app.should_quit {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(input_event) = maybe_event else {
                    break;
                };
                for effect in handle_input_event(app, nav, input_event) {
                    app.handle_effect(effect);
                }
            }
            _ = signal::ctrl_c() => {
                app.handle_effect(Effect::Quit);
            }
        }
        if app.dirty && !app.should_quit {
            render(terminal, app, nav)?;
            app.dirty = false;
        }
    }
    Ok(())
}
