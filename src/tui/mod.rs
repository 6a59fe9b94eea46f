// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Rendering the page
//
// Every input event is turned into at most one page dispatch, and the page
// re-renders the affected component before the loop reads the next event.

pub mod app;
pub mod components;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::dom::Action;
use crate::logging::LogBuffer;
use crate::page::Page;
use crate::traits::ComponentId;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::Theme;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(page: Page, theme: Theme, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(page, theme, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles two kinds of wakeups:
/// 1. Keyboard/mouse input (dispatched to the page)
/// 2. Timer ticks (redraw for uptime and new log lines)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            input = async { event::poll(Duration::from_millis(10)) } => {
                if input.context("Failed to poll terminal events")? {
                    match event::read().context("Failed to read terminal event")? {
                        Event::Key(key_event) => handle_key_event(app, key_event),
                        Event::Mouse(mouse_event) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            }

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// Only key presses count: a release must not click a second time.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }

        // Focus movement
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => app.focus_prev(),

        // Click the focused element
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
        }

        // Direct shortcuts
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.dispatch(ComponentId::DynamicCounter, Action::Increment);
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.dispatch(ComponentId::DynamicCounter, Action::Decrement);
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.dispatch(ComponentId::ClickCounter, Action::Click);
        }
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
        app.click_at(mouse_event.column, mouse_event.row);
    }
}
