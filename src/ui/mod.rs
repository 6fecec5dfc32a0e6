pub mod components;
pub mod theme;

use crate::app::{AppState, event::handle_key_event};
use crate::scheduler::TimerQueue;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const TICK: Duration = Duration::from_millis(100);

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

pub fn run_tui(mut state: AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut timers = TimerQueue::new(Instant::now());

    info!("TUI started");
    let result = run_app(&mut terminal, &mut state, &mut timers);

    // Any revert still queued must not touch the view once it is gone
    state.shutdown(&mut timers);
    terminal.show_cursor()?;
    info!("TUI stopped");

    result
}

/// Deliver every due timer to its owner. Called before input is handled so
/// anything scheduled by that input is measured from the current instant.
fn dispatch_timers(state: &mut AppState, timers: &mut TimerQueue) {
    for handle in timers.advance(Instant::now()) {
        debug!(?handle, "Timer fired");
        state.on_timer_fired(handle);
    }
}

fn poll_timeout(timers: &TimerQueue) -> Duration {
    match timers.next_deadline() {
        Some(deadline) => deadline.saturating_duration_since(Instant::now()).min(TICK),
        None => TICK,
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    timers: &mut TimerQueue,
) -> Result<()> {
    loop {
        state.clear_expired_status_message();
        dispatch_timers(state, timers);

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(poll_timeout(timers))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    dispatch_timers(state, timers);
                    handle_key_event(key, state, timers);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
