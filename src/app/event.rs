use super::state::AppState;
use crate::scheduler::Scheduler;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState, scheduler: &mut dyn Scheduler) {
    if state.show_help {
        handle_help_overlay(key, state);
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }

        // Generate
        (KeyCode::Char('n'), KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE)
        | (KeyCode::Enter, KeyModifiers::NONE) => {
            state.generate();
        }

        // Copy displayed value
        (KeyCode::Char('c'), KeyModifiers::NONE) | (KeyCode::Char('y'), KeyModifiers::NONE) => {
            state.copy_displayed(scheduler);
        }

        // History navigation
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.move_cursor_up();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.move_cursor_down();
        }

        // Clear history (shift-D, some terminals report the SHIFT modifier)
        (KeyCode::Char('D'), _) => {
            state.clear_history();
        }

        (KeyCode::Char('?'), _) => {
            state.show_help = true;
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            state.should_quit = true;
        }

        _ => {}
    }
}

fn handle_help_overlay(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            state.show_help = false;
        }
        _ => {}
    }
}
