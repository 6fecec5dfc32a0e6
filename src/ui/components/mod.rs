pub mod history;
pub mod status_bar;
pub mod uuid_panel;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Value + buttons
            Constraint::Min(1),    // History
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    uuid_panel::render(f, state, chunks[0]);
    history::render(f, state, chunks[1]);
    status_bar::render(f, state, chunks[2]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    UUID GEN Help

      n / Space / Enter     Generate a new UUID
      c / y                 Copy the displayed UUID
      ↑/↓ or j/k            Browse history
      D                     Clear history
      ?                     Toggle help
      q / Esc / Ctrl-C      Quit
    "#;

    let area = centered_rect(60, 50, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{SharedClipboard, state_with};
    use crate::config::Config;
    use crate::scheduler::TimerQueue;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_copy_label_transition() {
        let mut state = state_with(vec![], SharedClipboard::default(), &Config::default());
        let mut timers = TimerQueue::new(Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        state.generate();
        terminal.draw(|f| render(f, &state)).unwrap();
        let before = screen_text(&terminal);
        assert!(before.contains("[c] Copy "));
        assert!(before.contains(state.history[0].text.as_str()));

        state.copy_displayed(&mut timers);
        terminal.draw(|f| render(f, &state)).unwrap();
        assert!(screen_text(&terminal).contains("[c] Copied!"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut state = state_with(vec![], SharedClipboard::default(), &Config::default());
        state.show_help = true;
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|f| render(f, &state)).unwrap();
        assert!(screen_text(&terminal).contains("Generate a new UUID"));
    }
}
