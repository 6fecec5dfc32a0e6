use crate::app::AppState;
use crate::feedback::FeedbackState;
use crate::surface::DisplaySurface;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Value box on top, the two buttons underneath.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Value
            Constraint::Length(1), // Buttons
        ])
        .split(area);

    render_value(f, state, chunks[0]);
    render_buttons(f, state, chunks[1]);
}

fn render_value(f: &mut Frame, state: &AppState, area: Rect) {
    let shown = state.display.displayed();
    let value_style = if shown.starts_with("Error:") {
        Style::default().fg(state.theme.error)
    } else {
        Style::default()
            .fg(state.theme.accent)
            .add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(shown.to_string(), value_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" UUID GEN ")
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(paragraph, area);
}

fn render_buttons(f: &mut Frame, state: &AppState, area: Rect) {
    let button_style = Style::default()
        .fg(state.theme.button_fg)
        .bg(state.theme.button_bg);

    let copy_style = match state.copy_feedback.state() {
        FeedbackState::Feedback => Style::default()
            .fg(state.theme.button_fg)
            .bg(state.theme.copied)
            .add_modifier(Modifier::BOLD),
        FeedbackState::Idle => button_style,
    };

    let line = Line::from(vec![
        Span::styled(" [n] New Uuid ", button_style),
        Span::raw("  "),
        Span::styled(format!(" [c] {} ", state.copy_feedback.label()), copy_style),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
