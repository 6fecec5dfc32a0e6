use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = if state.history.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  Nothing generated yet. Press n.",
            Style::default().fg(state.theme.muted),
        )))]
    } else {
        state
            .history
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let is_cursor = idx == state.cursor_position;
                let marker = if is_cursor { "> " } else { "  " };

                let text_style = if is_cursor {
                    Style::default()
                        .fg(state.theme.cursor)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(state.theme.foreground)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, text_style),
                    Span::styled(
                        format!("{} ", entry.generated_at.format("%H:%M:%S")),
                        Style::default().fg(state.theme.muted),
                    ),
                    Span::styled(entry.text.clone(), text_style),
                ]))
            })
            .collect()
    };

    let title = format!(" History ({}/{}) ", state.history.len(), state.history_size);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(list, area);
}
