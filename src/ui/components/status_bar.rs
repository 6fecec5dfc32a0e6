use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    if let Some((message, _)) = &state.status_message {
        let status = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {message}"),
            base_style.add_modifier(Modifier::BOLD),
        )]))
        .style(base_style);
        f.render_widget(status, area);
        return;
    }

    let nav_hint = "? help  q quit";
    let version_text = format!("v{VERSION}");

    let left_content = format!(
        " {} | {} | {} generated",
        state.format,
        state.copy_feedback.state(),
        state.history.len()
    );

    let padding = area.width.saturating_sub(
        left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 3,
    );

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));

    f.render_widget(status, area);
}
