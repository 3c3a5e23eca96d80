use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    )];

    let (focus_name, hint) = match state.focus {
        FocusPanel::Input => ("INPUT", "Enter submit | Tab list | F5 refresh"),
        FocusPanel::ExpressionList => ("LIST", "Enter details | Tab input | F5 refresh"),
    };
    let right = format!(" {}  [{}] ", hint, focus_name);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        right,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
