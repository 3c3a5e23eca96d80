use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Chevron "❯ " is two cells wide
const PROMPT_WIDTH: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Input;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Expression ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.input.text;

    if focused {
        let [prompt_area, text_area] =
            Layout::horizontal([Constraint::Length(PROMPT_WIDTH), Constraint::Min(0)])
                .areas(inner);
        frame.render_widget(
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            prompt_area,
        );

        let typed = input_text[..state.input.cursor].width();
        let (scroll, column) = scroll_and_cursor(typed, text_area.width);
        frame.render_widget(
            Paragraph::new(input_text.as_str())
                .style(Theme::input_text())
                .scroll((0, scroll)),
            text_area,
        );

        if text_area.width > 0 {
            frame.set_cursor_position((text_area.x.saturating_add(column), text_area.y));
        }
    } else {
        let paragraph = Paragraph::new(input_text.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
    }
}

/// Horizontal scroll and cursor column for a one-line field `width` cells
/// wide, given the display width of the text left of the cursor. The cursor
/// always lands inside the field.
fn scroll_and_cursor(typed_width: usize, width: u16) -> (u16, u16) {
    let typed = u16::try_from(typed_width).unwrap_or(u16::MAX);
    let last = width.saturating_sub(1);
    let scroll = typed.saturating_sub(last);
    (scroll, typed - scroll)
}
