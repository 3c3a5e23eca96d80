use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.banner.visible || area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::banner());
    let paragraph = Paragraph::new(state.banner.text.as_str())
        .style(Theme::banner())
        .block(block);
    frame.render_widget(paragraph, area);
}
