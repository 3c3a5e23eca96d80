mod banner;
mod detail_pane;
mod expression_list;
mod input_box;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Draw the whole screen from `state`. Nothing is retained between draws.
pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout =
        layout::compute_layout(frame.area(), state.banner.visible, state.detail.is_some());

    banner::render(frame, app_layout.banner, state);
    expression_list::render(frame, app_layout.expression_list, state);
    detail_pane::render(frame, app_layout.detail_pane, state);
    input_box::render(frame, app_layout.input_box, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DetailView;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_banner_hidden_by_default() {
        let state = AppState::new(AppConfig::default());
        let text = screen(&state);
        assert!(!text.contains("Error submitting"));
        assert!(text.contains("Expressions"));
    }

    #[test]
    fn test_banner_shown_with_text() {
        let mut state = AppState::new(AppConfig::default());
        state
            .banner
            .show("Error submitting expression: 500", Some("bad expression"));
        assert!(screen(&state).contains("Error submitting expression: 500: bad expression"));

        state.banner.hide();
        assert!(!screen(&state).contains("bad expression"));
    }

    #[test]
    fn test_detail_pane() {
        let mut state = AppState::new(AppConfig::default());
        state.detail = Some(DetailView::NotFound { id: "abc".into() });
        let text = screen(&state);
        assert!(text.contains("Details"));
        assert!(text.contains("Not known to the service yet."));
    }
}
