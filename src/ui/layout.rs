use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub banner: Rect,
    pub expression_list: Rect,
    pub detail_pane: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, banner_visible: bool, detail_open: bool) -> AppLayout {
    // Vertical: banner | content | input | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if banner_visible { 3 } else { 0 }),
            Constraint::Min(5),    // Expressions
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Content: list | detail pane (only while open)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),
            Constraint::Length(if detail_open { 42 } else { 0 }),
        ])
        .split(main_chunks[1]);

    AppLayout {
        banner: main_chunks[0],
        expression_list: content_chunks[0],
        detail_pane: content_chunks[1],
        input_box: main_chunks[2],
        status_bar: main_chunks[3],
    }
}
