//! The expression list: one row per tracked expression, in list order.
//!
//! Rows are rebuilt from scratch on every draw, so what is shown is always
//! exactly the current list.

use crate::api::types::{format_result, Expression};
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// Presentation class of a row. Exactly one applies to every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Completed,
    NotCompleted,
}

impl RowClass {
    pub fn style(self) -> Style {
        match self {
            RowClass::Completed => Theme::row_completed(),
            RowClass::NotCompleted => Theme::row_not_completed(),
        }
    }
}

pub fn row_class(expr: &Expression) -> RowClass {
    if expr.is_completed() {
        RowClass::Completed
    } else {
        RowClass::NotCompleted
    }
}

pub fn row_text(expr: &Expression) -> String {
    format!(
        "Expression: {}, ID: {}, Status: {}, Result: {}",
        expr.expression,
        expr.id,
        expr.status,
        format_result(&expr.result)
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::ExpressionList;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let title = if state.expressions.is_empty() {
        " Expressions ".to_string()
    } else {
        format!(" Expressions ({}) ", state.expressions.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    if state.expressions.is_empty() {
        let list = List::new(vec![ListItem::new(Span::styled(
            " No expressions yet. Type one below and press Enter.",
            Style::default().fg(Theme::TEXT_MUTED),
        ))])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    let items: Vec<ListItem> = state
        .expressions
        .iter()
        .map(|expr| ListItem::new(row_text(expr)).style(row_class(expr).style()))
        .collect();

    let mut list = List::new(items).block(block);
    let mut list_state = ListState::default();
    if focused {
        list = list.highlight_style(Theme::row_selected());
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
