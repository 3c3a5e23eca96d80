use crate::api::types::format_result;
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), Theme::detail_label()),
        Span::styled(value, Style::default().fg(Theme::TEXT_PRIMARY)),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(detail) = state.detail.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(" Details ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines: Vec<Line> = match detail {
        DetailView::Loading { id } => vec![
            field("ID", id.clone()),
            Line::from(Span::styled("Loading...", Style::default().fg(Theme::TEXT_MUTED))),
        ],
        DetailView::Found(expr) => {
            let status_style = crate::ui::expression_list::row_class(expr).style();
            vec![
                field("ID", expr.id.clone()),
                field("Expression", expr.expression.clone()),
                Line::from(vec![
                    Span::styled(format!("{:<11}", "Status"), Theme::detail_label()),
                    Span::styled(expr.status.clone(), status_style),
                ]),
                field("Result", format_result(&expr.result)),
            ]
        }
        DetailView::NotFound { id } => vec![
            field("ID", id.clone()),
            Line::from(Span::styled(
                "Not known to the service yet.",
                Style::default().fg(Theme::TEXT_MUTED),
            )),
        ],
        DetailView::Failed { id, error } => vec![
            field("ID", id.clone()),
            Line::from(Span::styled(error.clone(), Theme::error_message())),
        ],
    };

    let mut lines = lines;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(Theme::TEXT_MUTED),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
