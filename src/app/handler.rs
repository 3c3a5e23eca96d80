use crate::api::client::ApiError;
use crate::api::types::Expression;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::config::expression_id::generate_expression_id;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{error, info, warn};

const SUBMIT_REJECTED: &str = "Error submitting expression";
const SUBMIT_UNREACHABLE: &str = "An error occurred while submitting the expression.";

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::PollTick => vec![Action::Refresh],
        AppEvent::SubmitFinished {
            id,
            expression,
            outcome,
        } => handle_submit_finished(state, id, expression, outcome),
        AppEvent::RefreshFinished(Ok(expressions)) => {
            state.replace_expressions(expressions);
            vec![]
        }
        AppEvent::RefreshFinished(Err(e)) => {
            // Stale is better than noisy; the next tick supersedes this one.
            warn!("Error fetching expressions: {}", e);
            vec![]
        }
        AppEvent::DetailFinished { id, outcome } => {
            handle_detail_finished(state, id, outcome);
            vec![]
        }
        AppEvent::HealthFinished(Ok(info)) => {
            info!(
                service = %info.name,
                version = %info.build_version,
                built = %info.build_time,
                git_tag = %info.git_tag,
                git_hash = %info.git_hash,
                "service reachable"
            );
            state.service_info = Some(info.summary());
            state.dirty = true;
            vec![]
        }
        AppEvent::HealthFinished(Err(e)) => {
            warn!("Health check failed: {}", e);
            vec![]
        }
        AppEvent::BannerExpired => {
            state.banner.hide();
            state.dirty = true;
            vec![]
        }
    }
}

fn handle_submit_finished(
    state: &mut AppState,
    id: String,
    expression: String,
    outcome: Result<(), ApiError>,
) -> Vec<Action> {
    match outcome {
        Ok(()) => {
            state.input.clear();
            state.input.remember(expression.clone());
            state.append_pending(id, expression);
            vec![]
        }
        Err(ApiError::Rejected { status, body }) => {
            error!(id = %id, status, "Error submitting expression: {}", body);
            notify(state, &format!("{}: {}", SUBMIT_REJECTED, status), Some(&body))
        }
        Err(e) => {
            error!(id = %id, "Error submitting expression: {}", e);
            notify(state, SUBMIT_UNREACHABLE, None)
        }
    }
}

fn handle_detail_finished(
    state: &mut AppState,
    id: String,
    outcome: Result<Option<Expression>, ApiError>,
) {
    // Ignore answers for a pane the user has since closed or moved on from.
    if state.detail.as_ref().map(|d| d.id()) != Some(id.as_str()) {
        return;
    }
    let view = match outcome {
        Ok(Some(expr)) => DetailView::Found(expr),
        Ok(None) => DetailView::NotFound { id },
        Err(e) => {
            warn!(id = %id, "Error looking up expression: {}", e);
            DetailView::Failed {
                id,
                error: e.to_string(),
            }
        }
    };
    state.detail = Some(view);
    state.dirty = true;
}

/// Show an error banner and ask for its dismissal to be scheduled.
fn notify(state: &mut AppState, message: &str, detail: Option<&str>) -> Vec<Action> {
    state.banner.show(message, detail);
    state.dirty = true;
    vec![Action::ScheduleBannerDismiss]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::F(5) {
        return vec![Action::Refresh];
    }
    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::ExpressionList => handle_list_key(state, key),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.delete_word_back();
            vec![]
        }
        KeyCode::Char(c) => {
            state.input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        _ => vec![],
    }
}

/// Start a create request for the trimmed input. The input is only cleared
/// once the service accepts it, so a rejected expression can be fixed and
/// resubmitted.
fn submit(state: &mut AppState) -> Vec<Action> {
    let expression = state.input.trimmed();
    if expression.is_empty() {
        return vec![];
    }
    vec![Action::Submit {
        id: generate_expression_id(),
        expression: expression.to_string(),
    }]
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.select_prev(),
        KeyCode::Down => state.select_next(),
        KeyCode::Home => state.select_first(),
        KeyCode::End => state.select_last(),
        KeyCode::Esc => state.detail = None,
        KeyCode::Enter => {
            if let Some(expr) = state.selected_expression() {
                let id = expr.id.clone();
                state.detail = Some(DetailView::Loading { id: id.clone() });
                return vec![Action::Lookup { id }];
            }
        }
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::transport_error;
    use crate::config::AppConfig;
    use serde_json::{json, Value};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    fn completed(id: &str, expression: &str, result: Value) -> Expression {
        Expression {
            id: id.into(),
            expression: expression.into(),
            status: "completed".into(),
            result,
        }
    }

    fn submitted_id(actions: &[Action]) -> String {
        match actions {
            [Action::Submit { id, .. }] => id.clone(),
            other => panic!("expected a single submit, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_input_is_ignored() {
        for text in ["", "   ", "\t  "] {
            let mut state = AppState::new(AppConfig::default());
            type_text(&mut state, text);
            let actions = handle_event(&mut state, key(KeyCode::Enter));
            assert!(actions.is_empty());
            assert!(state.expressions.is_empty());
        }
    }

    #[test]
    fn test_enter_submits_trimmed_text() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "  2+2 ");
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        match actions.as_slice() {
            [Action::Submit { id, expression }] => {
                assert_eq!(expression, "2+2");
                assert_eq!(id.len(), 36);
            }
            other => panic!("unexpected actions: {other:?}"),
        }
        // Not cleared until the service accepts it.
        assert_eq!(state.input.text, "  2+2 ");
        assert!(state.expressions.is_empty());
    }

    #[test]
    fn test_accepted_submission_appends_pending_entry() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "2+2");
        let id = submitted_id(&handle_event(&mut state, key(KeyCode::Enter)));
        state.dirty = false;

        let actions = handle_event(
            &mut state,
            AppEvent::SubmitFinished {
                id: id.clone(),
                expression: "2+2".into(),
                outcome: Ok(()),
            },
        );
        assert!(actions.is_empty());
        assert!(state.input.text.is_empty());
        assert!(state.dirty);
        assert_eq!(state.expressions, vec![Expression::pending(id, "2+2".into())]);
        assert_eq!(state.expressions[0].status, "Pending");
        assert_eq!(state.expressions[0].result, Value::Null);
        assert_eq!(state.input.history, vec!["2+2".to_string()]);
    }

    #[test]
    fn test_pending_entry_reconciled_by_refresh() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "2+2");
        let id = submitted_id(&handle_event(&mut state, key(KeyCode::Enter)));
        handle_event(
            &mut state,
            AppEvent::SubmitFinished {
                id: id.clone(),
                expression: "2+2".into(),
                outcome: Ok(()),
            },
        );

        let server = vec![completed(&id, "2+2", json!(4))];
        handle_event(&mut state, AppEvent::RefreshFinished(Ok(server.clone())));
        assert_eq!(state.expressions, server);
        assert!(state.expressions[0].is_completed());
    }

    #[test]
    fn test_rejected_submission_shows_banner() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "2+");
        let id = submitted_id(&handle_event(&mut state, key(KeyCode::Enter)));

        let actions = handle_event(
            &mut state,
            AppEvent::SubmitFinished {
                id,
                expression: "2+".into(),
                outcome: Err(ApiError::Rejected {
                    status: 500,
                    body: "bad expression".into(),
                }),
            },
        );
        assert_eq!(actions, vec![Action::ScheduleBannerDismiss]);
        assert!(state.banner.visible);
        assert_eq!(state.banner.text, "Error submitting expression: 500: bad expression");
        assert!(state.expressions.is_empty());
        assert_eq!(state.input.text, "2+");
    }

    #[test]
    fn test_rejected_with_empty_body() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(
            &mut state,
            AppEvent::SubmitFinished {
                id: "x".into(),
                expression: "1/0".into(),
                outcome: Err(ApiError::Rejected {
                    status: 422,
                    body: String::new(),
                }),
            },
        );
        assert_eq!(state.banner.text, "Error submitting expression: 422");
    }

    #[test]
    fn test_unreachable_submission_shows_generic_banner() {
        let mut state = AppState::new(AppConfig::default());
        state.append_pending("earlier".into(), "1+1".into());
        let before = state.expressions.clone();

        let actions = handle_event(
            &mut state,
            AppEvent::SubmitFinished {
                id: "x".into(),
                expression: "3*3".into(),
                outcome: Err(transport_error()),
            },
        );
        assert_eq!(actions, vec![Action::ScheduleBannerDismiss]);
        assert_eq!(
            state.banner.text,
            "An error occurred while submitting the expression."
        );
        assert_eq!(state.expressions, before);
    }

    #[test]
    fn test_failed_refresh_keeps_list_and_stays_quiet() {
        let mut state = AppState::new(AppConfig::default());
        state.replace_expressions(vec![completed("a", "1+1", json!(2))]);
        state.append_pending("b".into(), "5-1".into());
        let before = state.expressions.clone();

        let actions = handle_event(&mut state, AppEvent::RefreshFinished(Err(transport_error())));
        assert!(actions.is_empty());
        assert_eq!(state.expressions, before);
        assert!(!state.banner.visible);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut state = AppState::new(AppConfig::default());
        let server = vec![
            completed("a", "1+1", json!(2)),
            Expression {
                id: "b".into(),
                expression: "7*6".into(),
                status: "processing".into(),
                result: Value::Null,
            },
        ];
        handle_event(&mut state, AppEvent::RefreshFinished(Ok(server.clone())));
        let first = state.expressions.clone();
        handle_event(&mut state, AppEvent::RefreshFinished(Ok(server.clone())));
        assert_eq!(state.expressions, first);
        assert_eq!(state.expressions, server);
    }

    #[test]
    fn test_later_response_wins() {
        let mut state = AppState::new(AppConfig::default());
        let newer = vec![completed("a", "1+1", json!(2))];
        let older = vec![Expression::pending("a".into(), "1+1".into())];
        handle_event(&mut state, AppEvent::RefreshFinished(Ok(newer)));
        handle_event(&mut state, AppEvent::RefreshFinished(Ok(older.clone())));
        assert_eq!(state.expressions, older);
    }

    #[test]
    fn test_poll_tick_requests_refresh() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, AppEvent::PollTick), vec![Action::Refresh]);
        assert_eq!(handle_event(&mut state, key(KeyCode::F(5))), vec![Action::Refresh]);
    }

    #[test]
    fn test_banner_expiry_hides_latest_message() {
        let mut state = AppState::new(AppConfig::default());
        for status in [500, 502] {
            handle_event(
                &mut state,
                AppEvent::SubmitFinished {
                    id: "x".into(),
                    expression: "1+".into(),
                    outcome: Err(ApiError::Rejected {
                        status,
                        body: "nope".into(),
                    }),
                },
            );
        }
        assert_eq!(state.banner.text, "Error submitting expression: 502: nope");
        // The first message's timer hides whatever is showing.
        handle_event(&mut state, AppEvent::BannerExpired);
        assert!(!state.banner.visible);
        assert!(state.banner.text.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = AppState::new(AppConfig::default());
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, event), vec![Action::Quit]);
    }

    #[test]
    fn test_list_lookup_flow() {
        let mut state = AppState::new(AppConfig::default());
        state.replace_expressions(vec![
            completed("a", "1+1", json!(2)),
            completed("b", "2+2", json!(4)),
        ]);
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, FocusPanel::ExpressionList);
        handle_event(&mut state, key(KeyCode::Down));
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(actions, vec![Action::Lookup { id: "b".into() }]);
        assert_eq!(state.detail, Some(DetailView::Loading { id: "b".into() }));

        let before = state.expressions.clone();
        handle_event(
            &mut state,
            AppEvent::DetailFinished {
                id: "b".into(),
                outcome: Ok(None),
            },
        );
        assert_eq!(state.detail, Some(DetailView::NotFound { id: "b".into() }));
        assert_eq!(state.expressions, before);

        handle_event(&mut state, key(KeyCode::Esc));
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_stale_lookup_is_dropped() {
        let mut state = AppState::new(AppConfig::default());
        state.detail = Some(DetailView::Loading { id: "new".into() });
        handle_event(
            &mut state,
            AppEvent::DetailFinished {
                id: "old".into(),
                outcome: Ok(None),
            },
        );
        assert_eq!(state.detail, Some(DetailView::Loading { id: "new".into() }));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = AppState::new(AppConfig::default());
        let mut release = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(release)));
        assert!(state.input.text.is_empty());
    }
}
