use crate::api::types::Expression;
use crate::app::notifier::Banner;
use crate::config::AppConfig;
use chrono::{DateTime, Local};
use std::fmt::Write;

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
    max_history: usize,
}

impl InputState {
    pub fn new(max_history: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            max_history,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// The text as it would be submitted.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Record an accepted submission. Consecutive duplicates are collapsed.
    pub fn remember(&mut self, entry: String) {
        if entry.is_empty() || self.history.last() == Some(&entry) {
            return;
        }
        self.history.push(entry);
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Input,
    ExpressionList,
}

/// What the detail pane currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading { id: String },
    Found(Expression),
    NotFound { id: String },
    Failed { id: String, error: String },
}

impl DetailView {
    pub fn id(&self) -> &str {
        match self {
            DetailView::Loading { id }
            | DetailView::NotFound { id }
            | DetailView::Failed { id, .. } => id,
            DetailView::Found(expr) => &expr.id,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    /// Local view of the service's expressions, in display order.
    pub expressions: Vec<Expression>,
    pub input: InputState,
    pub banner: Banner,
    pub focus: FocusPanel,
    pub selected: usize,
    pub detail: Option<DetailView>,
    pub service_info: Option<String>,
    pub last_refresh: Option<DateTime<Local>>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let input = InputState::new(config.ui.max_history);
        Self {
            config,
            expressions: Vec::new(),
            input,
            banner: Banner::default(),
            focus: FocusPanel::Input,
            selected: 0,
            detail: None,
            service_info: None,
            last_refresh: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Optimistically record an expression the service just accepted.
    pub fn append_pending(&mut self, id: String, expression: String) {
        self.expressions.push(Expression::pending(id, expression));
        self.dirty = true;
    }

    /// Adopt the service's list wholesale. Local entries the service does
    /// not report yet are dropped.
    pub fn replace_expressions(&mut self, expressions: Vec<Expression>) {
        self.expressions = expressions;
        self.clamp_selection();
        self.last_refresh = Some(Local::now());
        self.dirty = true;
    }

    pub fn selected_expression(&self) -> Option<&Expression> {
        self.expressions.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.expressions.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.expressions.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.expressions.len().saturating_sub(1));
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::ExpressionList,
            FocusPanel::ExpressionList => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn completed_count(&self) -> usize {
        self.expressions.iter().filter(|e| e.is_completed()).count()
    }

    pub fn status_line(&self) -> String {
        let service = self
            .service_info
            .as_deref()
            .unwrap_or(&self.config.server.base_url);
        let mut s = format!(
            "{} | Expressions: {} ({} completed)",
            service,
            self.expressions.len(),
            self.completed_count()
        );
        if let Some(at) = self.last_refresh {
            // A bad specifier makes `Display` fail; drop the timestamp rather
            // than panic mid-draw.
            let mut stamp = String::new();
            if write!(stamp, "{}", at.format(&self.config.ui.timestamp_format)).is_ok() {
                s.push_str(" | Refreshed ");
                s.push_str(&stamp);
            }
        }
        s
    }
}
