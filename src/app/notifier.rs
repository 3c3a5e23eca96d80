//! Transient error banner.
//!
//! Each message schedules its own dismissal. Timers are not de-duplicated:
//! an earlier message's timer can hide a later message before its own
//! delay has elapsed.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Join a message and optional detail as `"message: detail"`.
pub fn compose_message(message: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{}: {}", message, detail),
        _ => message.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct Banner {
    pub visible: bool,
    pub text: String,
}

impl Banner {
    pub fn show(&mut self, message: &str, detail: Option<&str>) {
        self.text = compose_message(message, detail);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.text.clear();
    }
}

/// Send [`AppEvent::BannerExpired`] after `delay`.
pub fn schedule_dismiss(delay: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = event_tx.send(AppEvent::BannerExpired);
    });
}
