//! Session lifecycle: the reads issued at startup, the recurring poll, the
//! dispatch of handler actions, and teardown. Nothing here touches the
//! terminal; `main` only adds input and drawing around it.

use crate::api::manager::RequestDispatch;
use crate::api::poller::Poller;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::notifier;
use crate::app::state::AppState;
use crate::config::AppConfig;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct Session<R> {
    requests: R,
    poller: Poller,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    banner_timeout: Duration,
}

impl<R: RequestDispatch> Session<R> {
    /// Request the service info and the first listing, then start polling.
    /// The first poll tick follows one interval later.
    pub fn start(
        requests: R,
        config: &AppConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        requests.check_health();
        requests.refresh();
        let poller = Poller::start(config.polling.interval(), event_tx.clone());
        Self {
            requests,
            poller,
            event_tx,
            banner_timeout: config.ui.banner_timeout(),
        }
    }

    /// Run one event through the handler and carry out what it asks for.
    pub fn process(&self, state: &mut AppState, event: AppEvent) {
        for action in handler::handle_event(state, event) {
            debug!(?action, "dispatching");
            match action {
                Action::Submit { id, expression } => self.requests.submit(id, expression),
                Action::Refresh => self.requests.refresh(),
                Action::Lookup { id } => self.requests.lookup(id),
                Action::ScheduleBannerDismiss => {
                    notifier::schedule_dismiss(self.banner_timeout, self.event_tx.clone())
                }
                Action::Quit => state.should_quit = true,
            }
        }
    }

    /// Stop polling. Requests still in flight finish on their own and their
    /// results are dropped with the channel.
    pub fn shutdown(self) {
        self.poller.stop();
        info!("shutting down");
    }
}
