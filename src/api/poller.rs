use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Recurring refresh timer. The first tick fires one period after start;
/// the startup refresh is requested separately.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    pub fn start(period: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if event_tx.send(AppEvent::PollTick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Cancel the timer. In-flight requests are left alone.
    pub fn stop(self) {
        self.handle.abort();
    }
}
