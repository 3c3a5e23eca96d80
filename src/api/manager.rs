//! Request dispatch.
//!
//! Every call runs on its own task and reports back through the event
//! channel, so overlapping submissions and refreshes never block the event
//! loop or each other. Responses are applied in arrival order.

use crate::api::client::ApiClient;
use crate::api::types::NewExpression;
use crate::app::event::AppEvent;
use tokio::sync::mpsc;

/// The requests the event loop can issue. Each call returns immediately and
/// its outcome arrives later as an [`AppEvent`].
pub trait RequestDispatch {
    fn submit(&self, id: String, expression: String);
    fn refresh(&self);
    fn lookup(&self, id: String);
    fn check_health(&self);
}

pub struct ApiManager {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ApiManager {
    pub fn new(client: ApiClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }
}

impl RequestDispatch for ApiManager {
    fn submit(&self, id: String, expression: String) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = client
                .create_expression(&NewExpression {
                    id: &id,
                    expression: &expression,
                })
                .await;
            let _ = tx.send(AppEvent::SubmitFinished {
                id,
                expression,
                outcome,
            });
        });
    }

    fn refresh(&self) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = client.list_expressions().await;
            let _ = tx.send(AppEvent::RefreshFinished(outcome));
        });
    }

    fn lookup(&self, id: String) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = client.get_expression(&id).await;
            let _ = tx.send(AppEvent::DetailFinished { id, outcome });
        });
    }

    fn check_health(&self) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = client.health().await;
            let _ = tx.send(AppEvent::HealthFinished(outcome));
        });
    }
}
