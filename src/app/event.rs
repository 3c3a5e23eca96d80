use crate::api::client::ApiError;
use crate::api::types::{Expression, HealthInfo};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The refresh timer fired
    PollTick,

    /// A create request completed
    SubmitFinished {
        id: String,
        expression: String,
        outcome: Result<(), ApiError>,
    },

    /// A list request completed
    RefreshFinished(Result<Vec<Expression>, ApiError>),

    /// A single-expression lookup completed
    DetailFinished {
        id: String,
        outcome: Result<Option<Expression>, ApiError>,
    },

    /// The health probe completed
    HealthFinished(Result<HealthInfo, ApiError>),

    /// A banner dismissal timer fired
    BannerExpired,
}
