//! Calculator service layer: HTTP client, request dispatch, and the refresh timer.

pub mod client;
pub mod manager;
pub mod poller;
pub mod types;
