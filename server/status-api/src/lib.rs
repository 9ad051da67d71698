//! Status Dashboard API
//!
//! HTTP service exposing service-health cards and the incident feed.
//! Bind to 127.0.0.1 by default (internal only).

mod handlers;
mod state;
mod types;

pub use handlers::{feed, health, incidents_health, list_incidents, list_services, router};
pub use state::{AppState, ServerConfig};
pub use types::HealthReply;
