//! Status Dashboard Incident Feed — deterministic filter/sort/paginate engine.
//!
//! Takes an incident list from an injected source, applies status, severity,
//! service and ID-search predicates, orders by most recent start, and slices
//! the result into fixed-size pages rendered as cards with pagination
//! metadata. Also carries the service-health catalog shown on the dashboard.
//!
//! No DB, no network; pure computation over an in-memory list.

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod query;
pub mod render;
pub mod services;
pub mod source;
pub mod types;

pub use config::Config;
pub use engine::{Feed, IncidentsView};
pub use error::FeedError;
pub use source::{IncidentSource, JsonFileSource, StaticSource};
pub use types::{FeedPage, FeedQuery, FilterState, Incident};
