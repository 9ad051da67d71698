//! HTTP handlers for the dashboard API.

use axum::{
  extract::{rejection::QueryRejection, Query, State},
  http::StatusCode,
  routing::get,
  Json, Router,
};
use incident_feed::services::{self, ServiceBoard};
use incident_feed::types::ErrorOutput;
use incident_feed::{FeedError, FeedPage, FeedQuery, Incident};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;
use crate::types::HealthReply;

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/api/v1/incidents", get(list_incidents))
    .route("/api/v1/incidents/health", get(incidents_health))
    .route("/api/v1/incidents/feed", get(feed))
    .route("/api/v1/services", get(list_services))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn health() -> &'static str {
  "ok"
}

pub async fn incidents_health() -> Json<HealthReply> {
  Json(HealthReply {
    status: "ok",
    service: "incidents",
  })
}

/// Full list in source order, unfiltered.
pub async fn list_incidents(State(state): State<Arc<AppState>>) -> Json<Vec<Incident>> {
  Json(state.feed.incidents().to_vec())
}

pub async fn feed(
  State(state): State<Arc<AppState>>,
  query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<FeedPage>, (StatusCode, Json<ErrorOutput>)> {
  let Query(query) = match query {
    Ok(q) => q,
    Err(rejection) => {
      warn!("feed: undecodable query: {}", rejection.body_text());
      return Err((
        StatusCode::BAD_REQUEST,
        Json(ErrorOutput::new(format!("query: {}", rejection.body_text()))),
      ));
    }
  };

  match state.feed.query(&query) {
    Ok(page) => Ok(Json(page)),
    Err(e) => {
      warn!("feed: rejected query: {}", e);
      let body = match &e {
        FeedError::Validation { field, reason } => ErrorOutput::new(reason.clone()).with_field(field.clone()),
        _ => ErrorOutput::new(e.to_string()),
      };
      Err((StatusCode::BAD_REQUEST, Json(body)))
    }
  }
}

pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<ServiceBoard> {
  Json(services::board(&state.services))
}
