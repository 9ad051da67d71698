//! Shared application state and startup configuration.

use incident_feed::config::ENV_DATA;
use incident_feed::services::{self, ServiceHealth};
use incident_feed::{Config, Feed, FeedError, IncidentSource, JsonFileSource, StaticSource};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_PORT: u16 = 5000;

/// Loaded once at startup; read-only afterwards.
pub struct AppState {
  pub feed: Feed,
  pub services: Vec<ServiceHealth>,
}

impl AppState {
  pub fn new(feed: Feed, services: Vec<ServiceHealth>) -> Self {
    Self { feed, services }
  }

  /// Sample incidents and the default service catalog.
  pub fn sample() -> Self {
    Self::new(
      Feed::with_defaults(incident_feed::source::sample_incidents()),
      services::default_catalog(),
    )
  }

  pub fn load(config: &ServerConfig) -> Result<Self, FeedError> {
    let source: Box<dyn IncidentSource> = match &config.data_path {
      Some(path) => {
        info!(path = %path.display(), "loading incidents from file");
        Box::new(JsonFileSource::new(path.clone()))
      }
      None => Box::new(StaticSource::sample()),
    };
    let feed = Feed::from_source(source.as_ref(), config.feed.clone())?;
    Ok(Self::new(feed, services::default_catalog()))
  }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub port: u16,
  pub data_path: Option<PathBuf>,
  pub feed: Config,
}

impl ServerConfig {
  pub fn from_env() -> Result<Self, FeedError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, FeedError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let port = match lookup("PORT") {
      Some(raw) => raw
        .trim()
        .parse()
        .map_err(|_| FeedError::validation("PORT", "must be a valid u16"))?,
      None => DEFAULT_PORT,
    };
    let data_path = lookup(ENV_DATA)
      .filter(|p| !p.trim().is_empty())
      .map(PathBuf::from);
    let feed = Config::from_lookup(&lookup)?;
    Ok(Self { port, data_path, feed })
  }
}
