//! Feed configuration with sane defaults, overridable from the environment.

use chrono::{FixedOffset, Offset, Utc};

use crate::error::FeedError;

/// Incidents shown per page.
pub const PAGE_SIZE: usize = 10;

/// Reference offset used to render incident start dates (UTC+03:00).
const DEFAULT_UTC_OFFSET_SECS: i32 = 3 * 3600;

pub const ENV_PAGE_SIZE: &str = "INCIDENT_FEED_PAGE_SIZE";
pub const ENV_UTC_OFFSET: &str = "INCIDENT_FEED_UTC_OFFSET";
pub const ENV_DATA: &str = "INCIDENT_FEED_DATA";

#[derive(Debug, Clone)]
pub struct Config {
  /// Page window length. Always >= 1.
  pub page_size: usize,
  /// Fixed offset for the "Date : ..." line of each card.
  pub display_offset: FixedOffset,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      page_size: PAGE_SIZE,
      display_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix()),
    }
  }
}

impl Config {
  /// Build from process environment variables.
  pub fn from_env() -> Result<Self, FeedError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from an arbitrary key lookup; unset keys keep their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, FeedError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(raw) = lookup(ENV_PAGE_SIZE) {
      let size: usize = raw
        .trim()
        .parse()
        .map_err(|_| FeedError::validation(ENV_PAGE_SIZE, "expected a positive integer"))?;
      if size == 0 {
        return Err(FeedError::validation(ENV_PAGE_SIZE, "must be >= 1"));
      }
      config.page_size = size;
    }

    if let Some(raw) = lookup(ENV_UTC_OFFSET) {
      config.display_offset = raw
        .trim()
        .parse::<FixedOffset>()
        .map_err(|e| FeedError::parse(format!("{}: invalid UTC offset {:?}: {}", ENV_UTC_OFFSET, raw, e)))?;
    }

    Ok(config)
  }
}
