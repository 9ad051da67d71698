//! Binary entrypoint: read feed queries as JSON lines from stdin, write
//! rendered pages as JSON lines to stdout.
//!
//! Each input line is a FeedQuery. Output lines are either:
//! - A FeedPage (the requested page of the filtered incidents)
//! - An ErrorOutput (when the query fails validation)
//!
//! Incidents come from the file named by INCIDENT_FEED_DATA, or the
//! built-in sample list when it is unset. Logs go to stderr.

use incident_feed::config::ENV_DATA;
use incident_feed::types::ErrorOutput;
use incident_feed::{Config, Feed, FeedError, FeedQuery, IncidentSource, JsonFileSource, StaticSource};
use std::io::{self, BufRead, Write};
use tracing::{error, info};

fn main() {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let feed = match load_feed() {
    Ok(f) => f,
    Err(e) => {
      error!("incident-feed: startup failed: {}", e);
      std::process::exit(1);
    }
  };
  info!(
    incidents = feed.incidents().len(),
    page_size = feed.config().page_size,
    "incident-feed ready"
  );

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        error!("incident-feed: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let raw: FeedQuery = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    match feed.query(&raw) {
      Ok(page) => {
        let _ = serde_json::to_writer(&mut out, &page);
        let _ = writeln!(out);
      }
      Err(e) => {
        let err = match &e {
          FeedError::Validation { field, reason } => ErrorOutput::new(reason.clone()).with_field(field.clone()),
          _ => ErrorOutput::new(e.to_string()),
        };
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }
  }

  let _ = out.flush();
}

fn load_feed() -> Result<Feed, FeedError> {
  let config = Config::from_env()?;
  let source: Box<dyn IncidentSource> = match std::env::var(ENV_DATA) {
    Ok(path) if !path.trim().is_empty() => {
      info!(path = %path, "loading incidents from file");
      Box::new(JsonFileSource::new(path))
    }
    _ => Box::new(StaticSource::sample()),
  };
  Feed::from_source(source.as_ref(), config)
}
