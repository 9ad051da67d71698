//! Incident sources: where the feed gets its list from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FeedError;
use crate::types::{Incident, IncidentStatus};

/// Supplies the full incident list in source order.
pub trait IncidentSource: Send + Sync {
  fn load(&self) -> Result<Vec<Incident>, FeedError>;
}

/// A fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
  incidents: Vec<Incident>,
}

impl StaticSource {
  pub fn new(incidents: Vec<Incident>) -> Self {
    Self { incidents }
  }

  pub fn sample() -> Self {
    Self::new(sample_incidents())
  }
}

impl IncidentSource for StaticSource {
  fn load(&self) -> Result<Vec<Incident>, FeedError> {
    Ok(self.incidents.clone())
  }
}

/// A JSON file holding an array of incident records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
  path: PathBuf,
}

impl JsonFileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl IncidentSource for JsonFileSource {
  fn load(&self) -> Result<Vec<Incident>, FeedError> {
    let raw = std::fs::read_to_string(&self.path)?;
    let incidents = parse_incidents(&raw)?;
    debug!(path = %self.path.display(), count = incidents.len(), "loaded incidents");
    Ok(incidents)
  }
}

/// Parse a JSON array of incidents and check record invariants.
pub fn parse_incidents(raw: &str) -> Result<Vec<Incident>, FeedError> {
  let incidents: Vec<Incident> = serde_json::from_str(raw)?;
  validate(&incidents)?;
  Ok(incidents)
}

/// Ids non-empty and unique, sev >= 1, at least one service, started_at >= 0.
pub fn validate(incidents: &[Incident]) -> Result<(), FeedError> {
  let mut ids: HashSet<&str> = HashSet::new();
  for incident in incidents {
    if incident.id.is_empty() {
      return Err(FeedError::validation("id", "must not be empty"));
    }
    if !ids.insert(incident.id.as_str()) {
      return Err(FeedError::validation(
        "id",
        &format!("duplicate incident id {}", incident.id),
      ));
    }
    if incident.sev == 0 {
      return Err(FeedError::validation("sev", "must be >= 1"));
    }
    if incident.services.is_empty() {
      return Err(FeedError::validation("services", "must have at least one tag"));
    }
    if incident.started_at < 0 {
      return Err(FeedError::validation("started_at", "must not be negative"));
    }
  }
  Ok(())
}

#[allow(clippy::too_many_arguments)]
fn sample(
  id: &str,
  title: &str,
  sev: u8,
  services: &[&str],
  summary: &str,
  status: IncidentStatus,
  started_at: i64,
  commander: &str,
) -> Incident {
  Incident {
    id: id.into(),
    title: title.into(),
    sev,
    services: services.iter().map(|s| s.to_string()).collect(),
    summary: summary.into(),
    status,
    started_at,
    commander: commander.into(),
  }
}

/// Demo data served when no incident file is configured.
pub fn sample_incidents() -> Vec<Incident> {
  vec![
    sample(
      "INC-001",
      "Panne de la base de données principale",
      1,
      &["db", "backend"],
      "La base de données principale ne répond plus.",
      IncidentStatus::Open,
      1730073600,
      "f6c74e13-8b4a-4b63-bf58-1c59a0c21840",
    ),
    sample(
      "INC-002",
      "Latence API Europe",
      2,
      &["api"],
      "Les temps de réponse API dépassaient 2s en EU-West.",
      IncidentStatus::Resolved,
      1730077200,
      "a3d11f92-4b76-46c0-9e83-6f23a28c91a0",
    ),
    sample(
      "INC-003",
      "Erreurs de cache CDN",
      3,
      &["cdn"],
      "Taux d'erreurs 5xx élevé sur les assets statiques.",
      IncidentStatus::Mitigated,
      1730080800,
      "7b2e4c18-5d9a-4f1e-8c3b-2a6d9e0f1b47",
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sample_data_is_valid() {
    assert!(validate(&sample_incidents()).is_ok());
    assert_eq!(StaticSource::sample().load().unwrap().len(), 3);
  }

  #[test]
  fn duplicate_ids_are_rejected() {
    let mut list = sample_incidents();
    list[1].id = "INC-001".into();
    let err = validate(&list).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
  }

  #[test]
  fn empty_services_are_rejected() {
    let mut list = sample_incidents();
    list[0].services.clear();
    let err = validate(&list).unwrap_err();
    assert!(err.to_string().contains("services"));
  }

  #[test]
  fn negative_timestamp_is_rejected() {
    let mut list = sample_incidents();
    list[2].started_at = -5;
    let err = validate(&list).unwrap_err();
    assert!(err.to_string().contains("started_at"));
  }

  #[test]
  fn bad_status_is_a_json_error() {
    let raw = r#"[{"id":"X","title":"t","sev":1,"services":["a"],"summary":"","status":"closed","started_at":1}]"#;
    assert!(matches!(parse_incidents(raw), Err(FeedError::Json(_))));
  }

  #[test]
  fn missing_file_is_io_error() {
    let source = JsonFileSource::new("/nonexistent/incidents.json");
    assert!(matches!(source.load(), Err(FeedError::Io(_))));
  }
}
