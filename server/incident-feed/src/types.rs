//! Core types for the incident feed (JSON contracts + filter state).

use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Incident record (JSON contract — what the source supplies)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
  Open,
  Mitigated,
  Resolved,
}

impl IncidentStatus {
  pub const ALL: [Self; 3] = [Self::Open, Self::Mitigated, Self::Resolved];

  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "open" => Some(Self::Open),
      "mitigated" => Some(Self::Mitigated),
      "resolved" => Some(Self::Resolved),
      _ => None,
    }
  }

  /// Wire value, also shown verbatim in the card badge.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Open => "open",
      Self::Mitigated => "mitigated",
      Self::Resolved => "resolved",
    }
  }

  /// Label used in the status select.
  pub fn label(self) -> &'static str {
    match self {
      Self::Open => "En cours",
      Self::Mitigated => "Mitigé",
      Self::Resolved => "Résolu",
    }
  }

  pub fn tone(self) -> BadgeTone {
    match self {
      Self::Open => BadgeTone::Danger,
      Self::Mitigated => BadgeTone::Warning,
      Self::Resolved => BadgeTone::Success,
    }
  }
}

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
  Danger,
  Warning,
  Success,
}

/// One incident as supplied by a source. Unknown fields are silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
  pub id: String,
  pub title: String,
  pub sev: u8,
  pub services: Vec<String>,
  pub summary: String,
  pub status: IncidentStatus,
  pub started_at: i64,
  #[serde(default)]
  pub commander: String,
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// A select value: either "all" or one concrete choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
  All,
  Only(T),
}

impl<T> Default for Filter<T> {
  fn default() -> Self {
    Self::All
  }
}

impl<T> Filter<T> {
  pub fn is_all(&self) -> bool {
    matches!(self, Self::All)
  }

  /// `All` admits everything; `Only(v)` defers to the predicate.
  pub fn admits(&self, pred: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Self::All => true,
      Self::Only(v) => pred(v),
    }
  }
}

impl<T: Serialize> Serialize for Filter<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::All => serializer.serialize_str("all"),
      Self::Only(v) => v.serialize(serializer),
    }
  }
}

/// User-chosen predicates plus the 1-based page cursor.
///
/// Changing any predicate through the setters resets `page` to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
  pub status: Filter<IncidentStatus>,
  pub sev: Filter<u8>,
  pub service: Filter<String>,
  pub search: String,
  pub page: u32,
}

impl Default for FilterState {
  fn default() -> Self {
    Self {
      status: Filter::All,
      sev: Filter::All,
      service: Filter::All,
      search: String::new(),
      page: 1,
    }
  }
}

impl FilterState {
  pub fn set_status(&mut self, status: Filter<IncidentStatus>) {
    self.status = status;
    self.page = 1;
  }

  pub fn set_sev(&mut self, sev: Filter<u8>) {
    self.sev = sev;
    self.page = 1;
  }

  pub fn set_service(&mut self, service: Filter<String>) {
    self.service = service;
    self.page = 1;
  }

  pub fn set_search(&mut self, search: impl Into<String>) {
    self.search = search.into();
    self.page = 1;
  }
}

// ---------------------------------------------------------------------------
// Inbound query (JSON / query-string contract)
// ---------------------------------------------------------------------------

/// Raw feed query as sent by a caller; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub sev: Option<String>,
  #[serde(default)]
  pub service: Option<String>,
  #[serde(default)]
  pub q: Option<String>,
  #[serde(default)]
  pub page: Option<PageParam>,
}

/// Page cursor as received: a JSON number, or text from a query string.
///
/// Kept raw so that a malformed page is reported like any other bad field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PageParam {
  Number(i64),
  Text(String),
}

impl From<u32> for PageParam {
  fn from(page: u32) -> Self {
    Self::Number(i64::from(page))
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
  pub text: String,
  pub tone: BadgeTone,
}

/// One rendered incident summary.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentCard {
  pub id: String,
  pub title: String,
  pub badge: StatusBadge,
  pub summary: String,
  pub services: String,
  pub sev: u8,
  pub commander: String,
  pub started_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
  pub value: String,
  pub label: String,
}

impl SelectOption {
  pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      value: value.into(),
      label: label.into(),
    }
  }
}

/// Labels and choices for every control of the incidents view.
#[derive(Debug, Clone, Serialize)]
pub struct Controls {
  pub search_placeholder: String,
  pub status_options: Vec<SelectOption>,
  pub severity_options: Vec<SelectOption>,
  pub service_options: Vec<SelectOption>,
  pub previous_label: String,
  pub next_label: String,
}

/// Everything needed to draw one page of the incidents view.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
  pub heading: String,
  pub filters: FilterState,
  pub items: Vec<IncidentCard>,
  pub total_matches: usize,
  pub page: u32,
  pub total_pages: u32,
  pub page_indicator: String,
  pub has_previous: bool,
  pub has_next: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub empty_message: Option<String>,
  pub controls: Controls,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_parses_loosely() {
    assert_eq!(IncidentStatus::from_str_loose(" Open "), Some(IncidentStatus::Open));
    assert_eq!(IncidentStatus::from_str_loose("RESOLVED"), Some(IncidentStatus::Resolved));
    assert_eq!(IncidentStatus::from_str_loose("closed"), None);
  }

  #[test]
  fn every_predicate_setter_resets_page() {
    let mut state = FilterState { page: 4, ..FilterState::default() };
    state.set_status(Filter::Only(IncidentStatus::Open));
    assert_eq!(state.page, 1);

    state.page = 3;
    state.set_sev(Filter::Only(2));
    assert_eq!(state.page, 1);

    state.page = 2;
    state.set_service(Filter::Only("db".into()));
    assert_eq!(state.page, 1);

    state.page = 5;
    state.set_search("inc");
    assert_eq!(state.page, 1);
  }

  #[test]
  fn filter_serializes_all_as_string() {
    let state = FilterState {
      sev: Filter::Only(2),
      ..FilterState::default()
    };
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["status"], "all");
    assert_eq!(json["sev"], 2);
    assert_eq!(json["service"], "all");
    assert_eq!(json["page"], 1);
  }

  #[test]
  fn incident_without_commander_deserializes() {
    let json = r#"{
      "id": "INC-9", "title": "t", "sev": 2, "services": ["api"],
      "summary": "s", "status": "mitigated", "started_at": 10,
      "extra": true
    }"#;
    let incident: Incident = serde_json::from_str(json).unwrap();
    assert_eq!(incident.status, IncidentStatus::Mitigated);
    assert!(incident.commander.is_empty());
  }
}
