//! Multi-predicate filtering, recency ordering and service-option derivation.

use std::collections::HashSet;

use crate::types::{FilterState, Incident};

/// Does `incident` satisfy every active predicate of `filters`?
pub fn matches(incident: &Incident, filters: &FilterState) -> bool {
  let status_match = filters.status.admits(|s| incident.status == *s);
  let sev_match = filters.sev.admits(|sev| incident.sev == *sev);
  let service_match = filters.service.admits(|wanted| {
    let wanted = wanted.to_lowercase();
    incident.services.iter().any(|s| s.to_lowercase() == wanted)
  });
  let search_match = filters.search.is_empty()
    || incident.id.to_lowercase().contains(&filters.search.to_lowercase());

  status_match && sev_match && service_match && search_match
}

/// Select the incidents admitted by `filters`, most recent first.
///
/// The sort is stable, so incidents sharing a `started_at` keep their
/// source order. The page cursor in `filters` is ignored here.
pub fn compute_filtered<'a>(incidents: &'a [Incident], filters: &FilterState) -> Vec<&'a Incident> {
  let mut out: Vec<&Incident> = incidents.iter().filter(|i| matches(i, filters)).collect();
  out.sort_by(|a, b| b.started_at.cmp(&a.started_at));
  out
}

/// Distinct service tags in first-seen order across the list.
pub fn derive_service_options(incidents: &[Incident]) -> Vec<String> {
  let mut seen: HashSet<&str> = HashSet::new();
  let mut out = Vec::new();
  for tag in incidents.iter().flat_map(|i| i.services.iter()) {
    if seen.insert(tag.as_str()) {
      out.push(tag.clone());
    }
  }
  out
}
