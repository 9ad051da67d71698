//! Turn a filtered page window into cards, labels and pagination metadata.

use chrono::{DateTime, FixedOffset};

use crate::config::Config;
use crate::paginate::{self, PageWindow};
use crate::types::*;

pub const HEADING: &str = "Incidents récents";
pub const SEARCH_PLACEHOLDER: &str = "Rechercher par ID";
pub const ALL_STATUSES: &str = "Tous les statuts";
pub const ALL_SEVERITIES: &str = "Toutes sévérités";
pub const ALL_SERVICES: &str = "Tous les services";
pub const PREVIOUS: &str = "Précédent";
pub const NEXT: &str = "Suivant";
pub const EMPTY_MESSAGE: &str = "Aucun incident ne correspond aux filtres.";

/// Severities offered by the severity select.
pub const SEVERITY_CHOICES: [u8; 4] = [1, 2, 3, 4];

/// Render `started_at` as "DD/MM/YYYY, HH:MM:SS" in `offset`.
///
/// Timestamps chrono cannot represent fall back to the raw number.
pub fn format_incident_date(started_at: i64, offset: &FixedOffset) -> String {
  match DateTime::from_timestamp(started_at, 0) {
    Some(dt) => dt.with_timezone(offset).format("%d/%m/%Y, %H:%M:%S").to_string(),
    None => started_at.to_string(),
  }
}

pub fn page_indicator(page: u32, displayed_total: u32) -> String {
  format!("Page {} / {}", page, displayed_total)
}

pub fn card(incident: &Incident, config: &Config) -> IncidentCard {
  IncidentCard {
    id: incident.id.clone(),
    title: incident.title.clone(),
    badge: StatusBadge {
      text: incident.status.as_str().to_string(),
      tone: incident.status.tone(),
    },
    summary: incident.summary.clone(),
    services: incident.services.join(", "),
    sev: incident.sev,
    commander: incident.commander.clone(),
    started_at: format_incident_date(incident.started_at, &config.display_offset),
  }
}

pub fn controls(service_options: &[String]) -> Controls {
  let mut status_options = vec![SelectOption::new("all", ALL_STATUSES)];
  status_options.extend(
    IncidentStatus::ALL
      .iter()
      .map(|s| SelectOption::new(s.as_str(), s.label())),
  );

  let mut severity_options = vec![SelectOption::new("all", ALL_SEVERITIES)];
  severity_options.extend(
    SEVERITY_CHOICES
      .iter()
      .map(|n| SelectOption::new(n.to_string(), n.to_string())),
  );

  let mut services = vec![SelectOption::new("all", ALL_SERVICES)];
  services.extend(service_options.iter().map(|s| SelectOption::new(s.as_str(), s.as_str())));

  Controls {
    search_placeholder: SEARCH_PLACEHOLDER.into(),
    status_options,
    severity_options,
    service_options: services,
    previous_label: PREVIOUS.into(),
    next_label: NEXT.into(),
  }
}

/// Assemble the full page payload.
pub fn feed_page(
  window: &PageWindow<'_, &Incident>,
  total_matches: usize,
  filters: &FilterState,
  service_options: &[String],
  config: &Config,
) -> FeedPage {
  let displayed_total = window.displayed_total_pages();
  FeedPage {
    heading: HEADING.into(),
    filters: filters.clone(),
    items: window.items.iter().map(|i| card(i, config)).collect(),
    total_matches,
    page: window.page,
    total_pages: displayed_total,
    page_indicator: page_indicator(window.page, displayed_total),
    has_previous: paginate::previous_page(window.page).is_some(),
    has_next: paginate::next_page(window.page, window.total_pages).is_some(),
    empty_message: (total_matches == 0).then(|| EMPTY_MESSAGE.to_string()),
    controls: controls(service_options),
  }
}
