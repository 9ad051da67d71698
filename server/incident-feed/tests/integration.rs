//! Integration tests for the incident feed.

use incident_feed::filter::{compute_filtered, derive_service_options, matches};
use incident_feed::paginate::{compute_page, total_pages};
use incident_feed::source::parse_incidents;
use incident_feed::types::{Filter, IncidentStatus};
use incident_feed::{Config, Feed, FeedQuery, FilterState, Incident};

fn fixture_incidents() -> Vec<Incident> {
  let json = r#"[
    {"id": "INC-001", "title": "Panne de la base de données principale", "sev": 1,
     "services": ["db", "backend"], "summary": "La base de données principale ne répond plus.",
     "status": "open", "started_at": 1730073600,
     "commander": "f6c74e13-8b4a-4b63-bf58-1c59a0c21840"},
    {"id": "INC-002", "title": "Latence API Europe", "sev": 2,
     "services": ["api"], "summary": "Les temps de réponse API dépassaient 2s en EU-West.",
     "status": "resolved", "started_at": 1730077200,
     "commander": "a3d11f92-4b76-46c0-9e83-6f23a28c91a0"},
    {"id": "INC-003", "title": "Erreurs CDN", "sev": 3,
     "services": ["cdn"], "summary": "Assets indisponibles.",
     "status": "mitigated", "started_at": 1730080800, "commander": "ops"}
  ]"#;
  parse_incidents(json).unwrap()
}

/// Deterministic pseudo-random incident list (no external RNG).
fn generated(n: usize, seed: u64) -> Vec<Incident> {
  let mut x = seed.max(1);
  let mut next = move || {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
  };
  let tags = ["api", "DB", "db", "cdn", "Auth", "queue"];
  (0..n)
    .map(|i| {
      let r = next();
      let status = IncidentStatus::ALL[(r % 3) as usize];
      let first = tags[(r >> 8) as usize % tags.len()];
      let second = tags[(r >> 16) as usize % tags.len()];
      Incident {
        id: format!("INC-{:04}", i),
        title: format!("Incident {}", i),
        sev: ((r >> 24) % 4) as u8 + 1,
        services: vec![first.to_string(), second.to_string()],
        summary: String::new(),
        status,
        // Coarse timestamps so ties happen.
        started_at: 1_730_000_000 + ((r >> 32) % 20) as i64 * 3600,
        commander: String::new(),
      }
    })
    .collect()
}

fn filter_grid() -> Vec<FilterState> {
  let mut out = Vec::new();
  let statuses = [
    Filter::All,
    Filter::Only(IncidentStatus::Open),
    Filter::Only(IncidentStatus::Resolved),
  ];
  let sevs = [Filter::All, Filter::Only(1), Filter::Only(4)];
  let services = [Filter::All, Filter::Only("db".to_string()), Filter::Only("AUTH".to_string())];
  let searches = ["", "00", "inc-001"];
  for status in &statuses {
    for sev in &sevs {
      for service in &services {
        for search in searches {
          out.push(FilterState {
            status: status.clone(),
            sev: sev.clone(),
            service: service.clone(),
            search: search.to_string(),
            page: 1,
          });
        }
      }
    }
  }
  out
}

fn ids(list: &[&Incident]) -> Vec<String> {
  list.iter().map(|i| i.id.clone()).collect()
}

#[test]
fn documented_scenarios() {
  let data = fixture_incidents();

  let all = compute_filtered(&data, &FilterState::default());
  assert_eq!(ids(&all), vec!["INC-003", "INC-002", "INC-001"]);

  let open = FilterState {
    status: Filter::Only(IncidentStatus::Open),
    ..FilterState::default()
  };
  assert_eq!(ids(&compute_filtered(&data, &open)), vec!["INC-001"]);

  let db = FilterState {
    service: Filter::Only("db".into()),
    ..FilterState::default()
  };
  assert_eq!(ids(&compute_filtered(&data, &db)), vec!["INC-001"]);

  let search = FilterState {
    search: "002".into(),
    ..FilterState::default()
  };
  assert_eq!(ids(&compute_filtered(&data, &search)), vec!["INC-002"]);

  let window = compute_page(&all, 1, 10);
  assert_eq!(window.items.len(), 3);
  assert_eq!(window.total_pages, 1);
}

#[test]
fn empty_list_scenario() {
  let data: Vec<Incident> = Vec::new();
  assert!(derive_service_options(&data).is_empty());
  let filtered = compute_filtered(&data, &FilterState::default());
  let window = compute_page(&filtered, 1, 10);
  assert!(window.items.is_empty());
  assert_eq!(window.displayed_total_pages(), 1);
}

#[test]
fn every_result_satisfies_predicates_and_is_sorted() {
  let data = generated(120, 42);
  for filters in filter_grid() {
    let out = compute_filtered(&data, &filters);
    assert!(out.iter().all(|i| matches(i, &filters)), "{:?}", filters);
    assert!(out.windows(2).all(|w| w[0].started_at >= w[1].started_at));
    let excluded = data.iter().filter(|i| !matches(i, &filters)).count();
    assert_eq!(out.len() + excluded, data.len());
  }
}

#[test]
fn filtering_is_idempotent() {
  let data = generated(80, 7);
  for filters in filter_grid() {
    let once: Vec<Incident> = compute_filtered(&data, &filters).into_iter().cloned().collect();
    let twice: Vec<Incident> = compute_filtered(&once, &filters).into_iter().cloned().collect();
    assert_eq!(once, twice);
  }
}

#[test]
fn pages_reassemble_filtered_sequence() {
  let data = generated(57, 99);
  for filters in filter_grid() {
    let filtered = compute_filtered(&data, &filters);
    let total = total_pages(filtered.len(), 10);
    let mut joined: Vec<&Incident> = Vec::new();
    for page in 1..=total {
      let window = compute_page(&filtered, page, 10);
      assert!(window.displayed_total_pages() >= 1);
      joined.extend_from_slice(window.items);
    }
    assert_eq!(ids(&joined), ids(&filtered));
  }
}

#[test]
fn feed_query_renders_cards() {
  let feed = Feed::new(fixture_incidents(), Config::default());
  let page = feed
    .query(&FeedQuery {
      status: Some("open".into()),
      ..FeedQuery::default()
    })
    .unwrap();

  assert_eq!(page.heading, "Incidents récents");
  assert_eq!(page.items.len(), 1);
  let card = &page.items[0];
  assert_eq!(card.title, "Panne de la base de données principale");
  assert_eq!(card.services, "db, backend");
  assert_eq!(card.sev, 1);
  assert_eq!(card.started_at, "28/10/2024, 03:00:00");
  assert_eq!(page.page_indicator, "Page 1 / 1");
}

#[test]
fn feed_page_json_shape() {
  let feed = Feed::with_defaults(fixture_incidents());
  let page = feed.query(&FeedQuery::default()).unwrap();
  let json = serde_json::to_value(&page).unwrap();

  assert_eq!(json["filters"]["status"], "all");
  assert_eq!(json["items"][0]["id"], "INC-003");
  assert_eq!(json["items"][0]["badge"]["text"], "mitigated");
  assert_eq!(json["items"][0]["badge"]["tone"], "warning");
  assert_eq!(json["total_pages"], 1);
  assert!(json.get("empty_message").is_none());
  assert_eq!(json["controls"]["service_options"][1]["value"], "db");
}

#[test]
fn page_beyond_range_is_empty_but_keeps_number() {
  let feed = Feed::with_defaults(fixture_incidents());
  let page = feed
    .query(&FeedQuery {
      page: Some(3u32.into()),
      ..FeedQuery::default()
    })
    .unwrap();
  assert!(page.items.is_empty());
  assert_eq!(page.page, 3);
  assert_eq!(page.page_indicator, "Page 3 / 1");
  assert!(page.has_previous);
  assert!(page.has_next);
  assert!(page.empty_message.is_none());
}

#[test]
fn custom_page_size_splits_pages() {
  let config = Config {
    page_size: 2,
    ..Config::default()
  };
  let feed = Feed::new(fixture_incidents(), config);
  let mut view = feed.view();
  let first = view.render();
  assert_eq!(first.items.len(), 2);
  assert_eq!(first.page_indicator, "Page 1 / 2");
  assert!(view.next_page());
  let second = view.render();
  assert_eq!(second.items.len(), 1);
  assert_eq!(second.items[0].id, "INC-001");
  assert!(!second.has_next);
}
