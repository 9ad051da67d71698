//! Feed engine: holds the loaded incident list, evaluates queries and
//! opens per-viewer views with their own filter state.

use tracing::debug;

use crate::config::Config;
use crate::error::FeedError;
use crate::filter;
use crate::paginate;
use crate::query;
use crate::render;
use crate::source::IncidentSource;
use crate::types::*;

/// The incident store plus everything derived once from it.
pub struct Feed {
  config: Config,
  incidents: Vec<Incident>,
  service_options: Vec<String>,
}

impl Feed {
  pub fn new(incidents: Vec<Incident>, config: Config) -> Self {
    let service_options = filter::derive_service_options(&incidents);
    Self {
      config,
      incidents,
      service_options,
    }
  }

  pub fn with_defaults(incidents: Vec<Incident>) -> Self {
    Self::new(incidents, Config::default())
  }

  pub fn from_source(source: &dyn IncidentSource, config: Config) -> Result<Self, FeedError> {
    let incidents = source.load()?;
    debug!(count = incidents.len(), "feed loaded");
    Ok(Self::new(incidents, config))
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Incidents in source order.
  pub fn incidents(&self) -> &[Incident] {
    &self.incidents
  }

  pub fn service_options(&self) -> &[String] {
    &self.service_options
  }

  /// Render the page described by `state`.
  pub fn evaluate(&self, state: &FilterState) -> FeedPage {
    let filtered = filter::compute_filtered(&self.incidents, state);
    let window = paginate::compute_page(&filtered, state.page, self.config.page_size);
    debug!(
      matches = filtered.len(),
      page = state.page,
      total_pages = window.total_pages,
      "feed evaluated"
    );
    render::feed_page(&window, filtered.len(), state, &self.service_options, &self.config)
  }

  /// Parse a raw query and render the matching page.
  pub fn query(&self, raw: &FeedQuery) -> Result<FeedPage, FeedError> {
    let state = query::parse(raw)?;
    Ok(self.evaluate(&state))
  }

  /// Open a view with default filters.
  pub fn view(&self) -> IncidentsView<'_> {
    IncidentsView {
      feed: self,
      state: FilterState::default(),
    }
  }
}

/// One open incidents page. Filter state lives as long as the view.
pub struct IncidentsView<'a> {
  feed: &'a Feed,
  state: FilterState,
}

impl<'a> IncidentsView<'a> {
  pub fn state(&self) -> &FilterState {
    &self.state
  }

  pub fn set_status_filter(&mut self, status: Filter<IncidentStatus>) {
    self.state.set_status(status);
  }

  pub fn set_sev_filter(&mut self, sev: Filter<u8>) {
    self.state.set_sev(sev);
  }

  pub fn set_service_filter(&mut self, service: Filter<String>) {
    self.state.set_service(service);
  }

  pub fn set_search_query(&mut self, search: impl Into<String>) {
    self.state.set_search(search);
  }

  /// Current filtered and sorted set, ignoring the page cursor.
  pub fn filtered(&self) -> Vec<&'a Incident> {
    let feed: &'a Feed = self.feed;
    filter::compute_filtered(&feed.incidents, &self.state)
  }

  fn total_pages(&self) -> u32 {
    paginate::total_pages(self.filtered().len(), self.feed.config.page_size)
  }

  /// "Précédent". Returns false when the button is disabled.
  pub fn previous_page(&mut self) -> bool {
    match paginate::previous_page(self.state.page) {
      Some(p) => {
        self.state.page = p;
        true
      }
      None => false,
    }
  }

  /// "Suivant". Returns false when the button is disabled.
  pub fn next_page(&mut self) -> bool {
    match paginate::next_page(self.state.page, self.total_pages()) {
      Some(p) => {
        self.state.page = p;
        true
      }
      None => false,
    }
  }

  pub fn render(&self) -> FeedPage {
    self.feed.evaluate(&self.state)
  }
}
