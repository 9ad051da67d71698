//! Parse raw feed queries into a validated FilterState.

use crate::error::FeedError;
use crate::types::*;

/// Parse and validate a FeedQuery.
pub fn parse(raw: &FeedQuery) -> Result<FilterState, FeedError> {
  let status = match selected(&raw.status) {
    None => Filter::All,
    Some(s) => Filter::Only(
      IncidentStatus::from_str_loose(s)
        .ok_or_else(|| FeedError::validation("status", "expected all|open|mitigated|resolved"))?,
    ),
  };

  let sev = match selected(&raw.sev) {
    None => Filter::All,
    Some(s) => match s.parse::<u8>() {
      Ok(n) if n >= 1 => Filter::Only(n),
      _ => return Err(FeedError::validation("sev", "expected all or a positive integer")),
    },
  };

  // Tags are matched exactly (modulo case), so the value is not trimmed.
  let service = match raw.service.as_deref() {
    None => Filter::All,
    Some(s) if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") => Filter::All,
    Some(s) => Filter::Only(s.to_string()),
  };

  let page = match &raw.page {
    None => 1,
    Some(p) => parse_page(p)?,
  };

  Ok(FilterState {
    status,
    sev,
    service,
    search: raw.q.clone().unwrap_or_default(),
    page,
  })
}

fn parse_page(raw: &PageParam) -> Result<u32, FeedError> {
  let page = match raw {
    PageParam::Number(n) => u32::try_from(*n).ok(),
    PageParam::Text(t) => t.trim().parse::<u32>().ok(),
  };
  match page {
    Some(p) if p >= 1 => Ok(p),
    _ => Err(FeedError::validation("page", "must be a positive integer")),
  }
}

/// `None` for a missing, blank or "all" select value.
fn selected(value: &Option<String>) -> Option<&str> {
  let v = value.as_deref()?.trim();
  if v.is_empty() || v.eq_ignore_ascii_case("all") {
    None
  } else {
    Some(v)
  }
}
