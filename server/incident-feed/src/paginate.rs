//! Page-window slicing and previous/next navigation.

/// One page of an already filtered and sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
  pub items: &'a [T],
  pub page: u32,
  /// `ceil(len / page_size)`; zero for an empty sequence.
  pub total_pages: u32,
}

impl<T> PageWindow<'_, T> {
  /// Total shown in the "Page X / Y" indicator, never below 1.
  pub fn displayed_total_pages(&self) -> u32 {
    self.total_pages.max(1)
  }

  pub fn previous(&self) -> Option<u32> {
    previous_page(self.page)
  }

  pub fn next(&self) -> Option<u32> {
    next_page(self.page, self.total_pages)
  }
}

pub fn total_pages(len: usize, page_size: usize) -> u32 {
  let pages = len.div_ceil(page_size.max(1));
  u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Slice out the 1-based `page` of `filtered`.
///
/// A page outside `1..=total_pages` yields an empty slice; the page number
/// itself is passed through unchanged.
pub fn compute_page<T>(filtered: &[T], page: u32, page_size: usize) -> PageWindow<'_, T> {
  let page_size = page_size.max(1);
  let total_pages = total_pages(filtered.len(), page_size);

  let items = match (page as usize).checked_sub(1) {
    Some(index) => {
      let start = index.saturating_mul(page_size).min(filtered.len());
      let end = start.saturating_add(page_size).min(filtered.len());
      &filtered[start..end]
    }
    None => &filtered[..0],
  };

  PageWindow {
    items,
    page,
    total_pages,
  }
}

/// Target of the "Précédent" button, or `None` while it is disabled.
pub fn previous_page(page: u32) -> Option<u32> {
  if page == 1 {
    None
  } else {
    Some(page.saturating_sub(1).max(1))
  }
}

/// Target of the "Suivant" button, or `None` while it is disabled.
pub fn next_page(page: u32, total_pages: u32) -> Option<u32> {
  if total_pages == 0 || page == total_pages {
    None
  } else {
    Some(page.saturating_add(1).min(total_pages))
  }
}
