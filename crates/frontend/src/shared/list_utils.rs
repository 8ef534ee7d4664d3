//! List helpers: name filtering and page arithmetic.

/// Trait for data types the list filter can match against.
pub trait Searchable {
    /// Whether the object matches the filter string.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Keep the items matching the filter. A blank filter keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Number of pages needed for `total` items, at least 1.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(per_page)
    }
}

/// Items shown on the 1-based `page`. An out-of-range page is empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    items.iter().skip(start).take(per_page).cloned().collect()
}
