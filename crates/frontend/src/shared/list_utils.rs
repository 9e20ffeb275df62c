//! Client-side search and paging for in-memory lists

/// Rows that can be matched against a free-text query
pub trait Searchable {
    /// `query` is already trimmed and lower-cased
    fn matches_query(&self, query: &str) -> bool;
}

/// Keeps rows matching `query`; a blank query keeps everything.
pub fn filter_list<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.matches_query(&query))
        .collect()
}

pub fn contains_ci(haystack: &str, query_lower: &str) -> bool {
    haystack.to_lowercase().contains(query_lower)
}

/// Number of pages for `total` rows; always at least one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows of a zero-based page. Out-of-range pages clamp to the last one.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return items.to_vec();
    }
    let page = page.min(total_pages(items.len(), page_size) - 1);
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}
