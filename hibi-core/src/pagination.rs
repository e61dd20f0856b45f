//! Fixed-size pagination over an ordered entry list.

/// Number of entries shown per listing page.
pub const PAGE_SIZE: usize = 5;

/// One page of a listing, plus enough context to render navigation links.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-indexed number of this page.
    pub current: usize,
    /// Number of the last page; 0 when the list is empty.
    pub last: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.last
    }
}

/// Returns the 1-indexed `page` slice of `items`.
///
/// Pages past the end yield an empty slice, not an error; page numbers below
/// 1 are treated as page 1.
pub fn paginate<T>(items: &[T], page: usize) -> Page<'_, T> {
    let current = page.max(1);
    let start = (current - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    Page {
        items: items.get(start..end).unwrap_or(&[]),
        current,
        last: items.len().div_ceil(PAGE_SIZE),
    }
}

/// Parses a `?page=` query value. Absent or non-numeric input means page 1.
pub fn parse_page_param(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .map_or(1, |page| page.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_items_paginate_into_three_pages() {
        let items: Vec<usize> = (0..12).collect();

        let first = paginate(&items, 1);
        assert_eq!(first.items, &[0, 1, 2, 3, 4]);
        assert_eq!(first.last, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let third = paginate(&items, 3);
        assert_eq!(third.items, &[10, 11]);
        assert!(third.has_prev());
        assert!(!third.has_next());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (0..12).collect();
        let fourth = paginate(&items, 4);
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.last, 3);
    }

    #[test]
    fn empty_list_has_last_page_zero() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.last, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(paginate(&items, 2).items.len(), 5);
        assert_eq!(paginate(&items, 2).last, 2);
    }

    #[test]
    fn page_zero_clamps_to_one() {
        let items: Vec<usize> = (0..3).collect();
        let page = paginate(&items, 0);
        assert_eq!(page.current, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn parse_page_param_defaults() {
        assert_eq!(parse_page_param(None), 1);
        assert_eq!(parse_page_param(Some("")), 1);
        assert_eq!(parse_page_param(Some("abc")), 1);
        assert_eq!(parse_page_param(Some("-2")), 1);
        assert_eq!(parse_page_param(Some("0")), 1);
        assert_eq!(parse_page_param(Some("3")), 3);
        assert_eq!(parse_page_param(Some(" 2 ")), 2);
    }
}
