//! Page Arithmetic
//!
//! Pure derivations over a list length and the current page state.
//! Pages are 1-indexed.

use crate::config::DEFAULT_ITEMS_PER_PAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PageState {
    /// Page 1 with the given size (a zero size falls back to the default)
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: if items_per_page == 0 { DEFAULT_ITEMS_PER_PAGE } else { items_per_page },
        }
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.items_per_page)
    }

    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    /// Current page's slice, empty when the page lies past the end
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index().min(items.len());
        let end = (start + self.items_per_page).min(items.len());
        &items[start..end]
    }

    /// Advance one page. Returns false at the last page (or with no pages).
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false on page 1.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Change the page size and go back to page 1. Zero is rejected.
    pub fn set_page_size(&mut self, items_per_page: usize) -> bool {
        if items_per_page == 0 {
            return false;
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        true
    }
}

/// `ceil(len / per_page)`; zero for an empty list
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page)
}

/// Page size from a selector value; None unless a positive integer
pub fn parse_page_size(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|size| *size > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(current_page: usize, items_per_page: usize) -> PageState {
        PageState { current_page, items_per_page }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(100, 5), 20);
    }

    #[test]
    fn test_visible_last_partial_page() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page(1, 10).visible(&items), &items[0..10]);
        assert_eq!(page(3, 10).visible(&items), &[21, 22, 23]);
    }

    #[test]
    fn test_visible_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(page(2, 10).visible(&items).is_empty());
        assert!(page(1, 10).visible(&Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut state = page(2, 10);
        assert!(state.next(3));
        assert_eq!(state.current_page, 3);
        assert!(!state.next(3));
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_next_with_no_pages() {
        let mut state = PageState::default();
        assert!(!state.next(0));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_previous_stops_at_first_page() {
        let mut state = page(2, 10);
        assert!(state.previous());
        assert_eq!(state.current_page, 1);
        assert!(!state.previous());
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut state = page(2, 10);
        assert!(state.set_page_size(5));
        assert_eq!(state, page(1, 5));
    }

    #[test]
    fn test_set_page_size_rejects_zero() {
        let mut state = page(2, 10);
        assert!(!state.set_page_size(0));
        assert_eq!(state, page(2, 10));
    }

    #[test]
    fn test_new_falls_back_on_zero() {
        assert_eq!(PageState::new(0), PageState::default());
        assert_eq!(PageState::new(20), page(1, 20));
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("20"), Some(20));
        assert_eq!(parse_page_size(" 5 "), Some(5));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("-5"), None);
        assert_eq!(parse_page_size("ten"), None);
        assert_eq!(parse_page_size(""), None);
    }

    proptest! {
        #[test]
        fn prop_pages_partition_items(len in 0usize..500, per_page in 1usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, per_page);
            prop_assert_eq!(pages, (len + per_page - 1) / per_page);

            let mut seen = Vec::new();
            for p in 1..=pages {
                seen.extend_from_slice(page(p, per_page).visible(&items));
            }
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn prop_only_last_page_is_short(len in 1usize..500, per_page in 1usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, per_page);
            for p in 1..pages {
                prop_assert_eq!(page(p, per_page).visible(&items).len(), per_page);
            }
            prop_assert_eq!(
                page(pages, per_page).visible(&items).len(),
                len - (pages - 1) * per_page
            );
        }

        #[test]
        fn prop_navigation_is_idempotent_at_bounds(len in 0usize..500, per_page in 1usize..50) {
            let pages = total_pages(len, per_page);

            let mut first = page(1, per_page);
            first.previous();
            prop_assert_eq!(first.current_page, 1);

            let mut last = page(pages.max(1), per_page);
            last.next(pages);
            prop_assert_eq!(last.current_page, pages.max(1));
        }

        #[test]
        fn prop_size_change_resets_page(current in 1usize..100, old in 1usize..50, new in 1usize..50) {
            let mut state = page(current, old);
            state.set_page_size(new);
            prop_assert_eq!(state.current_page, 1);
            prop_assert_eq!(state.items_per_page, new);
        }
    }
}
