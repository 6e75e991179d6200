//! Page slicing for flat result lists.

use serde::Serialize;

/// One page of results. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Slice `items` into page `page` of size `per_page`.
///
/// Page 0 is read as page 1 and a zero page size as 1. A page past the end
/// has no items but still reports the real totals.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<&T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: items[start..end].iter().collect(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_page() {
        let items: Vec<u32> = (1..=7).collect();

        let first = paginate(&items, 1, 3);
        assert_eq!(first.items, vec![&1, &2, &3]);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_prev());

        let last = paginate(&items, 3, 3);
        assert_eq!(last.items, vec![&7]);
        assert!(!last.has_next());
        assert!(last.has_prev());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = vec!["a", "b"];
        let page = paginate(&items, 5, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_zero_inputs_are_clamped() {
        let items = vec![10, 20, 30];
        let page = paginate(&items, 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items, vec![&10]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u8> = Vec::new();
        let page = paginate(&items, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }
}
