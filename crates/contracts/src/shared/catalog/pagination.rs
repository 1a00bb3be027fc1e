//! Fixed-size paging of the filtered view and the page-number window shown
//! under the listing. Pages are 1-based throughout.

use std::ops::Range;

/// Records per page
pub const PAGE_SIZE: usize = 10;

/// Maximum number of consecutive page links around the current page
pub const PAGE_WINDOW: usize = 5;

/// `ceil(count / PAGE_SIZE)`; zero records means zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Index range of `page` inside a view of `count` records.
/// Pages outside `[1, total_pages]` give an empty range.
pub fn page_bounds(count: usize, page: usize) -> Range<usize> {
    if page == 0 || page > total_pages(count) {
        return 0..0;
    }
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(count);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    &items[page_bounds(items.len(), page)]
}

/// Page clamped for display: never below 1, never past the last page.
pub fn display_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Page numbers around the current page plus the jump links around them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    /// Page 1 shown separately in front of the window
    pub first: Option<usize>,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    /// Last page shown separately after the window
    pub last: Option<usize>,
}

impl PageWindow {
    pub fn compute(current: usize, total_pages: usize) -> Self {
        let half = PAGE_WINDOW / 2;
        let mut start = current.saturating_sub(half).max(1);
        let mut end = (current + half).min(total_pages);

        if current <= half + 1 {
            end = PAGE_WINDOW.min(total_pages);
        } else if current + half >= total_pages {
            start = total_pages.saturating_sub(PAGE_WINDOW - 1).max(1);
        }

        let pages: Vec<usize> = (start..=end).collect();

        let (first, leading_ellipsis) = match pages.first() {
            Some(&p) if p > 1 => (Some(1), p > 2),
            _ => (None, false),
        };
        let (last, trailing_ellipsis) = match pages.last() {
            Some(&p) if p < total_pages => (Some(total_pages), p + 1 < total_pages),
            _ => (None, false),
        };

        Self {
            pages,
            first,
            leading_ellipsis,
            trailing_ellipsis,
            last,
        }
    }
}

/// One control in the pagination bar, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Rendered even when disabled; the click still goes through the
    /// page-change bounds check.
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Full control sequence for the pagination bar.
pub fn page_items(current: usize, total_pages: usize) -> Vec<PageItem> {
    let window = PageWindow::compute(current, total_pages);
    let mut items = Vec::with_capacity(window.pages.len() + 6);

    items.push(PageItem::Previous {
        target: current.saturating_sub(1),
        disabled: current <= 1,
    });

    if let Some(first) = window.first {
        items.push(PageItem::Page {
            number: first,
            active: current == first,
        });
        if window.leading_ellipsis {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend(window.pages.iter().map(|&number| PageItem::Page {
        number,
        active: number == current,
    }));

    if let Some(last) = window.last {
        if window.trailing_ellipsis {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number: last,
            active: current == last,
        });
    }

    items.push(PageItem::Next {
        target: current + 1,
        disabled: current >= total_pages,
    });

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(200), 20);
    }

    #[test]
    fn test_page_bounds_clamps_last_page() {
        assert_eq!(page_bounds(25, 1), 0..10);
        assert_eq!(page_bounds(25, 3), 20..25);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, 4).is_empty());
        assert!(page_slice::<u32>(&[], 1).is_empty());
        assert_eq!(page_slice(&items, 2), &items[10..20]);
    }

    #[test]
    fn test_display_page_never_below_one() {
        assert_eq!(display_page(1, 0), 1);
        assert_eq!(display_page(0, 3), 1);
        assert_eq!(display_page(7, 3), 3);
    }

    #[test]
    fn test_window_at_start() {
        let w = PageWindow::compute(1, 20);
        assert_eq!(w.pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(w.first, None);
        assert!(!w.leading_ellipsis);
        assert!(w.trailing_ellipsis);
        assert_eq!(w.last, Some(20));
    }

    #[test]
    fn test_window_in_middle() {
        let w = PageWindow::compute(10, 20);
        assert_eq!(w.pages, vec![8, 9, 10, 11, 12]);
        assert_eq!(w.first, Some(1));
        assert!(w.leading_ellipsis);
        assert!(w.trailing_ellipsis);
        assert_eq!(w.last, Some(20));
    }

    #[test]
    fn test_window_at_end() {
        let w = PageWindow::compute(19, 20);
        assert_eq!(w.pages, vec![16, 17, 18, 19, 20]);
        assert_eq!(w.first, Some(1));
        assert!(w.leading_ellipsis);
        assert!(!w.trailing_ellipsis);
        assert_eq!(w.last, None);
    }

    #[test]
    fn test_window_adjacent_edges_skip_ellipsis() {
        // start == 2: link to 1 without a gap
        let w = PageWindow::compute(4, 6);
        assert_eq!(w.pages, vec![2, 3, 4, 5, 6]);
        assert_eq!(w.first, Some(1));
        assert!(!w.leading_ellipsis);

        // end == total - 1: link to last without a gap
        let w = PageWindow::compute(1, 6);
        assert_eq!(w.pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(w.last, Some(6));
        assert!(!w.trailing_ellipsis);
    }

    #[test]
    fn test_window_small_and_empty() {
        let w = PageWindow::compute(2, 3);
        assert_eq!(w.pages, vec![1, 2, 3]);
        assert_eq!(w.first, None);
        assert_eq!(w.last, None);

        let w = PageWindow::compute(1, 0);
        assert!(w.pages.is_empty());
        assert_eq!(w.first, None);
        assert_eq!(w.last, None);
        assert!(!w.leading_ellipsis && !w.trailing_ellipsis);
    }

    #[test]
    fn test_window_never_exceeds_limit() {
        for total in 0..30 {
            for current in 1..=total.max(1) {
                let w = PageWindow::compute(current, total);
                assert!(w.pages.len() <= PAGE_WINDOW);
                if total > 0 {
                    assert!(w.pages.contains(&current), "{current}/{total}");
                }
            }
        }
    }

    #[test]
    fn test_page_items_middle() {
        let items = page_items(10, 20);
        assert_eq!(
            items,
            vec![
                PageItem::Previous { target: 9, disabled: false },
                PageItem::Page { number: 1, active: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 8, active: false },
                PageItem::Page { number: 9, active: false },
                PageItem::Page { number: 10, active: true },
                PageItem::Page { number: 11, active: false },
                PageItem::Page { number: 12, active: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 20, active: false },
                PageItem::Next { target: 11, disabled: false },
            ]
        );
    }

    #[test]
    fn test_page_items_disable_edges() {
        let items = page_items(1, 1);
        assert_eq!(items.first(), Some(&PageItem::Previous { target: 0, disabled: true }));
        assert_eq!(items.last(), Some(&PageItem::Next { target: 2, disabled: true }));

        // no results: both arrows disabled, no page links
        let items = page_items(1, 0);
        assert_eq!(items.len(), 2);
    }
}
