//! Pagination

use super::Row;

/// The currently active page number and page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Current page, 1-based.
    pub current: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl PageState {
    /// Creates a page state on page 1 with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A page of rows with the total page count.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged {
    rows: Vec<Row>,
    total_pages: usize,
}

impl Paged {
    /// Returns the rows on the current page.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the page and returns its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns the total number of pages, always at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes the total page count for a row count and page size.
///
/// An empty collection still has one (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slices out the rows for the current page.
///
/// A `current` beyond the available data yields an empty page rather than
/// an error; the caller clamps the page number when it wants to stay in
/// range.
pub fn paginate(rows: &[Row], page: &PageState) -> Paged {
    let size = page.page_size.max(1);
    let total = total_pages(rows.len(), size);
    let start = (page.current.max(1) - 1).saturating_mul(size);

    let slice = if start >= rows.len() {
        Vec::new()
    } else {
        rows[start..(start + size).min(rows.len())].to_vec()
    };

    Paged {
        rows: slice,
        total_pages: total,
    }
}

/// One token of the pager control: a page number or an ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A navigable page number.
    Page(usize),
    /// A gap between page numbers.
    Ellipsis,
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{}", n),
            PageToken::Ellipsis => write!(f, "..."),
        }
    }
}

/// Computes the sequence of pager tokens for the page controls.
///
/// The shape is fixed at no more than 7 tokens: the first and last page are
/// always visible, and the current page keeps its immediate neighbors when
/// it sits in the middle band.
///
/// # Example
///
/// ```
/// use tableview::pagination_range;
/// use tableview::PageToken::{Ellipsis, Page};
///
/// assert_eq!(
///     pagination_range(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)],
/// );
/// ```
pub fn pagination_range(current: usize, total: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total <= 5 {
        return (1..=total).map(Page).collect();
    }

    let current = current.clamp(1, total);
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::PageToken::{Ellipsis, Page};
    use super::*;

    fn numbered_rows(n: usize) -> Vec<Row> {
        (1..=n).map(|i| Row::new().set("n", i as i64)).collect()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_paginate_slices() {
        let rows = numbered_rows(23);

        let page = paginate(&rows, &PageState { current: 1, page_size: 10 });
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.rows().len(), 10);
        assert_eq!(page.rows()[0].text("n"), "1");

        let page = paginate(&rows, &PageState { current: 3, page_size: 10 });
        assert_eq!(page.rows().len(), 3);
        assert_eq!(page.rows()[0].text("n"), "21");
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let rows = numbered_rows(23);
        let page = paginate(&rows, &PageState { current: 4, page_size: 10 });
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let page = paginate(&[], &PageState::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_pagination_range_small_totals() {
        assert_eq!(pagination_range(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            pagination_range(4, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(pagination_range(1, 0), Vec::new());
    }

    #[test]
    fn test_pagination_range_left_band() {
        assert_eq!(
            pagination_range(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_range(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_pagination_range_middle_band() {
        assert_eq!(
            pagination_range(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_pagination_range_right_band() {
        assert_eq!(
            pagination_range(9, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            pagination_range(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
