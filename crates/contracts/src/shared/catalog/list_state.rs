use super::pagination::total_pages;

/// Transient state of one catalog list page: the search text and the
/// 1-based page number. Both live and reset together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListState {
    pub query: String,
    pub page: usize,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl CatalogListState {
    /// Any change of the search text starts again from page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Submitting the search form only rewinds to the first page.
    pub fn submit_search(&mut self) {
        self.page = 1;
    }

    /// Moves to `target` when it is inside `[1, total_pages]`.
    /// Anything else is ignored; returns whether the page changed.
    pub fn go_to_page(&mut self, target: usize, total_pages: usize) -> bool {
        if target < 1 || target > total_pages || target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    /// Same as [`go_to_page`](Self::go_to_page) with the page count derived
    /// from the size of the filtered view.
    pub fn go_to_page_of(&mut self, target: usize, filtered_count: usize) -> bool {
        self.go_to_page(target, total_pages(filtered_count))
    }
}
