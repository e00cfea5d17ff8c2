//! List Configuration
//!
//! Fixed endpoint plus the page-size choices offered to the user.

/// Source of the posts
pub const POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Initial page size
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page-size selector options
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub endpoint: String,
    pub page_size_options: Vec<usize>,
    pub items_per_page: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            endpoint: POSTS_ENDPOINT.to_string(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl ListConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Zero sizes are dropped; an empty result keeps the defaults.
    /// The starting size moves to the first option when it is not offered.
    pub fn with_page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        let options: Vec<usize> = options.into_iter().filter(|size| *size > 0).collect();
        self.page_size_options = if options.is_empty() {
            DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
        } else {
            options
        };
        if !self.page_size_options.contains(&self.items_per_page) {
            self.items_per_page = self.page_size_options[0];
        }
        self
    }
}
