//! List State
//!
//! Struct-of-state for one mounted list, with the fetch transitions and
//! the derived view. Nothing derived is stored.

use reactive_stores::Store;

use crate::error::FetchError;
use crate::models::Post;
use crate::pagination::PageState;

/// Fetch lifecycle status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct ListState {
    pub posts: Vec<Post>,
    pub load_state: LoadState,
    pub page: PageState,
    /// Has-run flag for the mount fetch
    pub fetch_started: bool,
}

/// What the controls render, recomputed on every read.
/// The visible posts come from `ListState::visible_posts`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl PageView {
    /// Page indicator text, e.g. "2 of 10"
    pub fn indicator(&self) -> String {
        format!("{} of {}", self.current_page, self.total_pages)
    }
}

impl ListState {
    pub fn new(page: PageState) -> Self {
        Self { page, ..Default::default() }
    }

    /// Start the one fetch this state will ever make.
    /// Returns false if a fetch was already started.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_started {
            return false;
        }
        self.fetch_started = true;
        self.load_state = LoadState::Loading;
        true
    }

    /// Settle the fetch. A failure leaves the posts untouched.
    pub fn finish_fetch(&mut self, result: Result<Vec<Post>, FetchError>) {
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                self.load_state = LoadState::Failed(e.user_message());
            }
        }
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.posts.len())
    }

    pub fn visible_posts(&self) -> &[Post] {
        self.page.visible(&self.posts)
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.page.next(total)
    }

    pub fn previous_page(&mut self) -> bool {
        self.page.previous()
    }

    pub fn change_page_size(&mut self, items_per_page: usize) -> bool {
        self.page.set_page_size(items_per_page)
    }

    pub fn view(&self) -> PageView {
        let total_pages = self.total_pages();
        let current_page = self.page.current_page;
        PageView {
            current_page,
            total_pages,
            items_per_page: self.page.items_per_page,
            prev_disabled: current_page == 1,
            next_disabled: total_pages == 0 || current_page == total_pages,
            loading: self.load_state.is_loading(),
            error: self.load_state.error().map(str::to_string),
        }
    }
}
