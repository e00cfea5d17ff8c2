//! UI Components
//!
//! Leptos components for the paginated post list.

mod paginated_list;
mod post_list;
mod pagination_controls;
mod page_size_selector;

pub use paginated_list::PaginatedList;
pub use post_list::PostList;
pub use pagination_controls::PaginationControls;
pub use page_size_selector::PageSizeSelector;
