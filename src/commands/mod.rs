//! Endpoint Bindings
//!
//! Frontend bindings to the remote posts endpoint.

mod posts;

// Re-export all public items
pub use posts::*;
