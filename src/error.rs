//! Fetch Errors
//!
//! Display text is what the user sees; the payload is for the logs.

use thiserror::Error;

/// Failure while loading posts.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint answered with a non-2xx status
    #[error("Server side failure when fetching posts.")]
    Server { status: u16 },

    /// Request never produced a response, or the body could not be read
    #[error("Failed to fetch posts.")]
    Transport(#[from] reqwest::Error),

    /// Body was not a JSON array of posts
    #[error("Failed to fetch posts.")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Message shown in the error element.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Detail for logging, never shown to the user.
    pub fn detail(&self) -> String {
        match self {
            FetchError::Server { status } => format!("HTTP status {}", status),
            FetchError::Transport(e) => format!("transport: {}", e),
            FetchError::Decode(e) => format!("decode: {}", e),
        }
    }
}
