//! Post Commands
//!
//! One GET against the posts endpoint, classified into `FetchError`.

use crate::error::FetchError;
use crate::models::Post;

/// Fetch every post from `endpoint`.
pub async fn fetch_posts(endpoint: &str) -> Result<Vec<Post>, FetchError> {
    tracing::debug!(endpoint, "requesting posts");
    let response = reqwest::get(endpoint).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Server { status: status.as_u16() });
    }

    let body = response.text().await?;
    parse_posts(&body)
}

/// Decode a response body as a JSON array of posts.
pub fn parse_posts(body: &str) -> Result<Vec<Post>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
