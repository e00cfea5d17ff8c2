//! Frontend Models
//!
//! Data structures matching the posts endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Post data structure (matches endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId", alias = "ownerId", deserialize_with = "string_or_number")]
    pub owner_id: String,
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// The endpoint sends `userId` as a number; older fixtures send a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_from_endpoint_shape() {
        let json = r#"{"userId": 1, "id": 7, "title": "qui est esse", "body": "est rerum"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.owner_id, "1");
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "qui est esse");
        assert_eq!(post.body, "est rerum");
    }

    #[test]
    fn test_post_accepts_string_owner_alias() {
        let json = r#"{"ownerId": "u-9", "id": 3, "title": "t", "body": "b", "extra": true}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.owner_id, "u-9");
        assert_eq!(post.id, 3);
    }

    #[test]
    fn test_post_missing_title_is_rejected() {
        let json = r#"{"userId": 1, "id": 7, "body": "b"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }
}
