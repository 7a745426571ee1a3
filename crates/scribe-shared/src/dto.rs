//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// `title` stays optional here so a missing field reaches validation
/// and is reported as a field error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_missing_title() {
        let req: PostRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());

        let req: PostRequest = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(req.title.is_none());
    }

    #[test]
    fn test_post_response_shape() {
        let now = Utc::now();
        let body = serde_json::to_value(PostResponse {
            id: 3,
            title: "nuevo".to_string(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();

        let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["created_at", "id", "title", "updated_at"]);
        assert_eq!(body["title"], "nuevo");
    }
}
