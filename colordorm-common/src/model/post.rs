use crate::model::{Id, user::UserMarker};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt::Display, ops::Not};
use time::OffsetDateTime;

/// Author label used when a post's `user_id` resolves to no user.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

/// Which collection a post lives in.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    Regular,
    Featured,
}

impl PostKind {
    #[must_use]
    pub fn is_featured(self) -> bool {
        matches!(self, PostKind::Featured)
    }
}

impl Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostKind::Regular => f.write_str("Regular"),
            PostKind::Featured => f.write_str("Featured"),
        }
    }
}

/// A post as stored, without author information.
#[derive(Clone, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct PartialPost {
    #[serde(rename = "_id")]
    pub id: Id<PostMarker>,
    pub title: String,
    pub content: String,
    pub user_id: Id<UserMarker>,
    #[serde(default)]
    pub colors: Vec<Value>,
    #[serde(default)]
    pub css: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_featured: bool,
}

/// A post enriched with the display name of its author.
#[derive(Clone, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub post: PartialPost,
    pub author: String,
}

impl Post {
    #[must_use]
    pub fn with_author(post: PartialPost, author: Option<String>) -> Self {
        Self {
            post,
            author: author.unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned()),
        }
    }
}

/// Input for creating a post. `user_id` is kept raw; the store coerces it.
#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize, Serialize)]
pub struct PostContent {
    pub title: String,
    pub content: String,
    pub user_id: String,
    #[serde(default)]
    pub colors: Vec<Value>,
    #[serde(default)]
    pub css: String,
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Id,
        post::{PartialPost, Post},
    };
    use serde_json::json;
    use time::macros::datetime;

    fn partial_post(is_featured: bool) -> PartialPost {
        PartialPost {
            id: Id::parse("65a1f0c2b3d4e5f601234567").unwrap(),
            title: "Sunset".to_owned(),
            content: "Warm tones".to_owned(),
            user_id: Id::parse("65a1f0c2b3d4e5f6012345ff").unwrap(),
            colors: vec![json!("#ff8800"), json!({"r": 1})],
            css: "body { color: red; }".to_owned(),
            timestamp: datetime!(2025-03-01 12:30:00 UTC),
            is_featured,
        }
    }

    #[test]
    fn regular_post_omits_featured_flag() {
        let value = serde_json::to_value(Post::with_author(partial_post(false), None)).unwrap();

        assert_eq!(
            value,
            json!({
                "_id": "65a1f0c2b3d4e5f601234567",
                "title": "Sunset",
                "content": "Warm tones",
                "user_id": "65a1f0c2b3d4e5f6012345ff",
                "colors": ["#ff8800", {"r": 1}],
                "css": "body { color: red; }",
                "timestamp": "2025-03-01T12:30:00Z",
                "author": "Unknown",
            })
        );
    }

    #[test]
    fn featured_post_carries_flag() {
        let value = serde_json::to_value(Post::with_author(
            partial_post(true),
            Some("alice".to_owned()),
        ))
        .unwrap();

        assert_eq!(value["is_featured"], json!(true));
        assert_eq!(value["author"], json!("alice"));
    }
}
