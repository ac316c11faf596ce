use colordorm_common::model::{post::PartialPost, user::User};
use mongodb::bson::{Bson, DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use std::ops::Not;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
pub(crate) struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub(crate) struct NewUserRecord<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub(crate) struct PostRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    pub user_id: ObjectId,
    #[serde(default)]
    pub colors: Vec<Bson>,
    #[serde(default)]
    pub css: String,
    pub timestamp: DateTime,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub(crate) struct NewPostRecord<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub user_id: ObjectId,
    pub colors: Vec<Bson>,
    pub css: &'a str,
    #[serde(skip_serializing_if = "Not::not")]
    pub is_featured: bool,
    pub timestamp: DateTime,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id.into(),
            username: value.username,
            email: value.email,
            password: value.password,
        }
    }
}

impl From<PostRecord> for PartialPost {
    fn from(value: PostRecord) -> Self {
        Self {
            id: value.id.into(),
            title: value.title,
            content: value.content,
            user_id: value.user_id.into(),
            colors: value
                .colors
                .into_iter()
                .map(Bson::into_relaxed_extjson)
                .collect(),
            css: value.css,
            timestamp: value.timestamp.to_time_0_3(),
            is_featured: value.is_featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::record::PostRecord;
    use colordorm_common::model::post::PartialPost;
    use mongodb::bson::{Bson, DateTime, oid::ObjectId};
    use time::macros::datetime;

    #[test]
    fn post_record_conversion() {
        let record = PostRecord {
            id: ObjectId::new(),
            title: "Palette".to_owned(),
            content: "Five blues".to_owned(),
            user_id: ObjectId::new(),
            colors: vec![Bson::String("#0000ff".to_owned()), Bson::Int32(3)],
            css: String::new(),
            timestamp: DateTime::from_millis(1_740_832_200_123),
            is_featured: false,
        };

        let post = PartialPost::from(record.clone());

        assert_eq!(post.id.object_id(), record.id);
        assert_eq!(post.user_id.object_id(), record.user_id);
        assert_eq!(
            post.colors,
            vec![serde_json::json!("#0000ff"), serde_json::json!(3)]
        );
        assert_eq!(post.timestamp, datetime!(2025-03-01 12:30:00.123 UTC));
        assert!(!post.is_featured);
    }
}
