use crate::client::Result;
use async_trait::async_trait;
use colordorm_common::model::post::PostKind;
use mongodb::bson::{Document, oid::ObjectId};
use std::fmt::Debug;

pub const DEFAULT_DATABASE_NAME: &str = "my_app_db";

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum CollectionName {
    Users,
    RegularPosts,
    FeaturedPosts,
}

impl CollectionName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionName::Users => "users_collection",
            CollectionName::RegularPosts => "regular_posts",
            CollectionName::FeaturedPosts => "featured_posts",
        }
    }
}

impl From<PostKind> for CollectionName {
    fn from(value: PostKind) -> Self {
        match value {
            PostKind::Regular => CollectionName::RegularPosts,
            PostKind::Featured => CollectionName::FeaturedPosts,
        }
    }
}

/// Minimal set of document operations the data-access layer is built on.
///
/// Filters are equality matches on every key they contain. Results come back in
/// the backend's natural order.
#[async_trait]
pub trait DocumentStore: Debug + Send + Sync {
    async fn insert(&self, collection: CollectionName, document: Document) -> Result<ObjectId>;

    async fn find_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> Result<Option<Document>>;

    async fn find_all(&self, collection: CollectionName) -> Result<Vec<Document>>;

    async fn ping(&self) -> Result<()>;
}
