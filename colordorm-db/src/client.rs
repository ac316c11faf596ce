use crate::{
    mongo::MongoStore,
    record::{NewPostRecord, NewUserRecord, PostRecord, UserRecord},
    store::{CollectionName, DocumentStore},
};
use colordorm_common::model::{
    ID_HEX_LEN, Id, InvalidIdError,
    post::{PartialPost, PostContent, PostKind, PostMarker},
    user::{CreateUser, User, UserMarker},
};
use mongodb::bson::{self, Bson, DateTime, Document, doc, oid::ObjectId};
use thiserror::Error;
use tracing::debug;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    InvalidReference(#[from] InvalidIdError),
    #[error("Document could not be encoded: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("Document could not be decoded: {0}")]
    Decode(#[from] bson::de::Error),
    #[error("The store assigned a non-ObjectId identifier: {0}")]
    UnexpectedId(Bson),
    /// Raised by the in-memory backend when it simulates a dead server.
    #[cfg(any(test, feature = "memory"))]
    #[error("The document store is unreachable")]
    Unreachable,
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

#[derive(Debug)]
pub struct DbClient {
    store: Box<dyn DocumentStore>,
}

impl DbClient {
    #[must_use]
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub async fn connect(uri: &str, database_name: &str) -> Result<Self> {
        Ok(Self::new(MongoStore::connect(uri, database_name).await?))
    }

    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }

    /// Inserts without checking whether the username or email is taken.
    pub async fn create_user(&self, user: &CreateUser) -> Result<Id<UserMarker>> {
        let record = NewUserRecord {
            username: &user.username,
            email: &user.email,
            password: &user.password,
        };

        let user_id = self
            .store
            .insert(CollectionName::Users, bson::to_document(&record)?)
            .await?;

        Ok(user_id.into())
    }

    /// Resolves `identifier` as an id, then a username, then an email.
    /// The first match wins. A failed id lookup falls through to the others.
    pub async fn read_user(&self, identifier: &str) -> Result<Option<User>> {
        if identifier.chars().count() == ID_HEX_LEN
            && let Ok(user_id) = ObjectId::parse_str(identifier)
        {
            match self.find_user(doc! { "_id": user_id }).await {
                Ok(Some(user)) => return Ok(Some(user)),
                Ok(None) => {}
                Err(err) => debug!(error = %err, %identifier, "User id lookup failed"),
            }
        }

        if let Some(user) = self.find_user(doc! { "username": identifier }).await? {
            return Ok(Some(user));
        }

        self.find_user(doc! { "email": identifier }).await
    }

    async fn find_user(&self, filter: Document) -> Result<Option<User>> {
        let document = self.store.find_one(CollectionName::Users, filter).await?;
        let record = document
            .map(bson::from_document::<UserRecord>)
            .transpose()?;

        Ok(record.map(User::from))
    }

    pub async fn create_post(&self, kind: PostKind, post: &PostContent) -> Result<Id<PostMarker>> {
        let user_id = Id::<UserMarker>::parse(&post.user_id)?;
        let colors = post
            .colors
            .iter()
            .map(bson::to_bson)
            .collect::<Result<Vec<_>, _>>()?;

        let record = NewPostRecord {
            title: &post.title,
            content: &post.content,
            user_id: user_id.object_id(),
            colors,
            css: &post.css,
            is_featured: kind.is_featured(),
            timestamp: DateTime::now(),
        };

        let post_id = self
            .store
            .insert(CollectionName::from(kind), bson::to_document(&record)?)
            .await?;
        debug!(%kind, %post_id, "Created post");

        Ok(post_id.into())
    }

    /// Every post of one kind, in the store's natural order.
    pub async fn read_posts(&self, kind: PostKind) -> Result<Vec<PartialPost>> {
        self.store
            .find_all(CollectionName::from(kind))
            .await?
            .into_iter()
            .map(Self::decode_post)
            .collect()
    }

    /// Looks in the regular posts first, then the featured ones. An id that
    /// cannot be parsed matches nothing.
    pub async fn read_post_by_id(&self, post_id: &str) -> Result<Option<PartialPost>> {
        let Ok(post_id) = Id::<PostMarker>::parse(post_id) else {
            return Ok(None);
        };

        for kind in [PostKind::Regular, PostKind::Featured] {
            let document = self
                .store
                .find_one(CollectionName::from(kind), doc! { "_id": post_id.object_id() })
                .await?;

            if let Some(document) = document {
                return Self::decode_post(document).map(Some);
            }
        }

        Ok(None)
    }

    fn decode_post(document: Document) -> Result<PartialPost> {
        let record: PostRecord = bson::from_document(document)?;

        Ok(record.into())
    }
}
