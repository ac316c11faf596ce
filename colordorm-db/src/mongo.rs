use crate::{
    client::{DbError, Result},
    store::{CollectionName, DocumentStore},
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc, oid::ObjectId},
};

#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// The driver connects lazily; an unreachable server shows up on first use.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;

        Ok(Self {
            database: client.database(database_name),
        })
    }

    fn collection(&self, collection: CollectionName) -> Collection<Document> {
        self.database.collection(collection.as_str())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: CollectionName, document: Document) -> Result<ObjectId> {
        let inserted = self.collection(collection).insert_one(document).await?;

        inserted
            .inserted_id
            .as_object_id()
            .ok_or(DbError::UnexpectedId(inserted.inserted_id))
    }

    async fn find_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> Result<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn find_all(&self, collection: CollectionName) -> Result<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;

        Ok(cursor.try_collect::<Vec<_>>().await?)
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;

        Ok(())
    }
}
