//! In-process document store.
//!
//! Keeps every collection as a list in insertion order, which is also the order
//! `find_all` and `find_one` observe.

use crate::{
    client::{DbError, Result},
    store::{CollectionName, DocumentStore},
};
use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<CollectionName, Vec<Document>>>,
    unreachable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `ping` always fails, for exercising connectivity checks.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: CollectionName, mut document: Document) -> Result<ObjectId> {
        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        let found = collections
            .get(&collection)
            .and_then(|documents| documents.iter().find(|document| matches(document, &filter)))
            .cloned();

        Ok(found)
    }

    async fn find_all(&self, collection: CollectionName) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;

        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn ping(&self) -> Result<()> {
        if self.unreachable {
            return Err(DbError::Unreachable);
        }

        Ok(())
    }
}
