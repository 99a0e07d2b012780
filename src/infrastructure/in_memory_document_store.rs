use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::{
    error::StoreError,
    models::{identity::Identity, user_record::UserRecord},
    repositories::document_store::DocumentStore,
};

type DocumentPath = (String, String);

#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentPath, Value>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, collection: &str, key: &str) -> Option<Value> {
        self.documents
            .read()
            .await
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn write(
        &self,
        collection: &str,
        key: &str,
        record: &UserRecord,
        _author: &Identity,
    ) -> Result<(), StoreError> {
        let document = serde_json::to_value(record).map_err(|e| StoreError::Write(e.to_string()))?;
        match self
            .documents
            .write()
            .await
            .entry((collection.to_string(), key.to_string()))
        {
            Entry::Occupied(_) => Err(StoreError::Write(format!(
                "Document already exists: {collection}/{key}"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(document);
                Ok(())
            }
        }
    }
}
