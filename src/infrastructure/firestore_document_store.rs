use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::{
    domain::{
        error::StoreError,
        models::{identity::Identity, user_record::UserRecord},
        repositories::document_store::DocumentStore,
    },
    infrastructure::firebase_error::error_message,
};

/// Firestore typed value. User records only carry strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreValue {
    string_value: String,
}

#[derive(Debug, Serialize)]
struct FirestoreDocument {
    fields: BTreeMap<String, FirestoreValue>,
}

impl FirestoreDocument {
    fn from_record(record: &UserRecord) -> Result<Self, StoreError> {
        let Value::Object(map) =
            serde_json::to_value(record).map_err(|e| StoreError::Write(e.to_string()))?
        else {
            return Err(StoreError::Write("user record is not a document".to_string()));
        };

        let fields = map
            .into_iter()
            .map(|(name, value)| {
                let string_value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (name, FirestoreValue { string_value })
            })
            .collect();
        Ok(Self { fields })
    }
}

/// Document store backed by the Cloud Firestore REST API.
#[derive(Clone)]
pub struct FirestoreDocumentStore {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreDocumentStore {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
        }
    }

    fn document_url(&self, collection: &str, key: &str) -> Result<Url, StoreError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| StoreError::Transport(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| StoreError::Transport(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                collection,
                key,
            ]);
        Ok(url)
    }
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    /// PATCH with a `currentDocument.exists=false` precondition, so an existing
    /// document is never replaced. The author's ID token authorizes the write.
    async fn write(
        &self,
        collection: &str,
        key: &str,
        record: &UserRecord,
        author: &Identity,
    ) -> Result<(), StoreError> {
        let document = FirestoreDocument::from_record(record)?;

        let mut request = self
            .client
            .patch(self.document_url(collection, key)?)
            .query(&[
                ("key", self.api_key.as_str()),
                ("currentDocument.exists", "false"),
            ])
            .json(&document);
        if let Some(id_token) = author.id_token() {
            request = request.bearer_auth(id_token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Write(error_message(response).await));
        }
        Ok(())
    }
}
