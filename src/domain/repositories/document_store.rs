use async_trait::async_trait;

use crate::domain::{
    error::StoreError,
    models::{identity::Identity, user_record::UserRecord},
};

/// Document database that keeps application-level user records.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create `record` at `collection/key` on behalf of `author`.
    ///
    /// Fails if a document already exists at that path.
    async fn write(
        &self,
        collection: &str,
        key: &str,
        record: &UserRecord,
        author: &Identity,
    ) -> Result<(), StoreError>;
}
