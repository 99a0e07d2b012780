use serde::{Deserialize, Serialize};

use crate::domain::models::identity::Identity;

/// Collection every registration writes into.
pub const USERS_COLLECTION: &str = "users";

/// Application-level profile document keyed by the identity's uid.
///
/// Registration only writes these three fields; any other field of the
/// stored document belongs to other parts of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: String,
    name: String,
    email: String,
}

impl UserRecord {
    /// Build the record for a freshly created identity. The id is always the identity uid.
    pub fn for_identity(identity: &Identity, name: &str, email: &str) -> Self {
        Self {
            id: identity.uid().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}
