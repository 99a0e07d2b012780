use serde::{Deserialize, Serialize};

pub type Uid = String;
pub type DisplayName = String;

/// Account created by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    uid: Uid,
    display_name: Option<DisplayName>,
    #[serde(skip_serializing)]
    id_token: Option<String>,
}

impl Identity {
    pub fn new(uid: Uid) -> Self {
        Self {
            uid,
            display_name: None,
            id_token: None,
        }
    }

    /// Attach the provider token that authorizes follow-up profile requests.
    pub fn with_id_token(mut self, id_token: String) -> Self {
        self.id_token = Some(id_token);
        self
    }

    pub fn with_display_name(mut self, display_name: DisplayName) -> Self {
        self.display_name = Some(display_name);
        self
    }

    /// An identity without a uid cannot key a user record.
    pub fn is_usable(&self) -> bool {
        !self.uid.trim().is_empty()
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }
}
