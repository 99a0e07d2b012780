use async_trait::async_trait;

use crate::domain::{error::IdentityError, models::identity::Identity};

/// External authentication service that owns accounts and their credentials.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account bound to the given email and password
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, IdentityError>;

    /// Set the display name shown for an existing account
    async fn set_display_name(&self, identity: &Identity, name: &str) -> Result<(), IdentityError>;
}
