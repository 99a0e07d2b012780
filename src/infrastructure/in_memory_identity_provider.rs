use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    error::IdentityError,
    models::identity::{DisplayName, Identity, Uid},
    services::{
        identity_provider::IdentityProvider,
        password_service::{HashedPassword, PasswordHasher},
    },
};

const EMAIL_IN_USE: &str = "The email address is already in use by another account.";
const UNKNOWN_USER: &str = "There is no user record corresponding to this identifier.";

#[derive(Debug, Clone)]
struct Account {
    uid: Uid,
    #[cfg_attr(not(test), expect(dead_code, reason = "sign-in is not served"))]
    password_hash: HashedPassword,
    display_name: Option<DisplayName>,
}

/// Process-local identity provider, keyed by email address.
#[derive(Clone)]
pub struct InMemoryIdentityProvider<P: PasswordHasher> {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    password_hasher: P,
}

impl<P: PasswordHasher> InMemoryIdentityProvider<P> {
    pub fn new(password_hasher: P) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            password_hasher,
        }
    }

    /// Look up an account by email, as the identity the provider would hand out.
    pub async fn find_by_email(&self, email: &str) -> Option<Identity> {
        let accounts = self.accounts.read().await;
        accounts.get(email).map(|account| {
            let identity = Identity::new(account.uid.clone());
            match &account.display_name {
                Some(name) => identity.with_display_name(name.clone()),
                None => identity,
            }
        })
    }
}

#[async_trait]
impl<P: PasswordHasher> IdentityProvider for InMemoryIdentityProvider<P> {
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        let password_hash = self.password_hasher.hash(password)?;

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(IdentityError::Provider(EMAIL_IN_USE.to_string()));
        }

        let uid = Uuid::new_v4().simple().to_string();
        accounts.insert(
            email.to_string(),
            Account {
                uid: uid.clone(),
                password_hash,
                display_name: None,
            },
        );

        Ok(Identity::new(uid))
    }

    async fn set_display_name(&self, identity: &Identity, name: &str) -> Result<(), IdentityError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .values_mut()
            .find(|account| account.uid == identity.uid())
            .ok_or_else(|| IdentityError::Provider(UNKNOWN_USER.to_string()))?;
        account.display_name = Some(name.to_string());
        Ok(())
    }
}
