use crate::domain::error::IdentityError;

pub type HashedPassword = String;

/// Service for hashing passwords before an identity provider stores them
pub trait PasswordHasher: Clone + Send + Sync {
    /// Hash a plain text password
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, IdentityError>;
}
