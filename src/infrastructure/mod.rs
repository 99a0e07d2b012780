pub mod argon2_password_hasher;
mod firebase_error;
pub mod firebase_identity_provider;
pub mod firestore_document_store;
pub mod in_memory_document_store;
pub mod in_memory_identity_provider;

#[cfg(test)]
pub(crate) mod test_fixtures;
