pub mod identity_provider;
pub mod password_service;
