pub mod identity;
pub mod registration;
pub mod user_record;
