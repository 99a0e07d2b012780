use thiserror::Error;

/// Rejection reasons produced by the form validator.
///
/// The `Display` text of each variant is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid Email/Password. Fill in all the fields")]
    MissingFields,

    #[error("Enter a valid Email")]
    InvalidEmail,

    #[error("Password should be at least 6 characters long")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The provider rejected the request and described why.
    #[error("{0}")]
    Provider(String),

    /// The provider answered without an error but also without a usable identity.
    #[error("Registration Failed")]
    MissingIdentity,

    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Write(String),

    #[error("{0}")]
    Transport(String),
}

/// Failures that stop a registration attempt before any record is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    IdentityCreation(#[from] IdentityError),
}
