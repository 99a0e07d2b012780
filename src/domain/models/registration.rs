use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of the sign-up form taken at the moment the user submits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// The only value handed back to the caller of a registration attempt.
///
/// `error_message` is meaningful when `success` is false. It can also be set
/// alongside `success == true` when the identity was created but the user
/// record could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub success: bool,
    pub error_message: String,
}

impl RegistrationOutcome {
    pub fn completed() -> Self {
        Self {
            success: true,
            error_message: String::new(),
        }
    }

    pub fn completed_with_error(message: impl Into<String>) -> Self {
        Self {
            success: true,
            error_message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: message.into(),
        }
    }
}

/// Stages a single registration attempt moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStage {
    Validating,
    CreatingIdentity,
    AttachingProfile,
    PersistingRecord,
    Rejected,
    Completed,
}

impl fmt::Display for RegistrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Validating => "validating",
            Self::CreatingIdentity => "creating_identity",
            Self::AttachingProfile => "attaching_profile",
            Self::PersistingRecord => "persisting_record",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        };
        f.write_str(stage)
    }
}
