use crate::{
    domain::{
        models::registration::RegistrationForm, repositories::document_store::DocumentStore,
        services::identity_provider::IdentityProvider,
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};

/// Editable sign-up screen state.
///
/// Holds the four form fields the user types into plus the message shown
/// under the form. The outcome of a submission is applied back onto this
/// value by the task that awaited it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterViewModel {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error_message: String,
}

impl RegisterViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the current field values into an immutable form.
    pub fn snapshot(&self) -> RegistrationForm {
        RegistrationForm::new(
            self.name.clone(),
            self.email.clone(),
            self.password.clone(),
            self.confirm_password.clone(),
        )
    }

    /// Submit the current fields. Returns whether the attempt succeeded.
    ///
    /// A non-empty outcome message replaces `error_message`; otherwise the
    /// previous message is left in place.
    pub async fn register<I, S>(&mut self, usecase: &RegisterUserUsecase<I, S>) -> bool
    where
        I: IdentityProvider + 'static,
        S: DocumentStore,
    {
        let form = self.snapshot();
        let outcome = usecase.register(&form).await;
        if !outcome.error_message.is_empty() {
            self.error_message = outcome.error_message;
        }
        outcome.success
    }
}
