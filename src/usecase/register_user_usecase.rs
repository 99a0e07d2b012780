use std::sync::Arc;

use tracing::{Instrument, debug, error, info, warn};

use crate::domain::{
    error::{IdentityError, RegistrationError},
    models::{
        identity::Identity,
        registration::{RegistrationForm, RegistrationOutcome, RegistrationStage},
        user_record::{USERS_COLLECTION, UserRecord},
    },
    repositories::document_store::DocumentStore,
    services::identity_provider::IdentityProvider,
    validation::validate,
};

/// Drives one sign-up attempt: validate, create the identity, name it, store the user record.
pub struct RegisterUserUsecase<I: IdentityProvider, S: DocumentStore> {
    identity_provider: Arc<I>,
    document_store: S,
}

impl<I: IdentityProvider + 'static, S: DocumentStore> RegisterUserUsecase<I, S> {
    pub fn new(identity_provider: I, document_store: S) -> Self {
        Self {
            identity_provider: Arc::new(identity_provider),
            document_store,
        }
    }

    /// Run a registration attempt and reduce it to a single outcome.
    ///
    /// Never fails: every error is folded into the returned
    /// [`RegistrationOutcome`]. Once the identity exists the attempt always
    /// reports success, even when the user record could not be written; in
    /// that case `error_message` carries the store's description.
    #[tracing::instrument(name = "register_user", skip_all, fields(email = %form.email))]
    pub async fn register(&self, form: &RegistrationForm) -> RegistrationOutcome {
        let identity = match self.create_identity(form).await {
            Ok(identity) => identity,
            Err(err) => {
                debug!(stage = %RegistrationStage::Rejected, reason = %err, "registration rejected");
                return RegistrationOutcome::rejected(rejection_message(&err));
            }
        };

        self.attach_display_name(&identity, &form.name);

        debug!(stage = %RegistrationStage::PersistingRecord, uid = identity.uid());
        let record = UserRecord::for_identity(&identity, &form.name, &form.email);
        let outcome = match self
            .document_store
            .write(USERS_COLLECTION, identity.uid(), &record, &identity)
            .await
        {
            Ok(()) => {
                info!(uid = identity.uid(), "user registered");
                RegistrationOutcome::completed()
            }
            Err(err) => {
                // identity already exists, so the attempt still counts as completed
                error!(uid = identity.uid(), error = %err, "failed to write user record");
                RegistrationOutcome::completed_with_error(err.to_string())
            }
        };
        debug!(stage = %RegistrationStage::Completed, uid = identity.uid());
        outcome
    }

    async fn create_identity(&self, form: &RegistrationForm) -> Result<Identity, RegistrationError> {
        debug!(stage = %RegistrationStage::Validating);
        validate(form)?;

        debug!(stage = %RegistrationStage::CreatingIdentity);
        let identity = self
            .identity_provider
            .create_account(&form.email, &form.password)
            .await?;
        if !identity.is_usable() {
            return Err(IdentityError::MissingIdentity.into());
        }
        Ok(identity)
    }

    /// Fire-and-forget: the result is only logged and never joined.
    fn attach_display_name(&self, identity: &Identity, name: &str) {
        debug!(stage = %RegistrationStage::AttachingProfile, uid = identity.uid());
        let provider = Arc::clone(&self.identity_provider);
        let identity = identity.clone();
        let name = name.to_string();
        tokio::spawn(
            async move {
                if let Err(err) = provider.set_display_name(&identity, &name).await {
                    warn!(uid = identity.uid(), error = %err, "failed to set display name");
                }
            }
            .in_current_span(),
        );
    }
}

fn rejection_message(err: &RegistrationError) -> String {
    let message = err.to_string();
    if message.is_empty() {
        IdentityError::MissingIdentity.to_string()
    } else {
        message
    }
}
