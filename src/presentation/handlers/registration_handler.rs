use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        models::registration::RegistrationForm, repositories::document_store::DocumentStore,
        services::identity_provider::IdentityProvider,
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};

// Request

/// json for register request
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<RegisterRequest> for RegistrationForm {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_registration_router<I, S>(register_service: RegisterUserUsecase<I, S>) -> Router
where
    I: IdentityProvider + 'static,
    S: DocumentStore + 'static,
{
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<I, S>))
        .with_state(state)
}

pub struct AppState<I: IdentityProvider, S: DocumentStore> {
    pub register_service: Arc<RegisterUserUsecase<I, S>>,
}

impl<I: IdentityProvider, S: DocumentStore> Clone for AppState<I, S> {
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
        }
    }
}

/// handler function for register
///
/// The outcome body is returned either way; only the status differs.
async fn register<I, S>(
    State(state): State<AppState<I, S>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse
where
    I: IdentityProvider + 'static,
    S: DocumentStore + 'static,
{
    let form = RegistrationForm::from(payload);
    let outcome = state.register_service.register(&form).await;
    let status = if outcome.success {
        StatusCode::CREATED
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(outcome))
}
