use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use signup::{
    config::{AppConfig, BackendConfig},
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        firebase_identity_provider::FirebaseIdentityProvider,
        firestore_document_store::FirestoreDocumentStore,
        in_memory_document_store::InMemoryDocumentStore,
        in_memory_identity_provider::InMemoryIdentityProvider,
    },
    logging::init_tracing,
    presentation::handlers::registration_handler::create_registration_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.logging)?;

    let registration_router = match &config.backend {
        BackendConfig::Memory => {
            info!("using in-memory identity provider and document store");
            let identity_provider = InMemoryIdentityProvider::new(Argon2PasswordHasher::new());
            let document_store = InMemoryDocumentStore::new();
            create_registration_router(RegisterUserUsecase::new(identity_provider, document_store))
        }
        BackendConfig::Firebase(firebase) => {
            info!(project = %firebase.project_id, "using firebase backend");
            let client = reqwest::Client::new();
            let identity_provider = FirebaseIdentityProvider::new(
                client.clone(),
                firebase.auth_url.as_str(),
                firebase.api_key.as_str(),
            );
            let document_store = FirestoreDocumentStore::new(
                client,
                firebase.firestore_url.as_str(),
                firebase.project_id.as_str(),
                firebase.api_key.as_str(),
            );
            create_registration_router(RegisterUserUsecase::new(identity_provider, document_store))
        }
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", registration_router);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
