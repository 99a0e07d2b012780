//! In-process stand-ins for the Firebase REST endpoints.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{patch, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

// reserved characters make every request exercise query encoding
pub const API_KEY: &str = "test-api-key+/=&?#";
pub const FIXTURE_UID: &str = "fixture-uid-1";
pub const FIXTURE_TOKEN: &str = "fixture-id-token";

/// HTTP client that talks to fixtures directly, ignoring any proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_fixture(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn firebase_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "error": { "code": status.as_u16(), "message": message } })),
    )
        .into_response()
}

fn has_api_key(query: &HashMap<String, String>) -> bool {
    query.get("key").map(String::as_str) == Some(API_KEY)
}

fn has_bearer_token(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        == Some(FIXTURE_TOKEN)
}

// Identity Toolkit

#[derive(Clone, Default)]
pub struct AuthFixture {
    pub display_names: Arc<Mutex<Vec<(String, String)>>>,
}

impl AuthFixture {
    pub fn router(&self) -> Router {
        Router::new()
            .route("/v1/accounts:signUp", post(sign_up))
            .route("/v1/accounts:update", post(update))
            .with_state(self.clone())
    }
}

async fn sign_up(
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if !has_api_key(&query) {
        return firebase_error(StatusCode::BAD_REQUEST, "API key not valid. Please pass a valid API key.");
    }
    let email = body["email"].as_str().unwrap_or_default();
    if email.contains("taken") {
        return firebase_error(StatusCode::BAD_REQUEST, "EMAIL_EXISTS");
    }
    if email.contains("weak") {
        return firebase_error(
            StatusCode::BAD_REQUEST,
            "WEAK_PASSWORD : Password should be at least 6 characters",
        );
    }
    if email.contains("ghost") {
        return Json(json!({ "kind": "identitytoolkit#SignupNewUserResponse" })).into_response();
    }
    if email.contains("crash") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }
    Json(json!({
        "kind": "identitytoolkit#SignupNewUserResponse",
        "localId": FIXTURE_UID,
        "idToken": FIXTURE_TOKEN,
        "email": email,
        "refreshToken": "fixture-refresh",
        "expiresIn": "3600"
    }))
    .into_response()
}

async fn update(
    State(fixture): State<AuthFixture>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if !has_api_key(&query) {
        return firebase_error(StatusCode::BAD_REQUEST, "API key not valid. Please pass a valid API key.");
    }
    if body["idToken"].as_str() != Some(FIXTURE_TOKEN) {
        return firebase_error(StatusCode::BAD_REQUEST, "INVALID_ID_TOKEN");
    }
    let display_name = body["displayName"].as_str().unwrap_or_default().to_string();
    fixture
        .display_names
        .lock()
        .unwrap()
        .push((FIXTURE_UID.to_string(), display_name.clone()));
    Json(json!({ "localId": FIXTURE_UID, "displayName": display_name })).into_response()
}

// Firestore

#[derive(Clone, Default)]
pub struct FirestoreFixture {
    pub documents: Arc<Mutex<HashMap<String, Value>>>,
}

impl FirestoreFixture {
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/v1/projects/{project}/databases/{database}/documents/{collection}/{key}",
                patch(patch_document),
            )
            .with_state(self.clone())
    }

    pub fn document(&self, path: &str) -> Option<Value> {
        self.documents.lock().unwrap().get(path).cloned()
    }
}

/// Security rules allow signed-in users only. Honors `currentDocument.exists`.
async fn patch_document(
    State(fixture): State<FirestoreFixture>,
    Path((project, database, collection, key)): Path<(String, String, String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !has_api_key(&query) || !has_bearer_token(&headers) {
        return firebase_error(StatusCode::FORBIDDEN, "Missing or insufficient permissions.");
    }
    if key == "over-quota" {
        return firebase_error(StatusCode::TOO_MANY_REQUESTS, "quota exceeded");
    }
    let name = format!("projects/{project}/databases/{database}/documents/{collection}/{key}");
    let mut documents = fixture.documents.lock().unwrap();
    let path = format!("{collection}/{key}");
    let must_be_new = query.get("currentDocument.exists").map(String::as_str) == Some("false");
    if must_be_new && documents.contains_key(&path) {
        return firebase_error(StatusCode::CONFLICT, &format!("Document already exists: {name}"));
    }
    documents.insert(path, body["fields"].clone());
    Json(json!({ "name": name, "fields": body["fields"] })).into_response()
}
