use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::IdentityError, models::identity::Identity,
        services::identity_provider::IdentityProvider,
    },
    infrastructure::firebase_error::{describe_auth_error, error_message},
};

// Request

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

// Response

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    #[serde(default)]
    local_id: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
}

/// Identity provider backed by the Firebase Identity Toolkit REST API.
#[derive(Clone)]
pub struct FirebaseIdentityProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FirebaseIdentityProvider {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, method: &str) -> Result<Url, IdentityError> {
        let segment = format!("accounts:{method}");
        let mut url =
            Url::parse(&self.base_url).map_err(|e| IdentityError::Transport(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| IdentityError::Transport(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["v1", segment.as_str()]);
        Ok(url)
    }

    fn post(&self, method: &str) -> Result<RequestBuilder, IdentityError> {
        Ok(self
            .client
            .post(self.endpoint(method)?)
            .query(&[("key", self.api_key.as_str())]))
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        let response = self
            .post("signUp")?
            .json(&SignUpRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(IdentityError::Provider(describe_auth_error(&message)));
        }

        let body: SignUpResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let uid = body
            .local_id
            .filter(|uid| !uid.trim().is_empty())
            .ok_or(IdentityError::MissingIdentity)?;
        let identity = Identity::new(uid);
        Ok(match body.id_token {
            Some(token) => identity.with_id_token(token),
            None => identity,
        })
    }

    async fn set_display_name(&self, identity: &Identity, name: &str) -> Result<(), IdentityError> {
        let id_token = identity
            .id_token()
            .ok_or_else(|| IdentityError::Provider(describe_auth_error("INVALID_ID_TOKEN")))?;

        let response = self
            .post("update")?
            .json(&UpdateProfileRequest {
                id_token,
                display_name: name,
                return_secure_token: false,
            })
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(IdentityError::Provider(describe_auth_error(&message)));
        }
        Ok(())
    }
}
